//! Flighthop CLI library.
//!
//! This crate provides the subcommand handlers and output formatting behind
//! the `flighthop-cli` binary.

pub mod commands;
pub mod output;
