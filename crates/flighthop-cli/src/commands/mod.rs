//! CLI subcommand handlers.
//!
//! Each module handles a specific subcommand; `main.rs` stays focused on
//! argument parsing and dispatch.

use std::path::Path;

use anyhow::{Context, Result};

use flighthop_lib::{build_graph, resolve_data_dir, CountryGraph, FlightData};

pub mod challenge;
pub mod exact;
pub mod neighbours;
pub mod route;
pub mod sample;
pub mod stats;

/// Load flight data from the resolved directory and build the country graph.
pub(crate) fn load_network(target: Option<&Path>) -> Result<CountryGraph> {
    let data_dir =
        resolve_data_dir(target).context("failed to resolve the flight data directory")?;
    let data = FlightData::load(&data_dir)
        .with_context(|| format!("failed to load flight data from {}", data_dir.display()))?;
    Ok(build_graph(&data.routes, &data.airports))
}
