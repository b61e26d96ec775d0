//! Neighbours command handler for listing direct destinations.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use flighthop_lib::{neighbouring_countries, resolve_country};

use crate::commands::load_network;
use crate::output::OutputFormat;

/// Direct destinations from a country.
#[derive(Debug, Serialize)]
struct NeighbourList {
    country: String,
    destinations: Vec<String>,
}

/// Handle the neighbours subcommand.
pub fn handle_neighbours(target: Option<&Path>, format: OutputFormat, country: &str) -> Result<()> {
    let graph = load_network(target)?;

    let resolved = resolve_country(&graph, country)?;
    let canonical = graph
        .country_name(resolved)
        .unwrap_or(country)
        .to_string();
    let destinations = neighbouring_countries(&graph, &canonical)?;

    let list = NeighbourList {
        country: canonical,
        destinations,
    };

    format.render(&list, || {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} connects to {} countries:",
            list.country,
            list.destinations.len()
        );
        for destination in &list.destinations {
            let _ = writeln!(buffer, " - {destination}");
        }
        buffer
    })?;
    Ok(())
}
