//! Stats command handler for summarising the flight network.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;

use flighthop_lib::{network_stats, NetworkStats};

use crate::commands::load_network;
use crate::output::OutputFormat;

/// Handle the stats subcommand.
pub fn handle_stats(target: Option<&Path>, format: OutputFormat, top: usize) -> Result<()> {
    let graph = load_network(target)?;
    let stats = network_stats(&graph, top);

    format.render(&stats, || render_stats_text(&stats))?;
    Ok(())
}

fn render_stats_text(stats: &NetworkStats) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "Countries: {}", stats.countries);
    let _ = writeln!(buffer, "Connections: {}", stats.connections);
    let _ = writeln!(buffer, "Reachable pairs: {}", stats.reachable_pairs);

    let _ = writeln!(buffer, "\nOptimal route length distribution:");
    for bucket in &stats.length_distribution {
        let _ = writeln!(buffer, " - {} flights: {} pairs", bucket.length, bucket.pairs);
    }

    let _ = writeln!(buffer, "\nTop departure countries:");
    for entry in &stats.top_sources {
        let _ = writeln!(
            buffer,
            " - {} ({} connections)",
            entry.country, entry.connections
        );
    }

    let _ = writeln!(buffer, "\nTop destination countries:");
    for entry in &stats.top_destinations {
        let _ = writeln!(
            buffer,
            " - {} ({} connections)",
            entry.country, entry.connections
        );
    }

    buffer
}
