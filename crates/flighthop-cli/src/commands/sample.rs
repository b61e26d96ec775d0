//! Sample command handler for listing qualifying challenge pairs.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use flighthop_lib::{sample_pairs_in_range, CountryGraph, CountryId};

use crate::commands::challenge::seeded_rng;
use crate::commands::load_network;
use crate::output::OutputFormat;

/// Sampled pair with resolved country names.
#[derive(Debug, Serialize)]
struct SampledPair {
    source: String,
    destination: String,
    length: usize,
}

/// Handle the sample subcommand.
pub fn handle_sample(
    target: Option<&Path>,
    format: OutputFormat,
    min_length: usize,
    max_length: usize,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let graph = load_network(target)?;
    let mut rng = seeded_rng(seed);

    let sampled = sample_pairs_in_range(&graph, min_length, max_length, count, &mut rng);
    let pairs: Vec<SampledPair> = sampled
        .iter()
        .map(|pair| SampledPair {
            source: country_name(&graph, pair.source),
            destination: country_name(&graph, pair.destination),
            length: pair.length,
        })
        .collect();

    format.render(&pairs, || {
        let mut buffer = String::new();
        if pairs.is_empty() {
            let _ = writeln!(
                buffer,
                "No country pair is between {min_length} and {max_length} flights apart."
            );
        }
        for pair in &pairs {
            let _ = writeln!(
                buffer,
                "{} -> {} ({} flights)",
                pair.source, pair.destination, pair.length
            );
        }
        buffer
    })?;
    Ok(())
}

fn country_name(graph: &CountryGraph, country: CountryId) -> String {
    graph
        .country_name(country)
        .unwrap_or("<unknown>")
        .to_string()
}
