//! Challenge command handler for picking random navigation pairs.

use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use flighthop_lib::{plan_challenge, ChallengeSummary};

use crate::commands::load_network;
use crate::output::OutputFormat;

/// Challenge prompt without the optimal route, used when the answer stays
/// hidden.
#[derive(Debug, Serialize)]
struct ChallengePrompt<'a> {
    source: &'a str,
    destination: &'a str,
    par: usize,
}

/// Handle the challenge subcommand.
pub fn handle_challenge(
    target: Option<&Path>,
    format: OutputFormat,
    min_length: usize,
    seed: Option<u64>,
    reveal: bool,
) -> Result<()> {
    let graph = load_network(target)?;
    let mut rng = seeded_rng(seed);

    let challenge = plan_challenge(&graph, min_length, &mut rng)?;
    let summary = ChallengeSummary::from_challenge(&graph, &challenge);

    if reveal {
        format.render(&summary, || summary.render_plain(true))?;
    } else {
        let prompt = ChallengePrompt {
            source: &summary.source,
            destination: &summary.destination,
            par: summary.par,
        };
        format.render(&prompt, || summary.render_plain(false))?;
    }
    Ok(())
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
