use std::fmt::Write;

use serde::Serialize;

use crate::challenge::Challenge;
use crate::error::{Error, Result};
use crate::graph::{CountryGraph, CountryId};
use crate::routing::RoutePlan;

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub country: String,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub hops: usize,
    pub start: String,
    pub goal: String,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved country names.
    pub fn from_plan(graph: &CountryGraph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &country)| RouteStep {
                index,
                country: display_name(graph, country),
            })
            .collect::<Vec<_>>();

        let start = steps
            .first()
            .map(|step| step.country.clone())
            .expect("validated non-empty steps");
        let goal = steps
            .last()
            .map(|step| step.country.clone())
            .expect("validated non-empty steps");

        Ok(Self {
            hops: plan.hop_count(),
            start,
            goal,
            steps,
        })
    }

    /// Render the summary as plain text.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} flights):",
            self.start, self.goal, self.hops
        );
        let joined = self
            .steps
            .iter()
            .map(|step| step.country.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(buffer, "{joined}");
        buffer
    }
}

/// Challenge with resolved names, ready for presentation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChallengeSummary {
    pub source: String,
    pub destination: String,
    pub par: usize,
    pub optimal_route: Vec<String>,
}

impl ChallengeSummary {
    /// Resolve a picked [`Challenge`] into country names.
    pub fn from_challenge(graph: &CountryGraph, challenge: &Challenge) -> Self {
        Self {
            source: display_name(graph, challenge.source),
            destination: display_name(graph, challenge.destination),
            par: challenge.par(),
            optimal_route: challenge
                .par_path
                .iter()
                .map(|&id| display_name(graph, id))
                .collect(),
        }
    }

    /// Render the challenge as plain text. The optimal route is only included
    /// when `reveal` is set, so a game prompt does not spoil the answer.
    pub fn render_plain(&self, reveal: bool) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Fly from {} to {}.",
            self.source, self.destination
        );
        let _ = writeln!(buffer, "Optimal: {} flights.", self.par);
        if reveal {
            let _ = writeln!(
                buffer,
                "Optimal route: {}",
                self.optimal_route.join(" -> ")
            );
        }
        buffer
    }
}

fn display_name(graph: &CountryGraph, country: CountryId) -> String {
    graph
        .country_name(country)
        .unwrap_or("<unknown>")
        .to_string()
}
