//! Exact command handler for routes with a required number of flights.

use std::path::Path;

use anyhow::Result;

use flighthop_lib::{plan_exact_route, ExactRouteRequest, RouteSummary};

use crate::commands::load_network;
use crate::output::OutputFormat;

/// Handle the exact subcommand.
pub fn handle_exact(
    target: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
    length: usize,
) -> Result<()> {
    let graph = load_network(target)?;
    let plan = plan_exact_route(&graph, &ExactRouteRequest::new(from, to, length))?;
    let summary = RouteSummary::from_plan(&graph, &plan)?;

    format.render(&summary, || summary.render_plain())?;
    Ok(())
}
