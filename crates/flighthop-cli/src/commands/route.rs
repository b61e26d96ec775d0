//! Route command handler for computing shortest country-to-country routes.

use std::path::Path;

use anyhow::Result;

use flighthop_lib::{plan_route, RouteRequest, RouteSummary};

use crate::commands::load_network;
use crate::output::OutputFormat;

/// Handle the route subcommand.
pub fn handle_route(
    target: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let graph = load_network(target)?;
    let plan = plan_route(&graph, &RouteRequest::new(from, to))?;
    let summary = RouteSummary::from_plan(&graph, &plan)?;

    format.render(&summary, || summary.render_plain())?;
    Ok(())
}
