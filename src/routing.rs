//! `route` command

use ferroroute_core::prelude::*;

use crate::error::CliError;

/// Finds the best route and renders it as text or JSON
pub(crate) fn route(
    network: &TransitNetwork,
    from: &str,
    to: &str,
    criterion: &str,
    json: bool,
) -> Result<String, CliError> {
    // Same check order as TransitNetwork::find_route: start, end, criterion
    for name in [from, to] {
        if !network.contains_station(name) {
            return Err(Error::UnknownStation(name.to_string()).into());
        }
    }
    let criterion: Criterion = criterion.parse()?;
    let summary = network.plan_route(from, to, criterion)?;

    if json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(render_summary(&summary))
    }
}

fn render_summary(summary: &RouteSummary) -> String {
    let mut lines = vec![format!(
        "Route {} -> {} by {} ({:.6})",
        summary.origin().unwrap_or_default(),
        summary.destination().unwrap_or_default(),
        summary.criterion,
        summary.weight
    )];

    lines.extend(summary.legs.iter().map(|leg| {
        format!(
            "  {} -> {} [{}] distance {:.6}, time {:.6}",
            leg.from, leg.to, leg.line, leg.distance, leg.time
        )
    }));

    lines.push(format!(
        "{} stations, {} hops, {} line changes, distance {:.6}, time {:.6}",
        summary.stations.len(),
        summary.hops,
        summary.line_changes,
        summary.total_distance,
        summary.total_time
    ));

    lines.join("\n")
}
