//! `matrix` command

use ferroroute_core::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;

#[derive(Serialize)]
struct MatrixOutput<'a> {
    criterion: Criterion,
    stations: &'a [&'a str],
    costs: Vec<Vec<Option<f64>>>,
}

/// All-pairs cost matrix over every station of the network
pub(crate) fn matrix(
    network: &TransitNetwork,
    criterion: &str,
    json: bool,
) -> Result<String, CliError> {
    let criterion: Criterion = criterion.parse()?;
    let stations: Vec<&str> = network.stations().map(Station::name).collect();
    let costs = route_matrix(network, &stations, &stations, criterion)?;
    debug!("Computed {0}x{0} {criterion} matrix", stations.len());

    if json {
        let output = MatrixOutput {
            criterion,
            stations: &stations,
            costs,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let width = stations
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .max(10);

    let mut rows = vec![format!(
        "{:<width$}{}",
        "",
        stations
            .iter()
            .map(|name| format!(" {name:>width$}"))
            .collect::<String>()
    )];
    rows.extend(stations.iter().zip(&costs).map(|(name, row)| {
        let cells: String = row
            .iter()
            .map(|cost| match cost {
                Some(cost) => format!(" {cost:>width$.4}"),
                None => format!(" {:>width$}", "-"),
            })
            .collect();
        format!("{name:<width$}{cells}")
    }));

    Ok(rows.join("\n"))
}
