//! Loading the network the commands run against

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use ferroroute_core::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::error::CliError;

/// Builds the network described by `path`, or the built-in TransMilenio
/// network when no file is given
pub(crate) fn load_network(path: Option<&Path>) -> Result<TransitNetwork, CliError> {
    let config = match path {
        Some(path) => {
            info!("Reading network from {}", path.display());
            read_config(path)?
        }
        None => {
            info!("Using built-in TransMilenio network");
            NetworkConfig::transmilenio()
        }
    };

    Ok(create_transit_network(&config)?)
}

fn read_config(path: &Path) -> Result<NetworkConfig, CliError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("json") => Ok(NetworkConfig::from_json_file(path)?),
        Some("toml") => parse_toml(&fs::read_to_string(path)?),
        _ => Err(CliError::UnsupportedFormat(path.display().to_string())),
    }
}

fn parse_toml(input: &str) -> Result<NetworkConfig, CliError> {
    Ok(toml::from_str(input)?)
}

#[derive(Serialize)]
struct StationRow<'a> {
    name: &'a str,
    latitude: f64,
    longitude: f64,
}

/// Station listing, one per line or as a JSON array
pub(crate) fn render_stations(network: &TransitNetwork, json: bool) -> Result<String, CliError> {
    if json {
        let rows: Vec<StationRow> = network
            .stations()
            .map(|station| StationRow {
                name: station.name(),
                latitude: station.latitude(),
                longitude: station.longitude(),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let width = network
        .stations()
        .map(|station| station.name().chars().count())
        .max()
        .unwrap_or(0);
    Ok(network
        .stations()
        .map(|station| {
            format!(
                "{:<width$}  {:>9.4}  {:>9.4}",
                station.name(),
                station.latitude(),
                station.longitude()
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
