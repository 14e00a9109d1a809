use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, INTERCONNECTION_LINE, INTERCONNECTION_TIME_FACTOR};

/// Declarative description of a transit network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub stations: Vec<StationConfig>,
    #[serde(default)]
    pub lines: Vec<LineConfig>,
    #[serde(default)]
    pub interconnections: Vec<InterconnectionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Ordered stations of one line; consecutive stations are connected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Defaults to the name of the first station
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub stations: Vec<String>,
}

/// Extra edge joining two lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterconnectionConfig {
    pub from: String,
    pub to: String,
    #[serde(default = "default_interconnection_line")]
    pub line: String,
    #[serde(default = "default_interconnection_time_factor")]
    pub time_factor: f64,
}

fn default_interconnection_line() -> String {
    INTERCONNECTION_LINE.to_string()
}

fn default_interconnection_time_factor() -> f64 {
    INTERCONNECTION_TIME_FACTOR
}

impl NetworkConfig {
    /// Reads a network description from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid JSON
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open file '{}': {}", path.display(), e),
            )
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Parses a network description from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON for this schema
    pub fn from_json_str(input: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(input)?)
    }
}
