//! Built-in TransMilenio sample network

use super::config::{InterconnectionConfig, LineConfig, NetworkConfig, StationConfig};
use crate::{INTERCONNECTION_LINE, INTERCONNECTION_TIME_FACTOR};

const STATIONS: [(&str, f64, f64); 12] = [
    ("Portal Norte", 4.7528, -74.0455),
    ("Calle 100", 4.6768, -74.0565),
    ("Héroes", 4.6686, -74.0597),
    ("Calle 72", 4.6582, -74.0648),
    ("Calle 45", 4.6455, -74.0681),
    ("Universidades", 4.6019, -74.0663),
    ("Portal Sur", 4.5953, -74.1362),
    ("General Santander", 4.6097, -74.1257),
    ("Venecia", 4.6164, -74.1228),
    ("Banderas", 4.6265, -74.1135),
    ("Kennedy", 4.6333, -74.1066),
    ("Américas", 4.6354, -74.0977),
];

const NORTE: [&str; 6] = [
    "Portal Norte",
    "Calle 100",
    "Héroes",
    "Calle 72",
    "Calle 45",
    "Universidades",
];

const SUR: [&str; 6] = [
    "Portal Sur",
    "General Santander",
    "Venecia",
    "Banderas",
    "Kennedy",
    "Américas",
];

impl NetworkConfig {
    /// Twelve TransMilenio stations on two lines, joined between
    /// Américas and Calle 45
    pub fn transmilenio() -> Self {
        Self {
            stations: STATIONS
                .iter()
                .map(|&(name, latitude, longitude)| StationConfig {
                    name: name.to_string(),
                    latitude,
                    longitude,
                })
                .collect(),
            lines: [NORTE, SUR]
                .iter()
                .map(|line| LineConfig {
                    label: None,
                    stations: line.iter().map(ToString::to_string).collect(),
                })
                .collect(),
            interconnections: vec![InterconnectionConfig {
                from: "Américas".to_string(),
                to: "Calle 45".to_string(),
                line: INTERCONNECTION_LINE.to_string(),
                time_factor: INTERCONNECTION_TIME_FACTOR,
            }],
        }
    }
}
