use serde::Serialize;

/// Undirected edge between two stations.
///
/// `time` is fixed at creation as `distance * time_factor`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    distance: f64,
    time_factor: f64,
    time: f64,
    line: String,
}

impl Connection {
    pub(crate) fn new(distance: f64, time_factor: f64, line: String) -> Self {
        Self {
            distance,
            time_factor,
            time: distance * time_factor,
            line,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn time_factor(&self) -> f64 {
        self.time_factor
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}
