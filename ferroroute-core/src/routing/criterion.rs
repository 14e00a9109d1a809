use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Connection, Error};

/// Edge weight used by the router
pub type WeightFn = fn(&Connection) -> f64;

/// Optimization criterion for a route query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Sum of connection travel times
    Time,
    /// Sum of planar connection distances
    Distance,
    /// Number of hops, an approximation of the number of transfers
    Transfers,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [Criterion::Time, Criterion::Distance, Criterion::Transfers];

    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Time => "time",
            Criterion::Distance => "distance",
            Criterion::Transfers => "transfers",
        }
    }

    pub fn weight_fn(self) -> WeightFn {
        match self {
            Criterion::Time => Connection::time,
            Criterion::Distance => Connection::distance,
            Criterion::Transfers => |_| 1.0,
        }
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| Error::InvalidCriterion(s.to_string()))
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
