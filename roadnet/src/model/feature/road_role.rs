use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// three-way segment hierarchy driving speed defaults, rasterization
/// priority and junction derivation. [`RoadRole::Highway`] and
/// [`RoadRole::Ramp`] together form the limited-access subsystem.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoadRole {
    Highway,
    Ramp,
    Local,
}

impl RoadRole {
    /// rasterization priority, the higher value wins a cell conflict.
    /// also the legacy `RmpHwy` code (2 = highway, 1 = ramp, 0 = other).
    pub fn priority(&self) -> u8 {
        match self {
            RoadRole::Highway => 2,
            RoadRole::Ramp => 1,
            RoadRole::Local => 0,
        }
    }

    pub fn is_limited_access(&self) -> bool {
        matches!(self, RoadRole::Highway | RoadRole::Ramp)
    }
}

impl Display for RoadRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoadRole::Highway => "highway",
            RoadRole::Ramp => "ramp",
            RoadRole::Local => "local",
        };
        write!(f, "{s}")
    }
}
