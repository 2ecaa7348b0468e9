use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the precedence tier that produced a segment speed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpeedSource {
    /// a plausible posted speed found on the record
    Posted,
    /// default speed for the road class
    ClassDefault,
    /// walking pace, used for segments not on the ground or with an unmapped class
    Fallback,
}

impl Display for SpeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SpeedSource::Posted => "posted",
            SpeedSource::ClassDefault => "class_default",
            SpeedSource::Fallback => "fallback",
        };
        write!(f, "{s}")
    }
}
