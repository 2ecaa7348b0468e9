use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the topological case that produced a junction point. variants are
/// declared in emission precedence order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum JunctionType {
    /// ramp endpoint touching a highway
    RampToHighway,
    /// terminal of the dissolved highway network touching a ramp
    HighwayDeadEndToLocal,
    /// ramp endpoint touching a local road
    RampToLocal,
    /// terminal of the dissolved highway network running into a local road with no ramp
    HighwayDeadEndJoinsLocalDirectly,
}

impl JunctionType {
    /// prefix used when numbering junction points of this type
    pub fn id_prefix(&self) -> &'static str {
        match self {
            JunctionType::RampToHighway => "RMPHWY",
            JunctionType::HighwayDeadEndToLocal => "HWYEND",
            JunctionType::RampToLocal => "RMPLOC",
            JunctionType::HighwayDeadEndJoinsLocalDirectly => "HWYLOC",
        }
    }
}

impl Display for JunctionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JunctionType::RampToHighway => "ramp_to_highway",
            JunctionType::HighwayDeadEndToLocal => "highway_dead_end_to_local",
            JunctionType::RampToLocal => "ramp_to_local",
            JunctionType::HighwayDeadEndJoinsLocalDirectly => {
                "highway_dead_end_joins_local_directly"
            }
        };
        write!(f, "{s}")
    }
}
