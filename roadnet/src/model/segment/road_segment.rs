use crate::model::feature::{RoadRole, SpeedSource};
use geo::LineString;
use std::fmt::Display;

/// a normalized road segment in the common schema. every field has the same
/// meaning regardless of which source vocabulary the record came from.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadSegment {
    /// `{source tag}_{natural key}`, unique across merged sources
    pub id: String,
    /// name of the source this segment was read from
    pub source: String,
    /// classification code as found in the source, kept for audit
    pub source_class: String,
    pub role: RoadRole,
    /// always > 0
    pub speed_mph: u32,
    pub speed_source: SpeedSource,
    /// true once the urban congestion penalty has been applied
    pub urban_adjusted: bool,
    /// minutes per meter
    pub travel_time_per_unit_length: f64,
    /// planar length of the geometry
    pub length: f64,
    /// minutes to traverse the whole segment
    pub travel_time_minutes: f64,
    pub in_urban_area: bool,
    pub geometry: LineString<f64>,
}

impl RoadSegment {
    pub fn is_limited_access(&self) -> bool {
        self.role.is_limited_access()
    }
}

impl Display for RoadSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoadSegment {} ({} class '{}', {} mph from {})",
            self.id, self.role, self.source_class, self.speed_mph, self.speed_source
        )
    }
}
