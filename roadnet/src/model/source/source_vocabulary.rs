use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the classification vocabulary of a source dataset. each vocabulary has
/// its own code tables but maps into the same roles and speed tiers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceVocabulary {
    /// state-maintained road centerlines, MTFCC-coded, with posted speeds
    /// and a segment-exists flag
    StateCenterline,
    /// census TIGER/Line roads, MTFCC-coded, with route type
    Census,
    /// Geofabrik OpenStreetMap road extracts with numeric class codes and
    /// maxspeed in km/h
    Osm,
}

impl SourceVocabulary {
    /// whether the urban congestion penalty applies to this vocabulary
    pub fn applies_urban_adjustment(&self) -> bool {
        match self {
            SourceVocabulary::StateCenterline => false,
            SourceVocabulary::Census => true,
            SourceVocabulary::Osm => true,
        }
    }
}

impl Display for SourceVocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceVocabulary::StateCenterline => "state_centerline",
            SourceVocabulary::Census => "census",
            SourceVocabulary::Osm => "osm",
        };
        write!(f, "{s}")
    }
}
