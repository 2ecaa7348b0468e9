use super::{mtfcc_rules, osm_rules, Classification};
use crate::model::source::SourceVocabulary;

/// the attributes the rule engine reads, typed per source vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceAttributes {
    StateCenterline {
        mtfcc: String,
        posted_speed: Option<i64>,
        /// `None` when the source has no segment-exists flag
        segment_exists: Option<bool>,
        in_urban_area: bool,
    },
    Census {
        mtfcc: String,
        route_type: Option<String>,
        in_urban_area: bool,
    },
    Osm {
        code: Option<i64>,
        maxspeed_kph: Option<f64>,
        in_urban_area: bool,
    },
}

impl SourceAttributes {
    /// role and speed for this record. never fails: unmapped classes become
    /// local roads at walking pace.
    pub fn classify(&self) -> Classification {
        match self {
            SourceAttributes::StateCenterline {
                mtfcc,
                posted_speed,
                segment_exists,
                ..
            } => mtfcc_rules::classify_state_centerline(mtfcc, *posted_speed, *segment_exists),
            SourceAttributes::Census {
                mtfcc,
                route_type,
                in_urban_area,
            } => mtfcc_rules::classify_census(mtfcc, route_type.as_deref(), *in_urban_area),
            SourceAttributes::Osm {
                code,
                maxspeed_kph,
                in_urban_area,
            } => osm_rules::classify_osm(*code, *maxspeed_kph, *in_urban_area),
        }
    }

    pub fn vocabulary(&self) -> SourceVocabulary {
        match self {
            SourceAttributes::StateCenterline { .. } => SourceVocabulary::StateCenterline,
            SourceAttributes::Census { .. } => SourceVocabulary::Census,
            SourceAttributes::Osm { .. } => SourceVocabulary::Osm,
        }
    }

    pub fn in_urban_area(&self) -> bool {
        match self {
            SourceAttributes::StateCenterline { in_urban_area, .. } => *in_urban_area,
            SourceAttributes::Census { in_urban_area, .. } => *in_urban_area,
            SourceAttributes::Osm { in_urban_area, .. } => *in_urban_area,
        }
    }
}
