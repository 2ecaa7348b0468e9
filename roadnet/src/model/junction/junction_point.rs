use crate::model::{feature::JunctionType, segment::geometry_ops};
use geo::Point;
use serde::Serialize;
use std::fmt::Display;

/// a synthesized location forcing connectivity between the limited-access
/// and local sub-networks. produced once per synthesis run and never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct JunctionPoint {
    pub id: String,
    pub location: Point<f64>,
    pub junction_type: JunctionType,
    /// segment whose endpoint (or crossing) produced this point
    pub segment_id: String,
    /// set for points found by the heuristic recovery pass, which may sit
    /// where a ramp passes over a local road without connecting to it.
    pub needs_review: bool,
}

impl Display for JunctionPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let review = if self.needs_review {
            " (needs review)"
        } else {
            ""
        };
        write!(
            f,
            "JunctionPoint {} {} at ({}, {}) from segment {}{}",
            self.id,
            self.junction_type,
            self.location.x(),
            self.location.y(),
            self.segment_id,
            review
        )
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct JunctionPointSerializable {
    pub id: String,
    pub junction_type: JunctionType,
    pub segment_id: String,
    pub needs_review: bool,
    #[serde(serialize_with = "geometry_ops::serialize_point")]
    pub geometry: Point<f64>,
}

impl From<&JunctionPoint> for JunctionPointSerializable {
    fn from(value: &JunctionPoint) -> Self {
        JunctionPointSerializable {
            id: value.id.clone(),
            junction_type: value.junction_type,
            segment_id: value.segment_id.clone(),
            needs_review: value.needs_review,
            geometry: value.location,
        }
    }
}
