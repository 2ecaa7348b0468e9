use super::{geometry_ops, RoadSegment};
use crate::model::feature::{RoadRole, SpeedSource};
use geo::LineString;
use serde::Serialize;

/// flat row representation of a [`RoadSegment`] for CSV output. adds the
/// `rmp_hwy` role priority consumed as the rasterization tie-break field.
#[derive(Clone, Debug, Serialize)]
pub struct RoadSegmentSerializable {
    pub id: String,
    pub source: String,
    pub source_class: String,
    pub role: RoadRole,
    pub rmp_hwy: u8,
    pub speed_mph: u32,
    pub speed_source: SpeedSource,
    pub urban_adjusted: bool,
    pub travel_time_per_unit_length: f64,
    pub length: f64,
    pub travel_time_minutes: f64,
    pub in_urban_area: bool,
    #[serde(serialize_with = "geometry_ops::serialize_linestring")]
    pub geometry: LineString<f64>,
}

impl From<&RoadSegment> for RoadSegmentSerializable {
    fn from(value: &RoadSegment) -> Self {
        RoadSegmentSerializable {
            id: value.id.clone(),
            source: value.source.clone(),
            source_class: value.source_class.clone(),
            role: value.role,
            rmp_hwy: value.role.priority(),
            speed_mph: value.speed_mph,
            speed_source: value.speed_source,
            urban_adjusted: value.urban_adjusted,
            travel_time_per_unit_length: value.travel_time_per_unit_length,
            length: value.length,
            travel_time_minutes: value.travel_time_minutes,
            in_urban_area: value.in_urban_area,
            geometry: value.geometry.clone(),
        }
    }
}
