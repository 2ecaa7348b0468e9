use super::SpeedAssignment;
use crate::model::feature::RoadRole;

/// result of classifying one record
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub role: RoadRole,
    pub speed: SpeedAssignment,
    /// false when the class code has no entry in its vocabulary's tables
    pub class_recognized: bool,
    /// a posted speed was expected but was missing or implausible
    pub posted_speed_suspect: bool,
}

impl Classification {
    pub fn speed_mph(&self) -> u32 {
        self.speed.speed_mph
    }

    pub fn travel_time_per_unit_length(&self) -> f64 {
        self.speed.travel_time_per_unit_length()
    }
}
