//! the speed and classification rule engine. every function in this module
//! is pure: no I/O, no logging, deterministic for the same inputs.

mod classification_result;
pub mod mtfcc_rules;
pub mod osm_rules;
mod source_attributes;
mod speed_assignment;

pub use classification_result::Classification;
pub use source_attributes::SourceAttributes;
pub use speed_assignment::{
    travel_time_per_unit_length, SpeedAssignment, TRAVEL_TIME_CONSTANT,
    URBAN_SPEED_PENALTY_MPH, URBAN_SPEED_THRESHOLD_MPH, WALKING_SPEED_MPH,
};
