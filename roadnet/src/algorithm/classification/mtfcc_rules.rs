//! rules for the MAF/TIGER feature class code (MTFCC) vocabulary shared by
//! state road centerlines and census TIGER/Line roads.
//!
//! see https://www2.census.gov/geo/pdfs/reference/mtfccs2022.pdf

use super::{Classification, SpeedAssignment};
use crate::model::feature::RoadRole;

/// census route type marking an interstate
pub const INTERSTATE_ROUTE_TYPE: &str = "I";

/// limited-access highways and their HOV lanes are highways, ramps are
/// ramps, everything else is a local road.
pub fn mtfcc_role(mtfcc: &str) -> RoadRole {
    match mtfcc.trim() {
        "S1100" | "S1100HOV" => RoadRole::Highway,
        "S1630" => RoadRole::Ramp,
        _ => RoadRole::Local,
    }
}

/// default speed for a road class, `None` when the code is not mapped.
/// interstates are assigned a higher limited-access speed when the source
/// carries the route type.
pub fn mtfcc_default_speed(mtfcc: &str, interstate: bool) -> Option<u32> {
    match mtfcc.trim() {
        // primary road, limited access. HOV lanes take the highway speed
        // rather than the walking pace older flagged extracts gave them
        "S1100" | "S1100HOV" if interstate => Some(65),
        "S1100" | "S1100HOV" => Some(55),
        // primary/secondary roads and special roads for service drives
        "S1200" | "S1300" | "S1640" => Some(45),
        // ramps
        "S1630" => Some(30),
        // local neighborhood roads, private roads, and alleys
        "C3061" | "C3062" | "S1400" | "S1740" => Some(25),
        // vehicular trails, walkways, and stairways
        "S1500" | "S1730" | "S1780" => Some(15),
        // bike paths
        "S1820" => Some(10),
        _ => None,
    }
}

/// a posted speed is plausible when it is positive and, for records carrying
/// a segment-exists flag, a multiple of 5.
fn plausible_posted_speed(posted_speed: Option<i64>, flagged: bool) -> Option<u32> {
    let speed = posted_speed.filter(|s| *s > 0)?;
    if flagged && speed % 5 != 0 {
        return None;
    }
    u32::try_from(speed).ok()
}

/// classifies a state centerline record.
///
/// `segment_exists` is `None` when the source carries no such flag,
/// otherwise whether the flag reads "Y". segments that are not on the
/// ground travel at walking pace regardless of any posted speed.
pub fn classify_state_centerline(
    mtfcc: &str,
    posted_speed: Option<i64>,
    segment_exists: Option<bool>,
) -> Classification {
    let role = mtfcc_role(mtfcc);
    let default_speed = mtfcc_default_speed(mtfcc, false);
    let class_recognized = default_speed.is_some();

    let (speed, posted_speed_suspect) = match segment_exists {
        Some(false) => (SpeedAssignment::fallback(), false),
        Some(true) | None => {
            let flagged = segment_exists.is_some();
            match plausible_posted_speed(posted_speed, flagged) {
                Some(s) => (SpeedAssignment::posted(s), false),
                None => (
                    SpeedAssignment::class_default_or_fallback(default_speed),
                    flagged,
                ),
            }
        }
    };

    Classification {
        role,
        speed,
        class_recognized,
        posted_speed_suspect,
    }
}

/// classifies a census TIGER/Line record. census roads have no posted
/// speeds, so speeds come from the class table with the urban penalty.
pub fn classify_census(
    mtfcc: &str,
    route_type: Option<&str>,
    in_urban_area: bool,
) -> Classification {
    let interstate = route_type
        .map(|r| r.trim() == INTERSTATE_ROUTE_TYPE)
        .unwrap_or(false);
    let default_speed = mtfcc_default_speed(mtfcc, interstate);
    let speed = SpeedAssignment::class_default_or_fallback(default_speed)
        .with_urban_adjustment(in_urban_area);
    Classification {
        role: mtfcc_role(mtfcc),
        speed,
        class_recognized: default_speed.is_some(),
        posted_speed_suspect: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feature::SpeedSource;

    #[test]
    fn test_interstate_with_posted_speed() {
        let c = classify_state_centerline("S1100", Some(55), Some(true));
        assert_eq!(c.role, RoadRole::Highway);
        assert_eq!(c.speed_mph(), 55);
        assert_eq!(c.speed.source, SpeedSource::Posted);
        assert!((c.travel_time_per_unit_length() - 0.000673).abs() < 1e-6);
    }

    #[test]
    fn test_ramp_without_posted_speed_uses_class_default() {
        let c = classify_state_centerline("S1630", None, Some(true));
        assert_eq!(c.role, RoadRole::Ramp);
        assert_eq!(c.speed_mph(), 30);
        assert_eq!(c.speed.source, SpeedSource::ClassDefault);
        assert!(c.posted_speed_suspect);
    }

    #[test]
    fn test_hov_lane_takes_highway_default() {
        let c = classify_state_centerline("S1100HOV", Some(37), Some(true));
        assert_eq!(c.role, RoadRole::Highway);
        assert_eq!(c.speed_mph(), 55);
        assert_eq!(c.speed.source, SpeedSource::ClassDefault);
        assert_eq!(mtfcc_default_speed("S1100HOV", true), Some(65));
    }

    #[test]
    fn test_segment_not_on_the_ground_walks() {
        for posted in [None, Some(0), Some(55), Some(37)] {
            let c = classify_state_centerline("S1200", posted, Some(false));
            assert_eq!(c.speed_mph(), 3);
            assert_eq!(c.speed.source, SpeedSource::Fallback);
        }
    }

    #[test]
    fn test_suspect_posted_speeds_replaced() {
        let zero = classify_state_centerline("S1400", Some(0), Some(true));
        assert_eq!(zero.speed_mph(), 25);
        assert!(zero.posted_speed_suspect);
        let odd = classify_state_centerline("S1200", Some(37), Some(true));
        assert_eq!(odd.speed_mph(), 45);
        let negative = classify_state_centerline("S1820", Some(-5), Some(true));
        assert_eq!(negative.speed_mph(), 10);
    }

    #[test]
    fn test_unflagged_source_accepts_any_positive_speed() {
        let c = classify_state_centerline("S1400", Some(37), None);
        assert_eq!(c.speed_mph(), 37);
        assert!(!c.posted_speed_suspect);
    }

    #[test]
    fn test_unknown_class_is_local_at_walking_pace() {
        let c = classify_state_centerline("S9999", None, Some(true));
        assert_eq!(c.role, RoadRole::Local);
        assert_eq!(c.speed_mph(), 3);
        assert!(!c.class_recognized);
    }

    #[test]
    fn test_census_interstate_route_type() {
        let interstate = classify_census("S1100", Some("I"), false);
        assert_eq!(interstate.speed_mph(), 65);
        let us_route = classify_census("S1100", Some("U"), false);
        assert_eq!(us_route.speed_mph(), 55);
        assert_eq!(us_route.role, RoadRole::Highway);
    }

    #[test]
    fn test_census_urban_penalty() {
        let urban = classify_census("S1100", Some("U"), true);
        assert_eq!(urban.speed_mph(), 45);
        assert!(urban.speed.urban_adjusted);
        let urban_ramp = classify_census("S1630", None, true);
        assert_eq!(urban_ramp.speed_mph(), 30);
    }

    #[test]
    fn test_relative_speed_ordering() {
        let speed = |c: &str| mtfcc_default_speed(c, false).unwrap_or(0);
        // highway > arterial > ramp > residential > trail > path
        assert!(speed("S1100") > speed("S1200"));
        assert!(speed("S1200") > speed("S1630"));
        assert!(speed("S1630") > speed("S1400"));
        assert!(speed("S1400") > speed("S1500"));
        assert!(speed("S1500") > speed("S1820"));
    }
}
