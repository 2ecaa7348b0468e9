//! rules for the numeric road class codes of Geofabrik OpenStreetMap
//! shapefile extracts, where `maxspeed` is given in km/h.
//!
//! see https://download.geofabrik.de/osm-data-in-gis-formats-free.pdf

use super::{Classification, SpeedAssignment};
use crate::model::feature::RoadRole;
use uom::si::f64::Velocity;
use uom::si::velocity;

pub const MOTORWAY: i64 = 5111;
pub const MOTORWAY_LINK: i64 = 5131;

/// maxspeed values below this (about 25 mph) are not trusted
pub const MIN_TRUSTED_MAXSPEED_KPH: f64 = 40.0;

pub fn osm_role(code: i64) -> RoadRole {
    match code {
        MOTORWAY => RoadRole::Highway,
        MOTORWAY_LINK => RoadRole::Ramp,
        _ => RoadRole::Local,
    }
}

/// roads intended for motor vehicles: major roads, minor roads, links,
/// service roads and tracks.
pub fn is_driving_road(code: i64) -> bool {
    matches!(code, 5111..=5115 | 5121..=5123 | 5131..=5135 | 5141..=5147)
}

/// default speed for a road class, `None` when the code is not mapped.
pub fn osm_default_speed(code: i64) -> Option<u32> {
    match code {
        // motorway
        5111 => Some(70),
        // trunk, typically divided
        5112 => Some(65),
        5113 => Some(55),
        5114 => Some(45),
        5115 => Some(35),
        // unclassified and residential
        5121 | 5122 => Some(25),
        // living street
        5123 => Some(15),
        // pedestrian ways, footways, steps, paths and unknown roads
        5124 | 5153 | 5154 | 5155 | 5199 => Some(3),
        // links
        5131..=5135 => Some(30),
        // service roads
        5141 | 5142 => Some(15),
        // tracks by grade
        5143 => Some(25),
        5144 => Some(20),
        5145 => Some(15),
        5146 => Some(10),
        5147 => Some(5),
        // bridleways and cycleways
        5151 | 5152 => Some(10),
        _ => None,
    }
}

/// converts a km/h maxspeed to whole mph, rounding half up
pub fn maxspeed_to_mph(maxspeed_kph: f64) -> u32 {
    let mph = Velocity::new::<velocity::kilometer_per_hour>(maxspeed_kph)
        .get::<velocity::mile_per_hour>();
    (mph + 0.5).floor() as u32
}

/// classifies an OSM record. maxspeed is only used on driving roads where
/// it is at least 40 km/h. the urban penalty applies to class defaults only.
pub fn classify_osm(
    code: Option<i64>,
    maxspeed_kph: Option<f64>,
    in_urban_area: bool,
) -> Classification {
    let Some(code) = code else {
        return Classification {
            role: RoadRole::Local,
            speed: SpeedAssignment::fallback(),
            class_recognized: false,
            posted_speed_suspect: false,
        };
    };
    let default_speed = osm_default_speed(code);
    let trusted_maxspeed = maxspeed_kph
        .filter(|kph| kph.is_finite() && *kph >= MIN_TRUSTED_MAXSPEED_KPH)
        .filter(|_| is_driving_road(code));
    let speed = match trusted_maxspeed {
        Some(kph) => SpeedAssignment::posted(maxspeed_to_mph(kph)),
        None => SpeedAssignment::class_default_or_fallback(default_speed)
            .with_urban_adjustment(in_urban_area),
    };
    Classification {
        role: osm_role(code),
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
    fn test_motorway_maxspeed_converted() {
        let c = classify_osm(Some(5111), Some(100.0), false);
        assert_eq!(c.role, RoadRole::Highway);
        assert_eq!(c.speed_mph(), 62);
        assert_eq!(c.speed.source, SpeedSource::Posted);
    }

    #[test]
    fn test_low_maxspeed_ignored() {
        let c = classify_osm(Some(5122), Some(30.0), false);
        assert_eq!(c.speed_mph(), 25);
        assert_eq!(c.speed.source, SpeedSource::ClassDefault);
    }

    #[test]
    fn test_maxspeed_on_cycleway_ignored() {
        let c = classify_osm(Some(5152), Some(50.0), false);
        assert_eq!(c.speed_mph(), 10);
    }

    #[test]
    fn test_urban_penalty_only_on_class_defaults() {
        let default_speed = classify_osm(Some(5113), None, true);
        assert_eq!(default_speed.speed_mph(), 45);
        let posted = classify_osm(Some(5113), Some(88.0), true);
        assert_eq!(posted.speed_mph(), 55);
        assert!(!posted.speed.urban_adjusted);
    }

    #[test]
    fn test_motorway_link_is_ramp() {
        let c = classify_osm(Some(MOTORWAY_LINK), None, false);
        assert_eq!(c.role, RoadRole::Ramp);
        assert_eq!(c.speed_mph(), 30);
    }

    #[test]
    fn test_unknown_codes_walk() {
        for code in [Some(5199), Some(9999), None] {
            let c = classify_osm(code, Some(80.0), true);
            assert_eq!(c.role, RoadRole::Local);
            assert_eq!(c.speed_mph(), 3);
        }
        assert!(classify_osm(Some(5199), None, false).class_recognized);
        assert!(!classify_osm(Some(9999), None, false).class_recognized);
    }
}
