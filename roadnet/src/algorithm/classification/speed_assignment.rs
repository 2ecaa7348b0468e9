use crate::model::feature::SpeedSource;
use serde::{Deserialize, Serialize};

/// minutes needed to travel one meter at one mile per hour, so that
/// `TRAVEL_TIME_CONSTANT / mph` is minutes per meter.
pub const TRAVEL_TIME_CONSTANT: f64 = 0.037;

/// walking pace for segments not on the ground or with no class mapping
pub const WALKING_SPEED_MPH: u32 = 3;

/// urban segments faster than this are penalized for congestion
pub const URBAN_SPEED_THRESHOLD_MPH: u32 = 30;
pub const URBAN_SPEED_PENALTY_MPH: u32 = 10;

/// minutes per meter at the given speed. speeds are never zero after
/// classification; a zero speed here is clamped to walking pace.
pub fn travel_time_per_unit_length(speed_mph: u32) -> f64 {
    let speed = if speed_mph == 0 {
        WALKING_SPEED_MPH
    } else {
        speed_mph
    };
    TRAVEL_TIME_CONSTANT / speed as f64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedAssignment {
    pub speed_mph: u32,
    pub source: SpeedSource,
    pub urban_adjusted: bool,
}

impl SpeedAssignment {
    pub fn posted(speed_mph: u32) -> SpeedAssignment {
        SpeedAssignment {
            speed_mph,
            source: SpeedSource::Posted,
            urban_adjusted: false,
        }
    }

    pub fn class_default(speed_mph: u32) -> SpeedAssignment {
        SpeedAssignment {
            speed_mph,
            source: SpeedSource::ClassDefault,
            urban_adjusted: false,
        }
    }

    pub fn fallback() -> SpeedAssignment {
        SpeedAssignment {
            speed_mph: WALKING_SPEED_MPH,
            source: SpeedSource::Fallback,
            urban_adjusted: false,
        }
    }

    /// class default when the class is mapped, walking pace otherwise
    pub fn class_default_or_fallback(speed_mph: Option<u32>) -> SpeedAssignment {
        match speed_mph {
            Some(s) => SpeedAssignment::class_default(s),
            None => SpeedAssignment::fallback(),
        }
    }

    /// congestion penalty for urban segments. only class-default speeds above
    /// the threshold are reduced, regardless of road class, and a speed that
    /// was already reduced is returned unchanged.
    pub fn with_urban_adjustment(&self, in_urban_area: bool) -> SpeedAssignment {
        let applies = in_urban_area
            && !self.urban_adjusted
            && self.source == SpeedSource::ClassDefault
            && self.speed_mph > URBAN_SPEED_THRESHOLD_MPH;
        if !applies {
            return *self;
        }
        SpeedAssignment {
            speed_mph: self.speed_mph - URBAN_SPEED_PENALTY_MPH,
            urban_adjusted: true,
            ..*self
        }
    }

    pub fn travel_time_per_unit_length(&self) -> f64 {
        travel_time_per_unit_length(self.speed_mph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_time_at_55() {
        let tt = SpeedAssignment::posted(55).travel_time_per_unit_length();
        assert!((tt - 0.037 / 55.0).abs() < 1e-9);
        assert!((tt - 0.000673).abs() < 1e-6);
    }

    #[test]
    fn test_urban_adjustment_reduces_fast_defaults() {
        let adjusted = SpeedAssignment::class_default(55).with_urban_adjustment(true);
        assert_eq!(adjusted.speed_mph, 45);
        assert!(adjusted.urban_adjusted);
    }

    #[test]
    fn test_urban_adjustment_is_idempotent() {
        for speed in [3, 25, 30, 35, 45, 55, 65, 70] {
            let once = SpeedAssignment::class_default(speed).with_urban_adjustment(true);
            let twice = once.with_urban_adjustment(true);
            assert_eq!(once, twice, "double penalty applied at {speed} mph");
        }
    }

    #[test]
    fn test_urban_adjustment_threshold() {
        let at_threshold = SpeedAssignment::class_default(30).with_urban_adjustment(true);
        assert_eq!(at_threshold.speed_mph, 30);
        let rural = SpeedAssignment::class_default(55).with_urban_adjustment(false);
        assert_eq!(rural.speed_mph, 55);
        let posted = SpeedAssignment::posted(55).with_urban_adjustment(true);
        assert_eq!(posted.speed_mph, 55);
    }
}
