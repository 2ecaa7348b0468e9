use crate::model::segment::RoadSegment;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// segment attributes usable for ranking overlapping duplicates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    SpeedMph,
    TravelTime,
    /// role priority, highway > ramp > local
    Role,
    Length,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> SortKey {
        SortKey { field, direction }
    }

    fn compare(&self, a: &RoadSegment, b: &RoadSegment) -> Ordering {
        let ord = match self.field {
            SortField::SpeedMph => a.speed_mph.cmp(&b.speed_mph),
            SortField::TravelTime => a
                .travel_time_per_unit_length
                .total_cmp(&b.travel_time_per_unit_length),
            SortField::Role => a.role.priority().cmp(&b.role.priority()),
            SortField::Length => a.length.total_cmp(&b.length),
        };
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// ordered list of sort keys deciding which of a group of overlapping
/// segments survives. the first segment in this order wins; segments that
/// compare equal on every key are ordered by id so reruns are reproducible.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct SortPriority(pub Vec<SortKey>);

impl Default for SortPriority {
    fn default() -> Self {
        SortPriority(vec![SortKey::new(SortField::SpeedMph, SortDirection::Descending)])
    }
}

impl SortPriority {
    pub fn compare(&self, a: &RoadSegment, b: &RoadSegment) -> Ordering {
        self.0
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    }
}
