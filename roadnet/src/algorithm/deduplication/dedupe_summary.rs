use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DedupeSummary {
    pub segments_in: usize,
    pub segments_out: usize,
    /// groups with more than one member
    pub overlap_groups: usize,
    pub duplicates_removed: usize,
    /// ids of segments passed through because overlap detection failed
    pub detection_failures: Vec<String>,
}
