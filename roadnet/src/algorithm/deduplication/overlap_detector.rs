use crate::model::segment::RoadSegment;

/// result of overlap detection over a collection of segments. indices refer
/// to positions in the collection that was passed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlapDetection {
    /// every segment at the same physical location, singletons included
    pub groups: Vec<Vec<usize>>,
    /// segments that could not be tested, with the reason
    pub failed: Vec<(usize, String)>,
}

/// supplies groups of spatially coincident segments to the deduplicator,
/// which does not test geometry itself.
pub trait OverlapDetector {
    fn detect(&self, segments: &[RoadSegment]) -> OverlapDetection;
}
