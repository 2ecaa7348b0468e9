mod coincident_geometry_detector;
mod dedupe_ops;
mod dedupe_summary;
mod overlap_detector;
mod sort_priority;

pub use coincident_geometry_detector::CoincidentGeometryDetector;
pub use dedupe_ops::dedupe;
pub use dedupe_summary::DedupeSummary;
pub use overlap_detector::{OverlapDetection, OverlapDetector};
pub use sort_priority::{SortDirection, SortField, SortKey, SortPriority};
