//! derives the junction points that connect the limited-access network to
//! local roads, from segment roles and endpoint adjacency alone.

mod highway_dissolve;
mod junction_ops;
mod segment_line_index;

pub use highway_dissolve::{highway_terminals, HighwayTerminal};
pub use junction_ops::{synthesize_junctions, RECOVERY_ID_PREFIX};
pub use segment_line_index::SegmentLineIndex;
