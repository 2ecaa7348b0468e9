mod attribute_value;
pub mod geometry_ops;
mod raw_segment_record;
mod road_segment;
mod road_segment_serializable;

pub use attribute_value::AttributeValue;
pub use raw_segment_record::RawSegmentRecord;
pub use road_segment::RoadSegment;
pub use road_segment_serializable::RoadSegmentSerializable;
