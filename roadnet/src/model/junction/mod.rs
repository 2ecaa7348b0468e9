mod junction_point;

pub use junction_point::{JunctionPoint, JunctionPointSerializable};
