mod normalize_ops;
mod normalize_summary;

pub use normalize_ops::{normalize, normalize_record, read_attributes};
pub use normalize_summary::NormalizeSummary;
