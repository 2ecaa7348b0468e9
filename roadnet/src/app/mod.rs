mod network_writer;
mod pipeline_ops;
mod run_summary;
mod segment_source;

pub use network_writer::{filenames, NetworkWriter};
pub use pipeline_ops::{merge_by_id, run_from_config, run_pipeline, PipelineOutput};
pub use run_summary::{RunSummary, SourceSummary};
pub use segment_source::{CsvSegmentSource, SegmentSource};
