mod pipeline_config;
mod source_config;

pub use pipeline_config::PipelineConfig;
pub use source_config::SourceConfig;
