pub mod feature;
pub mod junction;
mod processing_context;
mod roadnet_cli_error;
mod roadnet_error;
pub mod segment;
pub mod source;

pub use processing_context::ProcessingContext;
pub use roadnet_cli_error::RoadNetCliError;
pub use roadnet_error::RoadNetError;
