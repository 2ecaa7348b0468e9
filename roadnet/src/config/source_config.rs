use crate::model::source::SourceSchema;
use serde::{Deserialize, Serialize};

/// one input dataset of a run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SourceConfig {
    /// name used in logs and the run summary
    pub name: String,
    /// path to a .csv or .csv.gz file with a WKT geometry column
    pub path: String,
    pub schema: SourceSchema,
}
