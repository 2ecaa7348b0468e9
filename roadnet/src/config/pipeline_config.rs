use super::SourceConfig;
use crate::{
    algorithm::deduplication::SortPriority,
    model::{ProcessingContext, RoadNetCliError, RoadNetError},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// defines the sources and behaviors of a road network run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PipelineConfig {
    /// sources in merge order. when two sources share a segment id, the
    /// segment of the earlier source is kept.
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub context: ProcessingContext,
    /// ranking used to pick the surviving segment among overlapping duplicates
    #[serde(default)]
    pub sort_priority: SortPriority,
    /// skip rows with unreadable geometry instead of failing the source
    #[serde(default)]
    pub ignore_row_errors: bool,
    /// also write the highway+ramp and local layers as separate files
    #[serde(default = "default_split_network")]
    pub split_network: bool,
    #[serde(default)]
    pub overwrite: bool,
}

fn default_split_network() -> bool {
    true
}

impl PipelineConfig {
    /// checks settings that would otherwise fail silently deep in a run
    pub fn validate(&self) -> Result<(), RoadNetError> {
        if self.sources.is_empty() {
            return Err(RoadNetError::ConfigurationError(String::from(
                "no sources configured",
            )));
        }
        let duplicates = self
            .sources
            .iter()
            .map(|s| s.name.as_str())
            .duplicates()
            .collect_vec();
        if !duplicates.is_empty() {
            return Err(RoadNetError::ConfigurationError(format!(
                "source names must be unique, found repeated: {}",
                duplicates.join(", ")
            )));
        }
        let ctx = &self.context;
        if !(ctx.touch_tolerance.is_finite() && ctx.touch_tolerance > 0.0) {
            return Err(RoadNetError::ConfigurationError(format!(
                "touch_tolerance must be a positive number, found {}",
                ctx.touch_tolerance
            )));
        }
        if !(ctx.coincidence_tolerance.is_finite() && ctx.coincidence_tolerance >= 0.0) {
            return Err(RoadNetError::ConfigurationError(format!(
                "coincidence_tolerance must be a non-negative number, found {}",
                ctx.coincidence_tolerance
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for PipelineConfig {
    type Error = RoadNetCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RoadNetCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                RoadNetCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RoadNetCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                RoadNetCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(RoadNetCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::deduplication::{SortDirection, SortField, SortKey};
    use crate::model::source::{SourceSchema, SourceVocabulary};

    const TOML_CONFIG: &str = r#"
ignore_row_errors = true

[context]
coincidence_tolerance = 2.5
recovery_excluded_prefixes = ["VA_"]

[[sort_priority]]
field = "role"
direction = "descending"

[[sort_priority]]
field = "speed_mph"
direction = "descending"

[[sources]]
name = "virginia"
path = "data/va_rcl.csv.gz"
schema = { tag = "VA", vocabulary = "state_centerline" }

[[sources]]
name = "tiger"
path = "data/tl_roads.csv"

[sources.schema]
tag = "TL"
vocabulary = "census"

[sources.schema.fields]
id = "LINEARID"
class = "MTFCC"
route_type = "RTTYP"
urban_area = "IN_UA"
"#;

    #[test]
    fn test_decode_toml() {
        let conf: PipelineConfig = match toml::from_str(TOML_CONFIG) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(conf.sources.len(), 2);
        assert_eq!(conf.sources[0].schema, SourceSchema::state_centerline("VA"));
        assert_eq!(conf.sources[1].schema.vocabulary, SourceVocabulary::Census);
        assert_eq!(conf.sources[1].schema.fields.urban_area, "IN_UA");
        assert_eq!(conf.sources[1].schema.fields.geometry, "geometry");
        assert_eq!(conf.context.coincidence_tolerance, 2.5);
        assert_eq!(
            conf.context.touch_tolerance,
            ProcessingContext::DEFAULT_TOUCH_TOLERANCE
        );
        assert_eq!(
            conf.sort_priority,
            SortPriority(vec![
                SortKey::new(SortField::Role, SortDirection::Descending),
                SortKey::new(SortField::SpeedMph, SortDirection::Descending),
            ])
        );
        assert!(conf.ignore_row_errors);
        assert!(conf.split_network);
        assert!(!conf.overwrite);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut conf: PipelineConfig = match toml::from_str(TOML_CONFIG) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        conf.context.touch_tolerance = 0.0;
        assert!(conf.validate().is_err());

        conf.context.touch_tolerance = 0.01;
        conf.sources[1].name = String::from("virginia");
        assert!(conf.validate().is_err());

        conf.sources.clear();
        assert!(conf.validate().is_err());
    }

    #[test]
    fn test_read_from_json_file() {
        let dir = std::env::temp_dir().join("roadnet_pipeline_config_test");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            panic!("{e}");
        }
        let path = dir.join("config.json");
        let json = r#"{
            "sources": [
                { "name": "osm", "path": "osm.csv", "schema": { "tag": "OSM", "vocabulary": "osm" } }
            ],
            "split_network": false
        }"#;
        if let Err(e) = std::fs::write(&path, json) {
            panic!("{e}");
        }
        let filename = path.to_string_lossy().to_string();
        let conf = match PipelineConfig::try_from(&filename) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(conf.sources[0].schema, SourceSchema::osm());
        assert!(!conf.split_network);
        assert_eq!(conf.context, ProcessingContext::default());

        let unsupported = String::from("config.yaml");
        assert!(PipelineConfig::try_from(&unsupported).is_err());
    }
}
