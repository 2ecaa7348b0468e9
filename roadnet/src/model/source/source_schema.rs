use super::{FieldMapping, SourceVocabulary};
use serde::{Deserialize, Serialize};

/// adapter description for one source dataset: the vocabulary used to
/// classify its records, the tag prefixed onto its natural keys, and where
/// each attribute lives in its rows.
///
/// when `fields` is omitted from a configuration file, the conventional
/// field names of the vocabulary are used.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SourceSchema {
    pub tag: String,
    pub vocabulary: SourceVocabulary,
    pub fields: FieldMapping,
}

impl SourceSchema {
    pub fn new(tag: &str, vocabulary: SourceVocabulary) -> SourceSchema {
        SourceSchema {
            tag: String::from(tag),
            vocabulary,
            fields: FieldMapping::for_vocabulary(vocabulary),
        }
    }

    /// state centerlines, tagged with the state abbreviation, e.g. `VA`
    pub fn state_centerline(state: &str) -> SourceSchema {
        SourceSchema::new(state, SourceVocabulary::StateCenterline)
    }

    pub fn census() -> SourceSchema {
        SourceSchema::new("TL", SourceVocabulary::Census)
    }

    pub fn osm() -> SourceSchema {
        SourceSchema::new("OSM", SourceVocabulary::Osm)
    }

    /// globally unique id from a natural key
    pub fn segment_id(&self, natural_key: &str) -> String {
        format!("{}_{}", self.tag, natural_key)
    }
}

#[derive(Deserialize)]
struct SourceSchemaConfig {
    tag: String,
    vocabulary: SourceVocabulary,
    fields: Option<FieldMapping>,
}

impl<'de> Deserialize<'de> for SourceSchema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let conf = SourceSchemaConfig::deserialize(deserializer)?;
        let fields = conf
            .fields
            .unwrap_or_else(|| FieldMapping::for_vocabulary(conf.vocabulary));
        Ok(SourceSchema {
            tag: conf.tag,
            vocabulary: conf.vocabulary,
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_id_prefix() {
        assert_eq!(SourceSchema::state_centerline("VA").segment_id("1234"), "VA_1234");
        assert_eq!(SourceSchema::census().segment_id("110456"), "TL_110456");
    }

    #[test]
    fn test_deserialize_default_fields() {
        let json = r#"{ "tag": "OSM", "vocabulary": "osm" }"#;
        let schema: SourceSchema = match serde_json::from_str(json) {
            Ok(s) => s,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(schema, SourceSchema::osm());
    }
}
