use super::SourceVocabulary;
use serde::{Deserialize, Serialize};

/// names of the source columns that hold each conceptual attribute.
/// optional fields are simply absent from vocabularies that lack them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldMapping {
    /// natural key of the record
    pub id: String,
    /// classification code (MTFCC or numeric road class)
    pub class: String,
    pub posted_speed: Option<String>,
    pub segment_exists: Option<String>,
    pub route_type: Option<String>,
    #[serde(default = "default_urban_area_field")]
    pub urban_area: String,
    #[serde(default = "default_geometry_field")]
    pub geometry: String,
}

fn default_urban_area_field() -> String {
    String::from(FieldMapping::DEFAULT_URBAN_AREA_FIELD)
}

fn default_geometry_field() -> String {
    String::from(FieldMapping::DEFAULT_GEOMETRY_FIELD)
}

impl FieldMapping {
    pub const DEFAULT_URBAN_AREA_FIELD: &'static str = "UA";
    pub const DEFAULT_GEOMETRY_FIELD: &'static str = "geometry";

    /// the conventional field names for a vocabulary
    pub fn for_vocabulary(vocabulary: SourceVocabulary) -> FieldMapping {
        match vocabulary {
            SourceVocabulary::StateCenterline => FieldMapping {
                id: String::from("RCL_ID"),
                class: String::from("MTFCC"),
                posted_speed: Some(String::from("LOCAL_SPEED_MPH")),
                segment_exists: Some(String::from("SEGMENT_EXISTS")),
                route_type: None,
                urban_area: String::from(Self::DEFAULT_URBAN_AREA_FIELD),
                geometry: String::from(Self::DEFAULT_GEOMETRY_FIELD),
            },
            SourceVocabulary::Census => FieldMapping {
                id: String::from("LINEARID"),
                class: String::from("MTFCC"),
                posted_speed: None,
                segment_exists: None,
                route_type: Some(String::from("RTTYP")),
                urban_area: String::from(Self::DEFAULT_URBAN_AREA_FIELD),
                geometry: String::from(Self::DEFAULT_GEOMETRY_FIELD),
            },
            SourceVocabulary::Osm => FieldMapping {
                id: String::from("osm_id"),
                class: String::from("code"),
                posted_speed: Some(String::from("maxspeed")),
                segment_exists: None,
                route_type: None,
                urban_area: String::from(Self::DEFAULT_URBAN_AREA_FIELD),
                geometry: String::from(Self::DEFAULT_GEOMETRY_FIELD),
            },
        }
    }
}
