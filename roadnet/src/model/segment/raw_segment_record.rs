use super::AttributeValue;
use geo::LineString;
use std::collections::HashMap;

/// one row of a source extract before normalization: named scalar
/// attributes plus the line geometry.
#[derive(Clone, Debug)]
pub struct RawSegmentRecord {
    /// 0-based position of the row in its source
    pub row: usize,
    pub attributes: HashMap<String, AttributeValue>,
    pub geometry: LineString<f64>,
}

impl RawSegmentRecord {
    pub fn new(
        row: usize,
        attributes: HashMap<String, AttributeValue>,
        geometry: LineString<f64>,
    ) -> RawSegmentRecord {
        RawSegmentRecord {
            row,
            attributes,
            geometry,
        }
    }

    /// the value at a field. missing fields and null cells both yield `None`.
    pub fn get(&self, field: &str) -> Option<&AttributeValue> {
        self.attributes.get(field).filter(|v| !v.is_null())
    }

    pub fn get_text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(AttributeValue::as_text)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(AttributeValue::as_i64)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(AttributeValue::as_f64)
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(AttributeValue::as_bool)
    }
}
