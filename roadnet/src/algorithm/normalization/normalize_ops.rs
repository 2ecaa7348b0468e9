//! maps raw per-source records into the common [`RoadSegment`] schema. this
//! is the only place where source-specific field names are read.

use super::NormalizeSummary;
use crate::algorithm::classification::{Classification, SourceAttributes};
use crate::model::{
    segment::{geometry_ops, RawSegmentRecord, RoadSegment},
    source::{SourceSchema, SourceVocabulary},
    ProcessingContext,
};
use kdam::tqdm;
use rayon::prelude::*;

/// normalizes every record of one source. exactly one segment is produced
/// per input record, in input order.
pub fn normalize(
    records: &[RawSegmentRecord],
    schema: &SourceSchema,
    source_name: &str,
    context: &ProcessingContext,
) -> (Vec<RoadSegment>, NormalizeSummary) {
    let normalized: Vec<(RoadSegment, Classification, bool)> = if context.parallelize {
        records
            .par_iter()
            .map(|r| normalize_record(r, schema, source_name))
            .collect()
    } else {
        let iter = tqdm!(
            records.iter(),
            total = records.len(),
            desc = format!("normalize {source_name}")
        );
        iter.map(|r| normalize_record(r, schema, source_name))
            .collect()
    };

    let mut summary = NormalizeSummary {
        records_in: records.len(),
        ..Default::default()
    };
    let mut segments = Vec::with_capacity(normalized.len());
    for (segment, classification, keyed) in normalized.into_iter() {
        summary.add(&segment, &classification, keyed);
        segments.push(segment);
    }
    (segments, summary)
}

/// normalizes a single record. also returns the classification and whether
/// the record carried its natural key.
pub fn normalize_record(
    record: &RawSegmentRecord,
    schema: &SourceSchema,
    source_name: &str,
) -> (RoadSegment, Classification, bool) {
    let attributes = read_attributes(record, schema);
    let classification = attributes.classify();

    let natural_key = record.get_text(&schema.fields.id);
    let keyed = natural_key.is_some();
    // row keys are scoped by source name so that sources sharing a tag
    // cannot collide on them during merge
    let key = natural_key.unwrap_or_else(|| format!("{source_name}_ROW{}", record.row));

    let length = geometry_ops::planar_length(&record.geometry);
    let travel_time_per_unit_length = classification.travel_time_per_unit_length();
    let segment = RoadSegment {
        id: schema.segment_id(&key),
        source: String::from(source_name),
        source_class: record.get_text(&schema.fields.class).unwrap_or_default(),
        role: classification.role,
        speed_mph: classification.speed_mph(),
        speed_source: classification.speed.source,
        urban_adjusted: classification.speed.urban_adjusted,
        travel_time_per_unit_length,
        length,
        travel_time_minutes: travel_time_per_unit_length * length,
        in_urban_area: attributes.in_urban_area(),
        geometry: record.geometry.clone(),
    };
    (segment, classification, keyed)
}

/// reads the attributes the rule engine needs from a raw record using the
/// source's field mapping. missing or null cells never fail here; they are
/// resolved by the rule engine's defaults.
pub fn read_attributes(record: &RawSegmentRecord, schema: &SourceSchema) -> SourceAttributes {
    let fields = &schema.fields;
    let in_urban_area = record.get_bool(&fields.urban_area).unwrap_or(false);
    match schema.vocabulary {
        SourceVocabulary::StateCenterline => {
            let segment_exists = fields.segment_exists.as_ref().map(|f| {
                record
                    .get_text(f)
                    .map(|v| v.trim().eq_ignore_ascii_case("Y"))
                    .unwrap_or(false)
            });
            SourceAttributes::StateCenterline {
                mtfcc: record.get_text(&fields.class).unwrap_or_default(),
                posted_speed: fields.posted_speed.as_ref().and_then(|f| record.get_i64(f)),
                segment_exists,
                in_urban_area,
            }
        }
        SourceVocabulary::Census => SourceAttributes::Census {
            mtfcc: record.get_text(&fields.class).unwrap_or_default(),
            route_type: fields.route_type.as_ref().and_then(|f| record.get_text(f)),
            in_urban_area,
        },
        SourceVocabulary::Osm => SourceAttributes::Osm {
            code: record.get_i64(&fields.class),
            maxspeed_kph: fields.posted_speed.as_ref().and_then(|f| record.get_f64(f)),
            in_urban_area,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        feature::{RoadRole, SpeedSource},
        segment::AttributeValue as AV,
    };
    use geo::line_string;
    use std::collections::HashMap;

    fn record(row: usize, attrs: &[(&str, AV)]) -> RawSegmentRecord {
        let attributes = attrs
            .iter()
            .map(|(k, v)| (String::from(*k), v.clone()))
            .collect::<HashMap<_, _>>();
        let geometry = line_string![(x: 0.0, y: 0.0), (x: 100.0, y: 0.0)];
        RawSegmentRecord::new(row, attributes, geometry)
    }

    fn sequential() -> ProcessingContext {
        ProcessingContext {
            parallelize: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_state_centerline_record() {
        let r = record(
            0,
            &[
                ("RCL_ID", AV::Float(1234.0)),
                ("MTFCC", AV::Text(String::from("S1100"))),
                ("SEGMENT_EXISTS", AV::Text(String::from("Y"))),
                ("LOCAL_SPEED_MPH", AV::Integer(55)),
            ],
        );
        let schema = SourceSchema::state_centerline("VA");
        let (segments, summary) = normalize(&[r], &schema, "va_rcl", &sequential());
        assert_eq!(segments.len(), 1);
        let s = &segments[0];
        assert_eq!(s.id, "VA_1234");
        assert_eq!(s.role, RoadRole::Highway);
        assert_eq!(s.speed_mph, 55);
        assert!((s.travel_time_per_unit_length - 0.000673).abs() < 1e-6);
        assert!((s.travel_time_minutes - 100.0 * 0.037 / 55.0).abs() < 1e-9);
        assert_eq!(summary.records_out, 1);
        assert_eq!(summary.classification_gap_count(), 0);
    }

    #[test]
    fn test_not_existing_segment_walks() {
        let r = record(
            0,
            &[
                ("RCL_ID", AV::Integer(7)),
                ("MTFCC", AV::Text(String::from("S1200"))),
                ("SEGMENT_EXISTS", AV::Text(String::from("N"))),
                ("LOCAL_SPEED_MPH", AV::Integer(45)),
            ],
        );
        let schema = SourceSchema::state_centerline("VA");
        let (segments, summary) = normalize(&[r], &schema, "va_rcl", &sequential());
        assert_eq!(segments[0].speed_mph, 3);
        assert_eq!(segments[0].speed_source, SpeedSource::Fallback);
        assert_eq!(summary.fallback_speeds, 1);
    }

    #[test]
    fn test_census_urban_record() {
        let r = record(
            0,
            &[
                ("LINEARID", AV::Text(String::from("1104257"))),
                ("MTFCC", AV::Text(String::from("S1100"))),
                ("RTTYP", AV::Text(String::from("U"))),
                ("UA", AV::Integer(1)),
            ],
        );
        let (segments, summary) = normalize(&[r], &SourceSchema::census(), "tiger", &sequential());
        assert_eq!(segments[0].id, "TL_1104257");
        assert_eq!(segments[0].speed_mph, 45);
        assert!(segments[0].in_urban_area);
        assert_eq!(summary.urban_adjusted, 1);
    }

    #[test]
    fn test_no_record_is_dropped() {
        let records = vec![
            record(0, &[("osm_id", AV::Integer(1)), ("code", AV::Integer(5111))]),
            record(1, &[("osm_id", AV::Integer(2)), ("code", AV::Integer(4242))]),
            record(2, &[("code", AV::Text(String::from("motorway")))]),
            record(3, &[]),
        ];
        let (segments, summary) =
            normalize(&records, &SourceSchema::osm(), "osm", &ProcessingContext::default());
        assert_eq!(segments.len(), records.len());
        assert_eq!(segments[2].id, "OSM_osm_ROW2");
        assert_eq!(segments[3].id, "OSM_osm_ROW3");
        assert!(segments[1..].iter().all(|s| s.role == RoadRole::Local));
        assert!(segments[1..].iter().all(|s| s.speed_mph == 3));
        assert_eq!(summary.classification_gaps.get("4242"), Some(&1));
        assert_eq!(summary.classification_gaps.get("motorway"), Some(&1));
        assert_eq!(summary.classification_gap_count(), 3);
        assert_eq!(summary.missing_keys, 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records = (0..64)
            .map(|i| {
                record(
                    i,
                    &[
                        ("osm_id", AV::Integer(i as i64)),
                        ("code", AV::Integer(5111 + (i as i64 % 5))),
                        ("maxspeed", AV::Integer(if i % 2 == 0 { 0 } else { 90 })),
                        ("UA", AV::Integer(i as i64 % 3)),
                    ],
                )
            })
            .collect::<Vec<_>>();
        let schema = SourceSchema::osm();
        let (par, par_summary) = normalize(&records, &schema, "osm", &ProcessingContext::default());
        let (seq, seq_summary) = normalize(&records, &schema, "osm", &sequential());
        assert_eq!(par, seq);
        assert_eq!(par_summary, seq_summary);
    }
}
