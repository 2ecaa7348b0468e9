use crate::model::{feature::SpeedSource, segment::RoadSegment};
use crate::algorithm::classification::Classification;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// aggregate counts collected while normalizing one source
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NormalizeSummary {
    pub records_in: usize,
    pub records_out: usize,
    /// unmapped class codes and how many records carried each
    pub classification_gaps: BTreeMap<String, usize>,
    /// posted speeds that were missing or implausible and were replaced
    pub suspect_speeds: usize,
    /// segments assigned walking pace
    pub fallback_speeds: usize,
    pub urban_adjusted: usize,
    /// records without a natural key, keyed by row index instead
    pub missing_keys: usize,
}

impl NormalizeSummary {
    pub fn add(&mut self, segment: &RoadSegment, classification: &Classification, keyed: bool) {
        self.records_out += 1;
        if !classification.class_recognized {
            *self
                .classification_gaps
                .entry(segment.source_class.clone())
                .or_default() += 1;
        }
        if classification.posted_speed_suspect {
            self.suspect_speeds += 1;
        }
        if segment.speed_source == SpeedSource::Fallback {
            self.fallback_speeds += 1;
        }
        if segment.urban_adjusted {
            self.urban_adjusted += 1;
        }
        if !keyed {
            self.missing_keys += 1;
        }
    }

    pub fn classification_gap_count(&self) -> usize {
        self.classification_gaps.values().sum()
    }

    /// reports gaps individually and everything else as aggregates
    pub fn log(&self, source_name: &str) {
        for (source_class, count) in self.classification_gaps.iter() {
            log::warn!(
                "source '{source_name}': {count} segments with unmapped class '{source_class}' classified as local at walking pace"
            );
        }
        if self.missing_keys > 0 {
            log::warn!(
                "source '{source_name}': {} segments missing a natural key were keyed by row",
                self.missing_keys
            );
        }
        log::info!(
            "source '{source_name}': normalized {} of {} records ({} suspect speeds replaced, {} at walking pace, {} urban adjusted)",
            self.records_out,
            self.records_in,
            self.suspect_speeds,
            self.fallback_speeds,
            self.urban_adjusted
        );
    }
}
