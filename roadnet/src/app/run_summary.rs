use crate::algorithm::{deduplication::DedupeSummary, normalization::NormalizeSummary};
use crate::model::{feature::JunctionType, junction::JunctionPoint};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// outcome of one source within a run
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceSummary {
    pub name: String,
    pub normalize: NormalizeSummary,
    pub dedupe: DedupeSummary,
}

/// everything a run did, logged at the end and written next to the outputs
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub sources: Vec<SourceSummary>,
    /// source name and error message for every source that could not be read
    pub failed_sources: Vec<(String, String)>,
    pub merged_segments: usize,
    /// segments dropped during merge because their id was already present
    pub duplicate_ids_removed: usize,
    pub junctions: BTreeMap<JunctionType, usize>,
    pub junctions_needing_review: usize,
}

impl RunSummary {
    pub fn add_junctions(&mut self, junctions: &[JunctionPoint]) {
        for (junction_type, count) in junctions.iter().counts_by(|j| j.junction_type) {
            *self.junctions.entry(junction_type).or_default() += count;
        }
        self.junctions_needing_review += junctions.iter().filter(|j| j.needs_review).count();
    }

    pub fn junction_count(&self) -> usize {
        self.junctions.values().sum()
    }

    pub fn log(&self) {
        for s in self.sources.iter() {
            log::info!(
                "source '{}': {} records, {} classification gaps, {} suspect speeds, {} segments after removing {} overlapping duplicates",
                s.name,
                s.normalize.records_in,
                s.normalize.classification_gap_count(),
                s.normalize.suspect_speeds,
                s.dedupe.segments_out,
                s.dedupe.duplicates_removed
            );
            if !s.dedupe.detection_failures.is_empty() {
                log::warn!(
                    "source '{}': overlap detection failed for {} segments",
                    s.name,
                    s.dedupe.detection_failures.len()
                );
            }
        }
        for (name, error) in self.failed_sources.iter() {
            log::error!("source '{name}' failed: {error}");
        }
        log::info!(
            "merged network has {} segments ({} repeated ids removed) and {} junctions, {} needing review",
            self.merged_segments,
            self.duplicate_ids_removed,
            self.junction_count(),
            self.junctions_needing_review
        );
    }
}
