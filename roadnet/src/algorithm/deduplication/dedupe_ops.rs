use super::{DedupeSummary, OverlapDetector, SortPriority};
use crate::model::segment::RoadSegment;
use itertools::Itertools;

/// keeps one authoritative segment per group of overlapping segments.
///
/// each group reported by the detector is ranked by `priority` (ties broken
/// by id) and only its first member survives. segments the detector failed
/// on, or did not report at all, pass through unchanged: a possible duplicate
/// is preferred over a road missing from the network. survivors keep their
/// input order.
pub fn dedupe(
    segments: Vec<RoadSegment>,
    priority: &SortPriority,
    detector: &dyn OverlapDetector,
) -> (Vec<RoadSegment>, DedupeSummary) {
    let detection = detector.detect(&segments);
    let mut keep = vec![false; segments.len()];
    let mut reported = vec![false; segments.len()];
    let mut summary = DedupeSummary {
        segments_in: segments.len(),
        ..Default::default()
    };

    for group in detection.groups.iter() {
        let members = group
            .iter()
            .filter(|idx| **idx < segments.len() && !reported[**idx])
            .copied()
            .collect_vec();
        for idx in members.iter() {
            reported[*idx] = true;
        }
        let winner = members
            .iter()
            .min_by(|a, b| priority.compare(&segments[**a], &segments[**b]));
        if let Some(winner) = winner {
            keep[*winner] = true;
        }
        if members.len() > 1 {
            summary.overlap_groups += 1;
            summary.duplicates_removed += members.len() - 1;
        }
    }

    for (idx, reason) in detection.failed.iter() {
        if let Some(segment) = segments.get(*idx) {
            log::warn!(
                "overlap detection failed for segment {}, keeping it: {reason}",
                segment.id
            );
            keep[*idx] = true;
            reported[*idx] = true;
            summary.detection_failures.push(segment.id.clone());
        }
    }

    let unreported = reported.iter().filter(|r| !**r).count();
    if unreported > 0 {
        log::warn!("{unreported} segments were not assigned an overlap group, keeping them");
    }

    let out = segments
        .into_iter()
        .zip(keep.iter().zip(reported.iter()))
        .filter(|(_, (keep, reported))| **keep || !**reported)
        .map(|(segment, _)| segment)
        .collect_vec();
    summary.segments_out = out.len();
    (out, summary)
}
