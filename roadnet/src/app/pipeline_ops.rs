use super::{
    CsvSegmentSource, NetworkWriter, RunSummary, SegmentSource, SourceSummary,
};
use crate::{
    algorithm::{
        deduplication::{dedupe, CoincidentGeometryDetector, SortPriority},
        junction::synthesize_junctions,
        normalization::normalize,
    },
    config::PipelineConfig,
    model::{junction::JunctionPoint, segment::RoadSegment, ProcessingContext, RoadNetError},
};
use std::{collections::HashSet, path::Path};

/// the attributed network and its junctions
pub struct PipelineOutput {
    pub segments: Vec<RoadSegment>,
    pub junctions: Vec<JunctionPoint>,
    pub summary: RunSummary,
}

/// reads, normalizes and dedupes each source, merges the results and
/// synthesizes junctions over the merged network. a source that cannot be
/// read is recorded in the summary and the run continues without it.
pub fn run_pipeline(
    sources: &[Box<dyn SegmentSource>],
    context: &ProcessingContext,
    sort_priority: &SortPriority,
) -> PipelineOutput {
    let detector = CoincidentGeometryDetector::new(context.touch_tolerance);
    let mut summary = RunSummary::default();
    let mut per_source = vec![];

    for source in sources.iter() {
        let name = source.name();
        log::info!("processing source '{name}'");
        let records = match source.read() {
            Ok(r) => r,
            Err(e) => {
                log::error!("source '{name}' failed and is left out of the network: {e}");
                summary
                    .failed_sources
                    .push((String::from(name), e.to_string()));
                continue;
            }
        };
        let (normalized, normalize_summary) = normalize(&records, source.schema(), name, context);
        normalize_summary.log(name);
        let (deduped, dedupe_summary) = dedupe(normalized, sort_priority, &detector);
        log::info!(
            "source '{name}': removed {} overlapping duplicates in {} groups",
            dedupe_summary.duplicates_removed,
            dedupe_summary.overlap_groups
        );
        summary.sources.push(SourceSummary {
            name: String::from(name),
            normalize: normalize_summary,
            dedupe: dedupe_summary,
        });
        per_source.push(deduped);
    }

    let (segments, removed) = merge_by_id(per_source);
    summary.merged_segments = segments.len();
    summary.duplicate_ids_removed = removed;

    let junctions = synthesize_junctions(&segments, context);
    summary.add_junctions(&junctions);
    summary.log();

    PipelineOutput {
        segments,
        junctions,
        summary,
    }
}

/// concatenates per-source networks in order, keeping only the first
/// segment seen for each id. returns the merged segments and the number
/// dropped.
pub fn merge_by_id(networks: Vec<Vec<RoadSegment>>) -> (Vec<RoadSegment>, usize) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut removed = 0;
    let mut merged = vec![];
    for segment in networks.into_iter().flatten() {
        if seen.insert(segment.id.clone()) {
            merged.push(segment);
        } else {
            log::debug!("dropping repeated segment {}", segment.id);
            removed += 1;
        }
    }
    (merged, removed)
}

/// runs a configured pipeline and writes its outputs to `output_directory`.
/// the run fails only when no source could be read or writing fails.
pub fn run_from_config(
    conf: &PipelineConfig,
    output_directory: &Path,
) -> Result<RunSummary, RoadNetError> {
    conf.validate()?;
    let sources = conf
        .sources
        .iter()
        .map(|s| {
            let source: Box<dyn SegmentSource> =
                Box::new(CsvSegmentSource::from_config(s, conf.ignore_row_errors));
            source
        })
        .collect::<Vec<_>>();
    let output = run_pipeline(&sources, &conf.context, &conf.sort_priority);
    if output.summary.sources.is_empty() {
        return Err(RoadNetError::SourceReadError(
            String::from("*"),
            String::from("every configured source failed, see log for details"),
        ));
    }
    output.write_network(output_directory, conf.split_network, conf.overwrite)?;
    Ok(output.summary)
}
