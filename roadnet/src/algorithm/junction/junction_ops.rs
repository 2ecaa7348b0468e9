use super::{highway_terminals, SegmentLineIndex};
use crate::model::{
    feature::{JunctionType, RoadRole},
    junction::JunctionPoint,
    segment::{geometry_ops, RoadSegment},
    ProcessingContext,
};
use geo::Point;
use itertools::Itertools;
use kdam::tqdm;
use rstar::RTree;
use std::collections::HashMap;

/// id prefix of points found by the recovery pass
pub const RECOVERY_ID_PREFIX: &str = "RECOVERY";

/// derives the points where the limited-access network (highways and ramps)
/// must connect to the local network.
///
/// four cases are evaluated in precedence order:
///   1. ramp endpoints touching a highway
///   2. ends of the dissolved highway network touching a ramp
///   3. ramp endpoints touching a local road
///   4. ends of the dissolved highway network touching a local road but no ramp
///
/// followed by the optional recovery pass, which intersects ramps lying
/// entirely between highways with local roads and flags its points for review.
/// a candidate within `coincidence_tolerance` of an already emitted point is
/// dropped, so each location keeps its highest-precedence type.
pub fn synthesize_junctions(
    segments: &[RoadSegment],
    context: &ProcessingContext,
) -> Vec<JunctionPoint> {
    let touch = context.touch_tolerance;
    let highways = SegmentLineIndex::new(segments, RoadRole::Highway);
    let ramps = SegmentLineIndex::new(segments, RoadRole::Ramp);
    let locals = SegmentLineIndex::new(segments, RoadRole::Local);
    let terminals = highway_terminals(segments, touch);
    let ramp_ends = segments
        .iter()
        .filter(|s| s.role == RoadRole::Ramp)
        .filter_map(|s| geometry_ops::endpoints(&s.geometry).map(|(a, b)| (s, a, b)))
        .collect_vec();
    log::debug!(
        "junction synthesis over {} segments: {} ramps, {} highway terminals",
        segments.len(),
        ramp_ends.len(),
        terminals.len()
    );

    let mut emitter = JunctionEmitter::new(context.coincidence_tolerance);

    // 1. ramp endpoints touching a highway
    for (ramp, a, b) in ramp_ends.iter() {
        for p in [a, b] {
            if highways.touches(p, touch) {
                emitter.emit(*p, JunctionType::RampToHighway, &ramp.id, false);
            }
        }
    }

    // 2. highway terminals touching a ramp
    for t in terminals.iter() {
        if ramps.touches(&t.location, touch) {
            let id = &segments[t.segment].id;
            emitter.emit(t.location, JunctionType::HighwayDeadEndToLocal, id, false);
        }
    }

    // 3. ramp endpoints touching a local road
    for (ramp, a, b) in ramp_ends.iter() {
        for p in [a, b] {
            if locals.touches(p, touch) {
                emitter.emit(*p, JunctionType::RampToLocal, &ramp.id, false);
            }
        }
    }

    // 4. highway terminals touching a local road and no ramp
    for t in terminals.iter() {
        if locals.touches(&t.location, touch) && !ramps.touches(&t.location, touch) {
            let id = &segments[t.segment].id;
            emitter.emit(
                t.location,
                JunctionType::HighwayDeadEndJoinsLocalDirectly,
                id,
                false,
            );
        }
    }

    if context.recovery_pass && !locals.is_empty() {
        let candidates = ramp_ends
            .iter()
            .filter(|(ramp, _, _)| {
                !context
                    .recovery_excluded_prefixes
                    .iter()
                    .any(|prefix| ramp.id.starts_with(prefix.as_str()))
            })
            .filter(|(_, a, b)| highways.touches(a, touch) && highways.touches(b, touch))
            .collect_vec();
        let iter = tqdm!(
            candidates.iter(),
            total = candidates.len(),
            desc = "junction recovery pass"
        );
        for (ramp, _, _) in iter {
            for line in ramp.geometry.lines() {
                for (p, _) in locals.crossings(&line) {
                    emitter.emit(p, JunctionType::RampToLocal, &ramp.id, true);
                }
            }
        }
        eprintln!();
    }

    let junctions = emitter.finish();
    let counts = junctions.iter().counts_by(|j| j.junction_type);
    for (junction_type, count) in counts.iter().sorted() {
        log::info!("{count} {junction_type} junctions");
    }
    let review = junctions.iter().filter(|j| j.needs_review).count();
    if review > 0 {
        log::warn!("{review} junctions from the recovery pass need review");
    }
    junctions
}

/// collects junction points, numbering them per type and rejecting
/// candidates that coincide with an earlier point.
struct JunctionEmitter {
    tolerance_2: f64,
    rtree: RTree<[f64; 2]>,
    sequence: HashMap<&'static str, usize>,
    junctions: Vec<JunctionPoint>,
}

impl JunctionEmitter {
    fn new(coincidence_tolerance: f64) -> JunctionEmitter {
        JunctionEmitter {
            tolerance_2: coincidence_tolerance * coincidence_tolerance,
            rtree: RTree::new(),
            sequence: HashMap::new(),
            junctions: vec![],
        }
    }

    /// returns false when the candidate was dropped as coincident
    fn emit(
        &mut self,
        location: Point<f64>,
        junction_type: JunctionType,
        segment_id: &str,
        needs_review: bool,
    ) -> bool {
        let query = [location.x(), location.y()];
        if self
            .rtree
            .locate_within_distance(query, self.tolerance_2)
            .next()
            .is_some()
        {
            return false;
        }
        let prefix = if needs_review {
            RECOVERY_ID_PREFIX
        } else {
            junction_type.id_prefix()
        };
        let n = self.sequence.entry(prefix).or_insert(0);
        *n += 1;
        self.rtree.insert(query);
        self.junctions.push(JunctionPoint {
            id: format!("{prefix}_{n}"),
            location,
            junction_type,
            segment_id: String::from(segment_id),
            needs_review,
        });
        true
    }

    fn finish(self) -> Vec<JunctionPoint> {
        self.junctions
    }
}
