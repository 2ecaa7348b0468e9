use super::{OverlapDetection, OverlapDetector};
use crate::model::segment::RoadSegment;
use geo::{BoundingRect, LineString};
use itertools::Itertools;
use kdam::tqdm;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, RTreeObject};

type ClusteredSegments = GeomWithData<Rectangle<[f64; 2]>, Vec<usize>>;

/// groups segments whose geometries share every vertex, in the same or in
/// reversed order, within a tolerance. this is the duplicate coverage left
/// behind when adjacent tiles or extracts of the same roads are appended.
/// grouping is transitive.
pub struct CoincidentGeometryDetector {
    pub tolerance: f64,
}

impl CoincidentGeometryDetector {
    pub fn new(tolerance: f64) -> CoincidentGeometryDetector {
        CoincidentGeometryDetector { tolerance }
    }
}

impl OverlapDetector for CoincidentGeometryDetector {
    /// clusters are built with an RTree of bounding boxes. each new segment
    /// drains every cluster whose envelope it intersects, merges those holding
    /// a coincident geometry, and puts the false alarms back.
    fn detect(&self, segments: &[RoadSegment]) -> OverlapDetection {
        let mut rtree: RTree<ClusteredSegments> = RTree::new();
        let mut failed = vec![];
        let iter = tqdm!(
            segments.iter().enumerate(),
            total = segments.len(),
            desc = "overlap detection"
        );
        for (index, segment) in iter {
            let rect = match rect_from_linestring(&segment.geometry, self.tolerance) {
                Ok(r) => r,
                Err(e) => {
                    failed.push((index, e));
                    continue;
                }
            };
            let query = GeomWithData::new(rect.clone(), vec![index]);
            let intersecting = rtree
                .drain_in_envelope_intersecting(query.envelope())
                .sorted_by_key(|obj| obj.data.first().copied())
                .collect_vec();

            let mut members = vec![index];
            let mut envelope = rect;
            for obj in intersecting.into_iter() {
                let matches = obj.data.iter().any(|other| {
                    coincident(
                        &segment.geometry,
                        &segments[*other].geometry,
                        self.tolerance,
                    )
                });
                if matches {
                    envelope = union(&envelope, obj.geom());
                    members.extend(obj.data.iter());
                } else {
                    // envelopes overlap but the lines differ, restore it
                    rtree.insert(obj);
                }
            }
            members.sort_unstable();
            rtree.insert(GeomWithData::new(envelope, members));
        }
        eprintln!();

        let groups = rtree
            .iter()
            .map(|obj| obj.data.clone())
            .sorted_by_key(|group| group.first().copied())
            .collect_vec();
        OverlapDetection { groups, failed }
    }
}

/// true when both lines have the same vertices within tolerance, walked
/// forward or backward
pub fn coincident(a: &LineString<f64>, b: &LineString<f64>, tolerance: f64) -> bool {
    if a.0.len() != b.0.len() || a.0.is_empty() {
        return false;
    }
    let tolerance_2 = tolerance * tolerance;
    let close = |p: &geo::Coord<f64>, q: &geo::Coord<f64>| {
        let dx = p.x - q.x;
        let dy = p.y - q.y;
        dx * dx + dy * dy <= tolerance_2
    };
    let forward = a.0.iter().zip(b.0.iter()).all(|(p, q)| close(p, q));
    forward || a.0.iter().zip(b.0.iter().rev()).all(|(p, q)| close(p, q))
}

/// rtree envelope of a line, grown by the tolerance so near-coincident
/// lines always land in each other's envelopes
fn rect_from_linestring(
    linestring: &LineString<f64>,
    tolerance: f64,
) -> Result<Rectangle<[f64; 2]>, String> {
    let bbox = linestring
        .bounding_rect()
        .ok_or_else(|| String::from("cannot get bounds of empty geometry"))?;
    let (min, max) = (bbox.min(), bbox.max());
    if !(min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite()) {
        return Err(String::from("geometry has non-finite coordinates"));
    }
    Ok(Rectangle::from_corners(
        [min.x - tolerance, min.y - tolerance],
        [max.x + tolerance, max.y + tolerance],
    ))
}

fn union(a: &Rectangle<[f64; 2]>, b: &Rectangle<[f64; 2]>) -> Rectangle<[f64; 2]> {
    let (a_lo, a_hi) = (a.lower(), a.upper());
    let (b_lo, b_hi) = (b.lower(), b.upper());
    Rectangle::from_corners(
        [a_lo[0].min(b_lo[0]), a_lo[1].min(b_lo[1])],
        [a_hi[0].max(b_hi[0]), a_hi[1].max(b_hi[1])],
    )
}
