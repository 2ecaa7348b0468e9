use crate::model::{feature::RoadRole, segment::RoadSegment};
use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Line, Point};
use rstar::primitives::{GeomWithData, Line as RLine};
use rstar::{RTree, AABB};

/// a straight piece of a segment geometry tagged with the index of the
/// segment it came from
type IndexedLine = GeomWithData<RLine<[f64; 2]>, usize>;

/// spatial index over every straight piece of the segments of one role.
/// answers "does this point touch the layer" and "where does this line
/// cross the layer".
pub struct SegmentLineIndex {
    rtree: RTree<IndexedLine>,
}

impl SegmentLineIndex {
    pub fn new(segments: &[RoadSegment], role: RoadRole) -> SegmentLineIndex {
        let lines = segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.role == role)
            .flat_map(|(idx, s)| {
                s.geometry.lines().map(move |l| {
                    GeomWithData::new(RLine::new([l.start.x, l.start.y], [l.end.x, l.end.y]), idx)
                })
            })
            .collect::<Vec<_>>();
        SegmentLineIndex {
            rtree: RTree::bulk_load(lines),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// true when any indexed segment passes within `tolerance` of the point
    pub fn touches(&self, point: &Point<f64>, tolerance: f64) -> bool {
        self.rtree
            .locate_within_distance([point.x(), point.y()], tolerance * tolerance)
            .next()
            .is_some()
    }

    /// points where `line` crosses or overlaps an indexed segment, along with
    /// the index of the crossed segment. collinear overlaps report their start.
    pub fn crossings(&self, line: &Line<f64>) -> Vec<(Point<f64>, usize)> {
        let envelope = AABB::from_corners(
            [line.start.x.min(line.end.x), line.start.y.min(line.end.y)],
            [line.start.x.max(line.end.x), line.start.y.max(line.end.y)],
        );
        let mut out = vec![];
        for candidate in self.rtree.locate_in_envelope_intersecting(&envelope) {
            let from = candidate.geom().from;
            let to = candidate.geom().to;
            let other = Line::new((from[0], from[1]), (to[0], to[1]));
            match line_intersection(*line, other) {
                Some(LineIntersection::SinglePoint { intersection, .. }) => {
                    out.push((Point::from(intersection), candidate.data))
                }
                Some(LineIntersection::Collinear { intersection }) => {
                    out.push((Point::from(intersection.start), candidate.data))
                }
                None => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feature::SpeedSource;
    use geo::{line_string, point, LineString};

    fn segment(id: &str, role: RoadRole, geometry: LineString<f64>) -> RoadSegment {
        RoadSegment {
            id: String::from(id),
            source: String::from("test"),
            source_class: String::new(),
            role,
            speed_mph: 25,
            speed_source: SpeedSource::ClassDefault,
            urban_adjusted: false,
            travel_time_per_unit_length: 0.037 / 25.0,
            length: 0.0,
            travel_time_minutes: 0.0,
            in_urban_area: false,
            geometry,
        }
    }

    #[test]
    fn test_touches_interior_of_line() {
        let segments = vec![
            segment("h", RoadRole::Highway, line_string![(x: 0.0, y: 0.0), (x: 100.0, y: 0.0)]),
            segment("l", RoadRole::Local, line_string![(x: 0.0, y: 50.0), (x: 100.0, y: 50.0)]),
        ];
        let index = SegmentLineIndex::new(&segments, RoadRole::Highway);
        assert!(index.touches(&point!(x: 50.0, y: 0.005), 0.01));
        assert!(!index.touches(&point!(x: 50.0, y: 0.5), 0.01));
        // the local road is not part of the highway layer
        assert!(!index.touches(&point!(x: 50.0, y: 50.0), 0.01));
    }

    #[test]
    fn test_crossings() {
        let segments = vec![
            segment("l1", RoadRole::Local, line_string![(x: 5.0, y: -5.0), (x: 5.0, y: 5.0)]),
            segment("l2", RoadRole::Local, line_string![(x: 50.0, y: -5.0), (x: 50.0, y: 5.0)]),
        ];
        let index = SegmentLineIndex::new(&segments, RoadRole::Local);
        let ramp = Line::new((0.0, 0.0), (10.0, 0.0));
        let crossings = index.crossings(&ramp);
        assert_eq!(crossings.len(), 1);
        let (x, y) = (crossings[0].0.x(), crossings[0].0.y());
        assert!((x - 5.0).abs() < 1e-9 && y.abs() < 1e-9);
        assert_eq!(crossings[0].1, 0);
        assert!(SegmentLineIndex::new(&segments, RoadRole::Ramp).is_empty());
    }
}
