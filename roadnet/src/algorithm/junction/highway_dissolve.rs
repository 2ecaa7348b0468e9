use crate::model::{
    feature::RoadRole,
    segment::{geometry_ops, RoadSegment},
};
use geo::Point;
use rstar::primitives::GeomWithData;
use rstar::RTree;

type IndexedNode = GeomWithData<[f64; 2], usize>;

/// an end of the dissolved highway network
#[derive(Clone, Debug, PartialEq)]
pub struct HighwayTerminal {
    pub location: Point<f64>,
    /// index of the first highway segment ending at this node
    pub segment: usize,
    /// number of highway segment ends meeting here
    pub degree: usize,
}

/// merges highway segments end to end and returns the ends of the merged
/// lines. segment endpoints closer than `tolerance` are joined into one
/// node; nodes where exactly two highway segments meet disappear in the
/// merge, every other node is a terminal. terminals are returned in the
/// order their nodes were first seen.
pub fn highway_terminals(segments: &[RoadSegment], tolerance: f64) -> Vec<HighwayTerminal> {
    let tolerance_2 = tolerance * tolerance;
    let mut rtree: RTree<IndexedNode> = RTree::new();
    let mut nodes: Vec<HighwayTerminal> = vec![];

    let highway_ends = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.role == RoadRole::Highway)
        .filter_map(|(idx, s)| geometry_ops::endpoints(&s.geometry).map(|e| (idx, e)));

    for (segment, (start, end)) in highway_ends {
        for location in [start, end] {
            let query = [location.x(), location.y()];
            let existing = rtree
                .locate_within_distance(query, tolerance_2)
                .map(|n| n.data)
                .min();
            match existing {
                Some(node) => nodes[node].degree += 1,
                None => {
                    rtree.insert(GeomWithData::new(query, nodes.len()));
                    nodes.push(HighwayTerminal {
                        location,
                        segment,
                        degree: 1,
                    });
                }
            }
        }
    }

    nodes.into_iter().filter(|n| n.degree != 2).collect()
}
