//! Road graph assembled from way topology and resolved coordinates.

use geo::{Point, Rect};
use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use super::components::{RoadEdge, RoadNode};
use super::names::StreetNames;
use crate::{Error, INTERSECTION_DEGREE, OsmNodeId};

/// Intersection point stored in the spatial index, tagged with its
/// graph node index.
#[derive(Debug, Clone, Copy)]
pub struct IndexedPoint {
    pub point: [f64; 2],
    pub index: NodeIndex,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Undirected road graph with intersection classification.
///
/// One graph node per coordinate-bearing road node, one edge per
/// distinct node pair seen in the way pass. Intersections (degree >=
/// [`INTERSECTION_DEGREE`]) are additionally held in an R-tree for
/// nearest-neighbor picking.
#[derive(Debug)]
pub struct RoadGraph {
    /// Underlying graph with node positions and edge multiplicities
    pub graph: UnGraph<RoadNode, RoadEdge>,
    names: StreetNames,
    node_lookup: HashMap<OsmNodeId, NodeIndex>,
    intersection_index: RTree<IndexedPoint>,
    dropped_edges: usize,
}

impl RoadGraph {
    /// Builds the graph from the scanned way pairs and the coordinates
    /// resolved for them.
    ///
    /// A pair is only materialized as an edge when both endpoints carry
    /// coordinates; everything else is counted and dropped. Pairs seen
    /// more than once collapse into a single edge with a higher
    /// multiplicity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRoadNodes`] when no node resolved to a
    /// coordinate.
    pub fn from_parts(
        pairs: Vec<(OsmNodeId, OsmNodeId)>,
        coordinates: HashMap<OsmNodeId, Point<f64>>,
        names: StreetNames,
    ) -> Result<Self, Error> {
        if coordinates.is_empty() {
            return Err(Error::NoRoadNodes);
        }

        let mut graph: UnGraph<RoadNode, RoadEdge> =
            UnGraph::with_capacity(coordinates.len(), pairs.len());
        let mut node_lookup = HashMap::with_capacity(coordinates.len());

        for (&id, &geometry) in &coordinates {
            let index = graph.add_node(RoadNode { id, geometry });
            node_lookup.insert(id, index);
        }

        let mut dropped_edges = 0;
        for (u, v) in pairs {
            match (node_lookup.get(&u), node_lookup.get(&v)) {
                (Some(&a), Some(&b)) => {
                    if let Some(edge) = graph.find_edge(a, b) {
                        graph[edge].multiplicity += 1;
                    } else {
                        graph.add_edge(a, b, RoadEdge { multiplicity: 1 });
                    }
                }
                _ => dropped_edges += 1,
            }
        }

        let intersection_index = build_intersection_index(&graph);

        Ok(Self {
            graph,
            names,
            node_lookup,
            intersection_index,
            dropped_edges,
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Segment pairs discarded because an endpoint had no coordinate.
    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    pub fn names(&self) -> &StreetNames {
        &self.names
    }

    pub fn node(&self, index: NodeIndex) -> &RoadNode {
        &self.graph[index]
    }

    pub fn node_index(&self, id: OsmNodeId) -> Option<NodeIndex> {
        self.node_lookup.get(&id).copied()
    }

    pub fn degree(&self, index: NodeIndex) -> usize {
        self.graph.edges(index).count()
    }

    pub fn is_intersection(&self, index: NodeIndex) -> bool {
        self.degree(index) >= INTERSECTION_DEGREE
    }

    /// Nodes where at least [`INTERSECTION_DEGREE`] edges meet.
    pub fn intersections(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .node_indices()
            .filter(|&index| self.is_intersection(index))
    }

    pub fn intersection_count(&self) -> usize {
        self.intersection_index.size()
    }

    /// Nearest intersection to `point` within `max_distance` (in
    /// coordinate units).
    pub fn nearest_intersection(&self, point: Point<f64>, max_distance: f64) -> Option<NodeIndex> {
        let query = [point.x(), point.y()];
        self.intersection_index
            .nearest_neighbor(&query)
            .filter(|found| found.distance_2(&query) <= max_distance * max_distance)
            .map(|found| found.index)
    }

    /// Tight lon/lat bounding box over every graph node.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mut nodes = self.graph.node_weights();
        let first = nodes.next()?.geometry;
        let (mut min, mut max) = (first, first);
        for node in nodes {
            let p = node.geometry;
            min = Point::new(min.x().min(p.x()), min.y().min(p.y()));
            max = Point::new(max.x().max(p.x()), max.y().max(p.y()));
        }
        Some(Rect::new(min.0, max.0))
    }
}

fn build_intersection_index(graph: &UnGraph<RoadNode, RoadEdge>) -> RTree<IndexedPoint> {
    let points = graph
        .node_indices()
        .filter(|&index| graph.edges(index).count() >= INTERSECTION_DEGREE)
        .map(|index| {
            let node = &graph[index];
            IndexedPoint {
                point: [node.geometry.x(), node.geometry.y()],
                index,
            }
        })
        .collect();
    RTree::bulk_load(points)
}
