//! Road network components - nodes and edges

use geo::Point;

use crate::OsmNodeId;

/// Road graph node
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// OSM ID of the node
    pub id: OsmNodeId,
    /// Node coordinates (lon, lat)
    pub geometry: Point<f64>,
}

/// Road graph edge (one segment between consecutive way nodes)
#[derive(Debug, Clone)]
pub struct RoadEdge {
    /// How many scanned way segments collapsed into this edge
    pub multiplicity: u32,
}
