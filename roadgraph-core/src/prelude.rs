// Re-export key components
pub use crate::loading::load_road_network;
pub use crate::model::{RoadEdge, RoadGraph, RoadNode, StreetNames};

// Core types for the road network
pub use crate::Error;
pub use crate::INTERSECTION_DEGREE;
pub use crate::OsmNodeId;
