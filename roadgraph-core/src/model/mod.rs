//! Data model for the extracted road network

pub mod roads;

pub use roads::{IndexedPoint, RoadEdge, RoadGraph, RoadNode, StreetNames};
