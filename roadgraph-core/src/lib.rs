//! Road network extraction from OpenStreetMap extracts.
//!
//! Reads highway geometry out of a `.osm.pbf` file in two sequential
//! passes, assembles an undirected road graph with node coordinates,
//! and classifies intersections by graph degree.

mod error;
pub mod loading;
pub mod model;
pub mod prelude;

pub use error::Error;
pub use loading::load_road_network;

/// OSM node identifier as stored in the extract
pub type OsmNodeId = i64;

/// Minimum graph degree for a node to count as an intersection
pub const INTERSECTION_DEGREE: usize = 3;
