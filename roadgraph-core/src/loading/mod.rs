//! This module is responsible for loading road geometry from an OSM
//! extract and building the road graph.

mod builder;
pub mod osm;

pub use builder::load_road_network;
