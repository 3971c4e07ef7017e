//! OSM pbf processing

mod scanner;

pub(crate) use scanner::{scan_node_coordinates, scan_ways};
