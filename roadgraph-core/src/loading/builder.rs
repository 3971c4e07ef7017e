use std::path::Path;

use log::{debug, info};

use super::osm::{scan_node_coordinates, scan_ways};
use crate::Error;
use crate::model::RoadGraph;

/// Loads a road graph from an OSM PBF extract.
///
/// The extract is read twice: the first pass collects the topology of
/// every `highway`-tagged way, the second resolves coordinates for
/// exactly the nodes those ways reference. The id set must be complete
/// before coordinates can be filtered, hence the second pass.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be parsed, or
/// [`Error::NoRoadNodes`] if no referenced node resolved to a
/// coordinate.
pub fn load_road_network(path: &Path) -> Result<RoadGraph, Error> {
    if !path.exists() {
        return Err(Error::InvalidData(format!(
            "OSM file not found: {}",
            path.display()
        )));
    }

    info!("Scanning road ways: {}", path.display());
    let scan = scan_ways(path)?;
    info!(
        "Collected {} road ways ({} node refs, {} segment pairs)",
        scan.way_count,
        scan.road_node_ids.len(),
        scan.edges.len()
    );

    info!("Resolving node coordinates");
    let coordinates = scan_node_coordinates(path, &scan.road_node_ids)?;
    debug!(
        "Resolved {} of {} node coordinates",
        coordinates.len(),
        scan.road_node_ids.len()
    );

    let graph = RoadGraph::from_parts(scan.edges, coordinates, scan.names)?;
    if graph.dropped_edges() > 0 {
        debug!(
            "Dropped {} segment pairs with unresolved endpoints",
            graph.dropped_edges()
        );
    }

    info!(
        "Road graph assembled: {} nodes, {} edges, {} intersections",
        graph.node_count(),
        graph.edge_count(),
        graph.intersection_count()
    );

    // Both protobuf passes allocate large transient buffers, and this
    // memory is not always released back to the system. This call will
    // release all free memory from the tail of the heap back to the
    // system.
    //
    // # Safety
    //
    // This call is safe to use on linux with glibc implementation
    // which is checked by the cfg attribute in compile time.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    unsafe {
        if libc::malloc_trim(0) == 0 {
            log::warn!("Memory trimming failed - continuing anyway");
        } else {
            log::debug!("Successfully trimmed unused heap memory");
        }
    }

    Ok(graph)
}
