//! Two sequential passes over an OSM protobuf extract.

use std::path::Path;

use geo::Point;
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use osmpbf::{Element, ElementReader};

use crate::model::StreetNames;
use crate::{Error, OsmNodeId};

/// Everything collected from the way pass.
#[derive(Debug, Default)]
pub(crate) struct WayScan {
    /// Ids of every node referenced by a road way
    pub road_node_ids: HashSet<OsmNodeId>,
    /// Consecutive node pairs in way order, duplicates included
    pub edges: Vec<(OsmNodeId, OsmNodeId)>,
    /// Street name associations for named ways
    pub names: StreetNames,
    pub way_count: u64,
}

impl WayScan {
    fn record_way(&mut self, refs: &[OsmNodeId], name: Option<&str>) {
        self.way_count += 1;
        self.road_node_ids.extend(refs.iter().copied());
        self.edges
            .extend(refs.iter().copied().tuple_windows::<(OsmNodeId, OsmNodeId)>());
        if let Some(name) = name {
            self.names.record_way(name, refs);
        }
    }
}

/// First pass: collect node ids, segment pairs and the street name of
/// every `highway`-tagged way.
pub(crate) fn scan_ways(path: &Path) -> Result<WayScan, Error> {
    let reader = ElementReader::from_path(path)?;
    let mut scan = WayScan::default();

    reader.for_each(|element| {
        if let Element::Way(way) = element {
            let mut is_road = false;
            let mut name = None;
            for (key, value) in way.tags() {
                match key {
                    "highway" => is_road = true,
                    "name" => name = Some(value),
                    _ => {}
                }
            }
            if is_road {
                let refs: Vec<OsmNodeId> = way.refs().collect();
                scan.record_way(&refs, name);
            }
        }
    })?;

    Ok(scan)
}

/// Second pass: resolve coordinates for exactly the nodes referenced
/// by the way pass. All other nodes are skipped.
pub(crate) fn scan_node_coordinates(
    path: &Path,
    road_node_ids: &HashSet<OsmNodeId>,
) -> Result<HashMap<OsmNodeId, Point<f64>>, Error> {
    let reader = ElementReader::from_path(path)?;
    let mut coordinates = HashMap::with_capacity(road_node_ids.len());

    reader.for_each(|element| match element {
        Element::Node(node) => {
            if road_node_ids.contains(&node.id()) {
                coordinates.insert(node.id(), Point::new(node.lon(), node.lat()));
            }
        }
        Element::DenseNode(node) => {
            if road_node_ids.contains(&node.id()) {
                coordinates.insert(node.id(), Point::new(node.lon(), node.lat()));
            }
        }
        _ => {}
    })?;

    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_way_collects_ids_and_pairs() {
        let mut scan = WayScan::default();
        scan.record_way(&[1, 2, 3], None);

        assert_eq!(scan.way_count, 1);
        assert_eq!(scan.edges, vec![(1, 2), (2, 3)]);
        for (u, v) in &scan.edges {
            assert!(scan.road_node_ids.contains(u));
            assert!(scan.road_node_ids.contains(v));
        }
    }

    #[test]
    fn duplicate_pairs_are_kept() {
        let mut scan = WayScan::default();
        scan.record_way(&[1, 2], None);
        scan.record_way(&[1, 2], None);

        assert_eq!(scan.edges, vec![(1, 2), (1, 2)]);
    }

    #[test]
    fn single_node_way_yields_no_pairs() {
        let mut scan = WayScan::default();
        scan.record_way(&[7], None);

        assert!(scan.edges.is_empty());
        assert!(scan.road_node_ids.contains(&7));
    }

    #[test]
    fn named_way_is_indexed() {
        let mut scan = WayScan::default();
        scan.record_way(&[1, 2, 3], Some("Main Street"));

        assert_eq!(scan.names.names_for(2), ["Main Street"]);
        assert_eq!(
            scan.names.edges_for("Main Street"),
            Some(&[(1, 2), (2, 3)][..])
        );
    }

    #[test]
    fn unnamed_way_adds_no_names() {
        let mut scan = WayScan::default();
        scan.record_way(&[1, 2], None);

        assert!(scan.names.is_empty());
        assert!(scan.names.names_for(1).is_empty());
    }
}
