//! Street name associations collected from named road ways.

use hashbrown::HashMap;

use crate::OsmNodeId;

/// Node-to-name and name-to-segment associations for named streets.
///
/// A single street is usually split across many way segments, and a
/// node shared by two streets belongs to both, so both directions of
/// the mapping are kept.
#[derive(Debug, Default, Clone)]
pub struct StreetNames {
    node_names: HashMap<OsmNodeId, Vec<String>>,
    name_edges: HashMap<String, Vec<(OsmNodeId, OsmNodeId)>>,
}

impl StreetNames {
    /// Associates every node and consecutive pair of `refs` with `name`.
    ///
    /// Pairs are appended to the per-name segment list in way order, so
    /// repeated calls for segments of the same street keep each
    /// segment's internal ordering intact.
    pub fn record_way(&mut self, name: &str, refs: &[OsmNodeId]) {
        for &node in refs {
            let names = self.node_names.entry(node).or_default();
            if !names.iter().any(|n| n == name) {
                names.push(name.to_owned());
            }
        }

        let segments = self.name_edges.entry(name.to_owned()).or_default();
        segments.extend(refs.windows(2).map(|pair| (pair[0], pair[1])));
    }

    /// Names of every street the node belongs to, in file order.
    pub fn names_for(&self, node: OsmNodeId) -> &[String] {
        self.node_names.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All segment pairs recorded under `name`, across every way
    /// sharing that name.
    pub fn edges_for(&self, name: &str) -> Option<&[(OsmNodeId, OsmNodeId)]> {
        self.name_edges.get(name).map(Vec::as_slice)
    }

    /// Number of distinct street names seen.
    pub fn street_count(&self) -> usize {
        self.name_edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_aggregate_in_order() {
        let mut names = StreetNames::default();
        names.record_way("Elm Street", &[1, 2, 3]);
        names.record_way("Elm Street", &[7, 8]);

        assert_eq!(
            names.edges_for("Elm Street"),
            Some(&[(1, 2), (2, 3), (7, 8)][..])
        );
        assert_eq!(names.street_count(), 1);
    }

    #[test]
    fn shared_node_belongs_to_both_streets() {
        let mut names = StreetNames::default();
        names.record_way("Elm Street", &[1, 2]);
        names.record_way("Oak Avenue", &[2, 3]);

        assert_eq!(names.names_for(2), ["Elm Street", "Oak Avenue"]);
        assert_eq!(names.names_for(1), ["Elm Street"]);
    }

    #[test]
    fn repeated_segment_does_not_duplicate_node_names() {
        let mut names = StreetNames::default();
        names.record_way("Elm Street", &[1, 2]);
        names.record_way("Elm Street", &[2, 3]);

        assert_eq!(names.names_for(2), ["Elm Street"]);
    }

    #[test]
    fn unknown_lookups_are_empty() {
        let names = StreetNames::default();

        assert!(names.is_empty());
        assert!(names.names_for(42).is_empty());
        assert_eq!(names.edges_for("Elm Street"), None);
    }
}
