//! Road network model

pub mod components;
pub mod names;
pub mod network;

pub use components::{RoadEdge, RoadNode};
pub use names::StreetNames;
pub use network::{IndexedPoint, RoadGraph};
