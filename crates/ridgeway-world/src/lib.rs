//! World-building utilities on top of ridgeway's pathfinder: settlement
//! placement and road networks.

pub mod roads;

pub use roads::{Road, RoadMap, RoadPlanner};
