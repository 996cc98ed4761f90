//! Elevation-aware route planning on terrain grids.
//!
//! [`TerrainPathfinder`] runs an 8-connected A* search over any
//! [`HeightField`], charging `1 + round(|Δheight|) × climb_penalty` per step
//! so that routes hug low-relief ground. The frontier is a [`BucketQueue`]
//! over small integer priorities, and per-cell [`PathNode`] records are
//! reused between calls through generation stamps, so repeated queries on
//! the same grid never clear the search state.
//!
//! ```
//! use ridgeway_core::{HeightMap, Point};
//! use ridgeway_paths::TerrainPathfinder;
//!
//! let mut terrain = HeightMap::new(3, 3);
//! terrain.set(Point::new(1, 1), 1.0);
//!
//! let mut pathfinder = TerrainPathfinder::default();
//! let route = pathfinder.find_path(&terrain, Point::new(0, 0), Point::new(2, 2));
//! assert!(!route.contains(&Point::new(1, 1)));
//! ```

mod bucket;
mod config;
mod distance;
mod error;
mod neighbors;
mod node;
mod pathfinder;
mod traits;

pub use bucket::BucketQueue;
pub use config::{DEFAULT_CLIMB_PENALTY, DEFAULT_MAX_EXPANSIONS, Heuristic, SearchConfig};
pub use distance::{chebyshev, euclidean};
pub use error::PathError;
pub use neighbors::{Neighbors, OFFSETS};
pub use node::{NIL, NodeState, PathNode};
pub use pathfinder::TerrainPathfinder;
pub use traits::HeightField;
