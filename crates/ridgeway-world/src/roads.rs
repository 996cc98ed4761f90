//! Road planning between points of interest.
//!
//! [`RoadPlanner`] places settlements at random cells of a height field and
//! joins them with low-relief routes from a shared [`TerrainPathfinder`].
//! Routes are collected on a [`RoadMap`] overlay for rendering or further
//! world generation.

use log::{debug, error};
use rand::Rng;
use ridgeway_core::{Point, Range};
use ridgeway_paths::{HeightField, SearchConfig, TerrainPathfinder};

/// A planned route between two points of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub from: Point,
    pub to: Point,
    /// Cells from `from` to `to` inclusive.
    pub cells: Vec<Point>,
    /// Accumulated elevation-aware cost of the route.
    pub cost: u32,
}

impl Road {
    /// Number of steps along the road.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

/// Per-cell count of roads passing through a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadMap {
    traffic: Vec<u16>,
    bounds: Range,
}

impl RoadMap {
    /// Create an empty overlay covering `bounds`.
    pub fn new(bounds: Range) -> Self {
        Self {
            traffic: vec![0; bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// Record every cell of `road`. Cells outside the overlay are ignored.
    pub fn paint(&mut self, road: &Road) {
        for &p in &road.cells {
            if let Some(i) = self.index(p) {
                self.traffic[i] = self.traffic[i].saturating_add(1);
            }
        }
    }

    /// How many painted roads pass through `p`.
    pub fn traffic(&self, p: Point) -> u16 {
        self.index(p).map_or(0, |i| self.traffic[i])
    }

    #[inline]
    pub fn is_road(&self, p: Point) -> bool {
        self.traffic(p) > 0
    }

    /// Number of distinct road cells.
    pub fn len(&self) -> usize {
        self.traffic.iter().filter(|&&t| t > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every painted road.
    pub fn clear(&mut self) {
        self.traffic.fill(0);
    }
}

/// Places settlements and connects them with roads.
pub struct RoadPlanner<R: Rng> {
    pub rng: R,
    pathfinder: TerrainPathfinder,
}

impl<R: Rng> RoadPlanner<R> {
    pub fn new(rng: R, config: SearchConfig) -> Self {
        Self::with_pathfinder(rng, TerrainPathfinder::new(config))
    }

    /// Use an existing pathfinder, keeping its node cache warm.
    pub fn with_pathfinder(rng: R, pathfinder: TerrainPathfinder) -> Self {
        Self { rng, pathfinder }
    }

    pub fn pathfinder(&self) -> &TerrainPathfinder {
        &self.pathfinder
    }

    pub fn into_pathfinder(self) -> TerrainPathfinder {
        self.pathfinder
    }

    /// A uniformly random cell of `bounds`, or `None` if it is empty.
    pub fn random_site(&mut self, bounds: Range) -> Option<Point> {
        if bounds.is_empty() {
            return None;
        }
        Some(Point::new(
            self.rng.random_range(bounds.min.x..bounds.max.x),
            self.rng.random_range(bounds.min.y..bounds.max.y),
        ))
    }

    /// Pick up to `count` distinct random cells of the field.
    pub fn scatter_settlements<F: HeightField + ?Sized>(
        &mut self,
        field: &F,
        count: usize,
    ) -> Vec<Point> {
        let bounds = field.bounds();
        let count = count.min(bounds.len());
        let mut sites = Vec::with_capacity(count);
        while sites.len() < count {
            let Some(p) = self.random_site(bounds) else {
                break;
            };
            if !sites.contains(&p) {
                sites.push(p);
            }
        }
        sites
    }

    /// Plan a road from `from` to `to`.
    ///
    /// Failures are logged with both endpoints and yield `None`.
    pub fn connect<F: HeightField + ?Sized>(
        &mut self,
        field: &F,
        from: Point,
        to: Point,
    ) -> Option<Road> {
        match self.pathfinder.search(field, from, to) {
            Ok(cells) => {
                let cost = self.pathfinder.config().path_cost(field, &cells)?;
                debug!("road {from} -> {to}: {} steps, cost {cost}", cells.len() - 1);
                Some(Road {
                    from,
                    to,
                    cells,
                    cost,
                })
            }
            Err(e) => {
                error!("could not find road between {from} and {to}: {e}");
                None
            }
        }
    }

    /// Connect two random points of interest.
    pub fn connect_random<F: HeightField + ?Sized>(&mut self, field: &F) -> Option<Road> {
        let bounds = field.bounds();
        let from = self.random_site(bounds)?;
        let to = self.random_site(bounds)?;
        self.connect(field, from, to)
    }

    /// Connect consecutive `sites` pairwise, skipping legs with no route.
    pub fn connect_chain<F: HeightField + ?Sized>(
        &mut self,
        field: &F,
        sites: &[Point],
    ) -> Vec<Road> {
        sites
            .windows(2)
            .filter_map(|w| self.connect(field, w[0], w[1]))
            .collect()
    }

    /// Scatter `count` settlements, chain them with roads and paint the
    /// roads onto a fresh overlay.
    pub fn build_network<F: HeightField + ?Sized>(
        &mut self,
        field: &F,
        count: usize,
    ) -> (Vec<Point>, Vec<Road>, RoadMap) {
        let sites = self.scatter_settlements(field, count);
        let roads = self.connect_chain(field, &sites);
        let mut map = RoadMap::new(field.bounds());
        for road in &roads {
            map.paint(road);
        }
        debug!(
            "road network: {} settlements, {} roads, {} road cells",
            sites.len(),
            roads.len(),
            map.len()
        );
        (sites, roads, map)
    }
}
