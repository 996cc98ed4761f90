//! Elevation-aware A* over a [`HeightField`].
//!
//! The pathfinder keeps one [`PathNode`] per cell of the last height field it
//! searched and reuses them across calls. Instead of clearing the arena,
//! every call advances a generation counter by two: a node stamped with the
//! current generation is open, one stamped `generation + 1` is closed, and
//! anything older is stale and gets overwritten on discovery.

use log::{debug, error, warn};
use ridgeway_core::{Point, Range};

use crate::bucket::BucketQueue;
use crate::config::SearchConfig;
use crate::error::PathError;
use crate::neighbors::Neighbors;
use crate::node::{NIL, NodeState, PathNode};
use crate::traits::HeightField;

/// Route planner that minimizes accumulated elevation-aware cost on an
/// 8-connected grid.
pub struct TerrainPathfinder {
    config: SearchConfig,
    rng: Range,
    width: usize,
    nodes: Vec<PathNode>,
    generation: u32,
    expansions: usize,
    nbuf: Neighbors,
}

impl Default for TerrainPathfinder {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl TerrainPathfinder {
    /// Create a pathfinder. The node arena is allocated on first use.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rng: Range::default(),
            width: 0,
            nodes: Vec::new(),
            generation: 0,
            expansions: 0,
            nbuf: Neighbors::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Bounds of the height field searched last.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Generation of the most recent search.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of nodes expanded by the most recent search.
    #[inline]
    pub fn last_expansions(&self) -> usize {
        self.expansions
    }

    /// The search record for `p`, if any search on the current range has
    /// discovered it. Its fields may be stale; compare
    /// [`PathNode::state`] against [`generation`](Self::generation).
    pub fn node(&self, p: Point) -> Option<&PathNode> {
        let n = &self.nodes[self.idx(p)?];
        (n.stamp != 0 && n.pos == p).then_some(n)
    }

    /// Find the cheapest route from `origin` to `destination`.
    ///
    /// Returns the cells from `origin` to `destination` inclusive, or an
    /// empty vector if either endpoint lies outside the field, the
    /// destination cannot be reached, or the expansion budget runs out. The
    /// cause is logged; use [`search`](Self::search) to inspect it.
    pub fn find_path<F: HeightField + ?Sized>(
        &mut self,
        field: &F,
        origin: Point,
        destination: Point,
    ) -> Vec<Point> {
        self.search(field, origin, destination).unwrap_or_default()
    }

    /// Like [`find_path`](Self::find_path), but reports why no route was
    /// produced.
    pub fn search<F: HeightField + ?Sized>(
        &mut self,
        field: &F,
        origin: Point,
        destination: Point,
    ) -> Result<Vec<Point>, PathError> {
        let bounds = field.bounds();
        for point in [origin, destination] {
            if !bounds.contains(point) {
                warn!("rejecting route {origin} -> {destination}: {point} is outside {bounds}");
                return Err(PathError::OutOfBounds { point, bounds });
            }
        }

        self.adopt_range(bounds);
        let generation = self.next_generation();
        self.expansions = 0;

        let start = self.flat(origin);
        let goal = self.flat(destination);
        let h = self.config.heuristic.estimate(origin, destination);
        self.nodes[start].discover(origin, generation, 0, h, NIL);

        let mut open = BucketQueue::new();
        open.enqueue(&mut self.nodes, start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = loop {
            if self.expansions >= self.config.max_expansions {
                break Err(PathError::BudgetExhausted {
                    expansions: self.expansions,
                });
            }
            let Some(ci) = open.dequeue(&mut self.nodes) else {
                break Err(PathError::Unreachable {
                    origin,
                    destination,
                });
            };

            self.nodes[ci].close(generation);
            if ci == goal {
                break Ok(());
            }

            let cp = self.nodes[ci].pos;
            let current_g = self.nodes[ci].g;
            let current_h = field.height(cp);

            for &np in nbuf.within(cp, bounds) {
                let ni = self.flat(np);
                let tentative_g =
                    current_g.saturating_add(self.config.step_cost(current_h, field.height(np)));

                match self.nodes[ni].state(generation) {
                    NodeState::Closed => {}
                    NodeState::Undiscovered => {
                        let h = self.config.heuristic.estimate(np, destination);
                        self.nodes[ni].discover(np, generation, tentative_g, h, ci);
                        open.enqueue(&mut self.nodes, ni);
                    }
                    NodeState::Open => {
                        let n = &mut self.nodes[ni];
                        if tentative_g >= n.g {
                            continue;
                        }
                        let old_priority = n.priority();
                        n.g = tentative_g;
                        n.parent = ci;
                        if !open.change_key(&mut self.nodes, ni, old_priority) {
                            error!("open node {np} was not queued at priority {old_priority}");
                        }
                    }
                }
            }

            self.expansions += 1;
        };

        self.nbuf = nbuf;

        match outcome {
            Ok(()) => {
                let path = self.trace(start, goal)?;
                debug!(
                    "route {origin} -> {destination}: {} cells, cost {}, {} expansions",
                    path.len(),
                    self.nodes[goal].g,
                    self.expansions
                );
                Ok(path)
            }
            Err(e) => {
                warn!("no route from {origin} to {destination}: {e}");
                Err(e)
            }
        }
    }

    /// Walk parent links from `goal` back to `start`.
    fn trace(&self, start: usize, goal: usize) -> Result<Vec<Point>, PathError> {
        let mut path = Vec::new();
        let mut ci = goal;
        loop {
            let n = &self.nodes[ci];
            path.push(n.pos);
            if ci == start {
                break;
            }
            if n.parent == NIL || path.len() > self.nodes.len() {
                error!(
                    "route reconstruction stopped at {}: parent chain does not reach the origin",
                    n.pos
                );
                return Err(PathError::BrokenParentChain { at: n.pos });
            }
            ci = n.parent;
        }
        path.reverse();
        Ok(path)
    }

    /// Switch to a new grid rectangle.
    ///
    /// Ranges that fit in the existing arena reuse it: leftover stamps are all
    /// older than the next generation, so they read as undiscovered.
    fn adopt_range(&mut self, rng: Range) {
        if rng == self.rng {
            return;
        }
        let len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if len > self.nodes.len() {
            debug!("growing node arena from {} to {len} cells", self.nodes.len());
            self.nodes.clear();
            self.nodes.resize(len, PathNode::default());
        }
    }

    /// Advance the generation by two, restamping the arena if the counter
    /// would overflow.
    fn next_generation(&mut self) -> u32 {
        if self.generation > u32::MAX - 3 {
            debug!("generation counter exhausted, resetting node stamps");
            for n in &mut self.nodes {
                n.stamp = 0;
            }
            self.generation = 0;
        }
        self.generation += 2;
        self.generation
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.rng.contains(p).then(|| self.flat(p))
    }

    /// Flat index of a point known to be inside the current range.
    #[inline]
    fn flat(&self, p: Point) -> usize {
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        y * self.width + x
    }
}
