use ridgeway_core::Point;

use crate::distance::{chebyshev, euclidean};
use crate::traits::HeightField;

/// Default expansion budget for a single search.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// Default cost added per whole unit of elevation change.
pub const DEFAULT_CLIMB_PENALTY: u32 = 50;

/// Distance estimate used to order the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Rounded straight-line distance. Can overestimate on 8-connected grids,
    /// so routes are plausible but not always the cheapest.
    #[default]
    Euclidean,
    /// Chebyshev distance. Never overestimates, so routes are cheapest.
    Chebyshev,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> u32 {
        match self {
            Self::Euclidean => round_to_u32(euclidean(from, to)),
            Self::Chebyshev => chebyshev(from, to) as u32,
        }
    }
}

/// Cost model and limits for [`TerrainPathfinder`](crate::TerrainPathfinder).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of node expansions before a search gives up.
    pub max_expansions: usize,
    /// Cost added per whole unit of elevation change between two cells.
    pub climb_penalty: u32,
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            climb_penalty: DEFAULT_CLIMB_PENALTY,
            heuristic: Heuristic::Euclidean,
        }
    }
}

impl SearchConfig {
    /// Cost of stepping between two adjacent cells with the given elevations:
    /// `1 + round(|to - from|) * climb_penalty`.
    #[inline]
    pub fn step_cost(&self, from: f32, to: f32) -> u32 {
        let climb = round_to_u32((to - from).abs());
        climb.saturating_mul(self.climb_penalty).saturating_add(1)
    }

    /// Total cost of walking `path` over `field`.
    ///
    /// Returns `None` if the path leaves the field or contains a step that is
    /// not between adjacent cells.
    pub fn path_cost<F: HeightField + ?Sized>(&self, field: &F, path: &[Point]) -> Option<u32> {
        let bounds = field.bounds();
        if path.iter().any(|&p| !bounds.contains(p)) {
            return None;
        }
        path.windows(2).try_fold(0u32, |acc, w| {
            if !w[0].is_adjacent(w[1]) {
                return None;
            }
            let step = self.step_cost(field.height(w[0]), field.height(w[1]));
            Some(acc.saturating_add(step))
        })
    }
}

/// Round half to even, then clamp into `u32`. NaN maps to 0.
#[inline]
fn round_to_u32(v: f32) -> u32 {
    v.round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeway_core::HeightMap;

    #[test]
    fn step_cost_penalizes_climbs() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.step_cost(0.0, 0.0), 1);
        assert_eq!(cfg.step_cost(0.0, 1.0), 51);
        assert_eq!(cfg.step_cost(3.0, 1.0), 101);
        assert_eq!(cfg.step_cost(0.0, 0.4), 1);
        // Halves round to even.
        assert_eq!(cfg.step_cost(0.0, 0.5), 1);
        assert_eq!(cfg.step_cost(0.0, 1.5), 101);
        assert_eq!(cfg.step_cost(0.0, 2.5), 101);
    }

    #[test]
    fn step_cost_saturates() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.step_cost(0.0, f32::MAX), u32::MAX);
        assert_eq!(cfg.step_cost(0.0, f32::NAN), 1);
    }

    #[test]
    fn heuristic_estimates() {
        let a = Point::new(0, 0);
        assert_eq!(Heuristic::Euclidean.estimate(a, Point::new(3, 3)), 4);
        assert_eq!(Heuristic::Euclidean.estimate(a, Point::new(2, 1)), 2);
        assert_eq!(Heuristic::Chebyshev.estimate(a, Point::new(3, 3)), 3);
        assert_eq!(Heuristic::default(), Heuristic::Euclidean);
    }

    #[test]
    fn path_cost_sums_steps() {
        let mut hm = HeightMap::new(3, 3);
        hm.set(Point::new(1, 1), 1.0);
        let cfg = SearchConfig::default();
        let around = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 1), Point::new(2, 2)];
        assert_eq!(cfg.path_cost(&hm, &around), Some(3));
        let through = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)];
        assert_eq!(cfg.path_cost(&hm, &through), Some(102));
        assert_eq!(cfg.path_cost(&hm, &[Point::new(1, 1)]), Some(0));
        assert_eq!(cfg.path_cost(&hm, &[]), Some(0));
    }

    #[test]
    fn path_cost_rejects_gaps_and_outside_points() {
        let hm = HeightMap::new(4, 4);
        let cfg = SearchConfig::default();
        assert_eq!(cfg.path_cost(&hm, &[Point::new(0, 0), Point::new(2, 0)]), None);
        assert_eq!(cfg.path_cost(&hm, &[Point::new(0, 0), Point::new(0, 0)]), None);
        assert_eq!(cfg.path_cost(&hm, &[Point::new(3, 3), Point::new(4, 4)]), None);
    }
}
