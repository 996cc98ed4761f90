//! A dense elevation grid.
//!
//! [`HeightMap`] stores one `f32` elevation per cell in row-major order over
//! the range `[0, width) × [0, height)`. It is the in-memory stand-in for the
//! environment layer a terrain generator would normally produce.

use crate::geom::{Point, Range};

/// A 2D grid of elevation samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightMap {
    cells: Vec<f32>,
    bounds: Range,
}

impl HeightMap {
    /// Create a flat height map (every cell at elevation 0).
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width.max(0), height.max(0));
        Self {
            cells: vec![0.0; bounds.len()],
            bounds,
        }
    }

    /// Create a height map whose elevations are computed by `f`.
    pub fn from_fn(width: i32, height: i32, f: impl FnMut(Point) -> f32) -> Self {
        let mut hm = Self::new(width, height);
        hm.fill_fn(f);
        hm
    }

    /// Build a height map from rows of samples. Returns `None` when the rows
    /// do not all share the same length, or when either dimension does not
    /// fit in an `i32` coordinate.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let bounds = sized_bounds(width, rows.len())?;
        let mut cells = Vec::with_capacity(bounds.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            cells.extend_from_slice(row);
        }
        Some(Self { cells, bounds })
    }

    /// The range covered by this map.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// Elevation at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<f32> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the elevation at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, elevation: f32) {
        if !self.bounds.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = elevation;
    }

    /// Set every cell to `elevation`.
    pub fn fill(&mut self, elevation: f32) {
        self.cells.fill(elevation);
    }

    /// Recompute every cell from its coordinate.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> f32) {
        for p in self.bounds.iter() {
            let idx = self.index(p);
            self.cells[idx] = f(p);
        }
    }

    /// Lowest and highest elevation, or `None` for an empty map.
    pub fn extent(&self) -> Option<(f32, f32)> {
        let mut it = self.cells.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Iterate over `(Point, elevation)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, f32)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

fn sized_bounds(width: usize, height: usize) -> Option<Range> {
    let w = i32::try_from(width).ok()?;
    let h = i32::try_from(height).ok()?;
    Some(Range::sized(w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_flat() {
        let hm = HeightMap::new(6, 3);
        assert_eq!(hm.width(), 6);
        assert_eq!(hm.height(), 3);
        assert!(hm.iter().all(|(_, h)| h == 0.0));
        assert_eq!(hm.iter().count(), 18);
    }

    #[test]
    fn test_set_and_at() {
        let mut hm = HeightMap::new(4, 4);
        hm.set(Point::new(2, 3), 1.5);
        assert_eq!(hm.at(Point::new(2, 3)), Some(1.5));
        assert_eq!(hm.at(Point::new(3, 2)), Some(0.0));
        assert_eq!(hm.at(Point::new(4, 0)), None);
        hm.set(Point::new(-1, 0), 9.0);
        assert_eq!(hm.extent(), Some((0.0, 1.5)));
    }

    #[test]
    fn test_from_fn() {
        let hm = HeightMap::from_fn(3, 2, |p| (p.x + 10 * p.y) as f32);
        assert_eq!(hm.at(Point::new(2, 1)), Some(12.0));
        assert_eq!(hm.at(Point::new(0, 0)), Some(0.0));
    }

    #[test]
    fn test_from_rows() {
        let hm = HeightMap::from_rows(&[[0.0f32, 1.0, 2.0], [3.0, 4.0, 5.0]]).unwrap();
        assert_eq!(hm.bounds(), Range::sized(3, 2));
        assert_eq!(hm.at(Point::new(1, 1)), Some(4.0));

        let ragged: Vec<Vec<f32>> = vec![vec![0.0, 1.0], vec![2.0]];
        assert!(HeightMap::from_rows(&ragged).is_none());

        let empty: [[f32; 0]; 0] = [];
        assert_eq!(
            HeightMap::from_rows(&empty).map(|hm| hm.bounds()),
            Some(Range::default())
        );
    }

    #[test]
    fn test_dimensions_must_fit_coordinates() {
        let max = i32::MAX as usize;
        assert_eq!(sized_bounds(max, 1), Some(Range::sized(i32::MAX, 1)));
        assert_eq!(sized_bounds(max + 1, 1), None);
        assert_eq!(sized_bounds(1, max + 1), None);
        assert_eq!(sized_bounds(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_fill_and_extent() {
        let mut hm = HeightMap::new(2, 2);
        hm.fill(3.0);
        assert_eq!(hm.extent(), Some((3.0, 3.0)));
        assert_eq!(HeightMap::new(0, 0).extent(), None);
    }
}
