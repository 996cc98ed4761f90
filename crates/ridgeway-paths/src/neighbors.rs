use ridgeway_core::{Point, Range};

/// The eight unit offsets, in the order the pathfinder visits them.
///
/// Tie-breaking between equal-priority routes depends on this order.
pub const OFFSETS: [Point; 8] = [
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
];

/// Cached neighbor computation helper.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8-connected neighbors of `p` that lie inside `bounds`,
    /// in [`OFFSETS`] order.
    pub fn within(&mut self, p: Point, bounds: Range) -> &[Point] {
        self.buf.clear();
        for d in OFFSETS {
            let n = p + d;
            if bounds.contains(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
