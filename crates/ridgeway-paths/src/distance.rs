use ridgeway_core::Point;

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Straight-line distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    (a - b).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(chebyshev(b, a), 4);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(euclidean(a, a), 0.0);
    }
}
