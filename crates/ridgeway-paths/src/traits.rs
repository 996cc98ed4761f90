use ridgeway_core::{HeightMap, Point, Range};

/// Read-only source of elevation samples for route planning.
///
/// A height field must not change while a search borrows it.
pub trait HeightField {
    /// The grid rectangle this field covers.
    fn bounds(&self) -> Range;

    /// Elevation at `p`. Only called for points inside [`bounds`](Self::bounds).
    fn height(&self, p: Point) -> f32;
}

impl HeightField for HeightMap {
    #[inline]
    fn bounds(&self) -> Range {
        HeightMap::bounds(self)
    }

    #[inline]
    fn height(&self, p: Point) -> f32 {
        self.at(p).unwrap_or(0.0)
    }
}

impl<F: HeightField + ?Sized> HeightField for &F {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn height(&self, p: Point) -> f32 {
        (**self).height(p)
    }
}
