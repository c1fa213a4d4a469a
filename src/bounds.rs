/// Generic axis-aligned bounding box for N-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty set.
    pub fn from_points(points: &[[f64; D]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for p in rest {
            for i in 0..D {
                if p[i] < bounds.min[i] { bounds.min[i] = p[i]; }
                if p[i] > bounds.max[i] { bounds.max[i] = p[i]; }
            }
        }
        Some(bounds)
    }

    /// Returns true if the point lies inside the box, boundary included.
    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Extent of the box along `axis`.
    pub fn extent(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }
}
