use super::{require_positive, within, Coords, EqualityComparer};
use crate::error::GeometryError;

/// Tolerant equality for vectors and points with a constant hash.
///
/// Every value hashes to `0`, so hash tables degrade to a linear scan with
/// tolerant `equals`: correct, O(n) per lookup.
#[derive(Clone, Copy, Debug)]
pub struct TolerantEqualityComparer {
    tolerance: f64,
}

impl TolerantEqualityComparer {
    pub fn new(tolerance: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            tolerance: require_positive("tolerance", tolerance)?,
        })
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl<T: Coords> EqualityComparer<T> for TolerantEqualityComparer {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        within(a.coords(), b.coords(), self.tolerance)
    }
    #[inline]
    fn hash(&self, _value: &T) -> i32 {
        0
    }
}
