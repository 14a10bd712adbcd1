//! Per-type tolerant comparers with exact hashing.

use super::{require_positive, within, EqualityComparer};
use crate::error::GeometryError;
use crate::point::Point3D;
use crate::vector::Vector3D;

/// Tolerant `equals`, exact `hash` for vectors.
///
/// Not hash-consistent: two vectors within `tolerance` are equal here but
/// almost surely hash differently, so a hash table will usually keep both.
#[derive(Clone, Copy, Debug)]
pub struct Vector3DComparer {
    tolerance: f64,
}

impl Vector3DComparer {
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

impl EqualityComparer<Vector3D> for Vector3DComparer {
    #[inline]
    fn equals(&self, a: &Vector3D, b: &Vector3D) -> bool {
        within(a.to_array(), b.to_array(), self.tolerance)
    }
    #[inline]
    fn hash(&self, value: &Vector3D) -> i32 {
        value.hash_code()
    }
}

/// Tolerant `equals`, exact `hash` for points. Same caveat as [`Vector3DComparer`].
#[derive(Clone, Copy, Debug)]
pub struct Point3DComparer {
    tolerance: f64,
}

impl Point3DComparer {
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

impl EqualityComparer<Point3D> for Point3DComparer {
    #[inline]
    fn equals(&self, a: &Point3D, b: &Point3D) -> bool {
        within(a.to_array(), b.to_array(), self.tolerance)
    }
    #[inline]
    fn hash(&self, value: &Point3D) -> i32 {
        value.hash_code()
    }
}
