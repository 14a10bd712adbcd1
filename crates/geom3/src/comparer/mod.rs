//! Equality policies over `Vector3D` and `Point3D`.
//!
//! Purpose
//! - Keep exact equality (the `==` on the value types) and tolerant or
//!   rasterized equality as separate, named policies instead of overloading
//!   one notion of "equal".
//! - Each policy is an immutable configuration object implementing
//!   [`EqualityComparer`]; [`ComparerSet`] and [`distinct`] consume them.
//!
//! Hash consistency (equal ⇒ same hash) per policy
//! - [`ExactComparer`]: consistent.
//! - [`Vector3DComparer`] / [`Point3DComparer`]: NOT consistent. Tolerant
//!   `equals`, exact `hash`; values within tolerance usually land in different
//!   buckets and are then never compared. Known limitation.
//! - [`TolerantEqualityComparer`]: consistent by brute force (constant hash,
//!   O(n) per lookup).
//! - [`RasterEqualityComparer`]: consistent; cells far from the centroid alias
//!   in the packed hash, which costs lookups, not correctness.

mod per_type;
mod raster;
mod set;
mod tolerant;

pub use per_type::{Point3DComparer, Vector3DComparer};
pub use raster::RasterEqualityComparer;
pub use set::{distinct, ComparerSet};
pub use tolerant::TolerantEqualityComparer;

use crate::error::GeometryError;
use crate::point::Point3D;
use crate::vector::Vector3D;

/// An `equals`/`hash` pair over `T`.
///
/// Implementations document whether `equals(a, b)` implies
/// `hash(a) == hash(b)`; not all of them guarantee it.
pub trait EqualityComparer<T> {
    fn equals(&self, a: &T, b: &T) -> bool;
    fn hash(&self, value: &T) -> i32;
}

impl<T, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &C {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }
    #[inline]
    fn hash(&self, value: &T) -> i32 {
        (**self).hash(value)
    }
}

/// Exact component-wise equality with the value's own hash code.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactComparer;

impl EqualityComparer<Vector3D> for ExactComparer {
    #[inline]
    fn equals(&self, a: &Vector3D, b: &Vector3D) -> bool {
        a == b
    }
    #[inline]
    fn hash(&self, value: &Vector3D) -> i32 {
        value.hash_code()
    }
}

impl EqualityComparer<Point3D> for ExactComparer {
    #[inline]
    fn equals(&self, a: &Point3D, b: &Point3D) -> bool {
        a == b
    }
    #[inline]
    fn hash(&self, value: &Point3D) -> i32 {
        value.hash_code()
    }
}

/// Coordinate access shared by the policies that treat vectors and points alike.
pub trait Coords {
    fn coords(&self) -> [f64; 3];
}

impl Coords for Vector3D {
    #[inline]
    fn coords(&self) -> [f64; 3] {
        self.to_array()
    }
}

impl Coords for Point3D {
    #[inline]
    fn coords(&self) -> [f64; 3] {
        self.to_array()
    }
}

/// `|a_i − b_i| ≤ tolerance` on every axis.
#[inline]
pub(crate) fn within(a: [f64; 3], b: [f64; 3], tolerance: f64) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Reject `value <= 0` (and NaN) for a named configuration parameter.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value > 0.0 {
        Ok(value)
    } else {
        tracing::debug!(name, value, "rejecting non-positive comparer parameter");
        Err(GeometryError::not_positive(name, value))
    }
}
