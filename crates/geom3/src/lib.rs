//! Immutable 3D value types and equality policies.
//!
//! - [`Vector3D`]: direction with magnitude.
//! - [`Point3D`]: absolute position; distance between points.
//! - [`Matrix3D`]: 3×3 linear transform, incl. axis–angle rotations.
//! - [`comparer`]: exact, tolerant and rasterized equals/hash policies for
//!   hash-based grouping and deduplication.
//!
//! All types are `Copy`, never mutated after construction, and safe to share
//! across threads. Exact `==` never applies a tolerance; pick a comparer for that.
//!
//! `Vector3D / 0.0` panics like integer division. Use [`Vector3D::try_div`]
//! to get `GeometryError::DivideByZero` instead.

mod cfg;
pub mod comparer;
pub mod error;
mod hash;
pub mod matrix;
pub mod point;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeometryError;
pub use matrix::Matrix3D;
pub use point::Point3D;
pub use vector::Vector3D;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::comparer::{
        distinct, ComparerSet, Coords, EqualityComparer, ExactComparer, Point3DComparer,
        RasterEqualityComparer, TolerantEqualityComparer, Vector3DComparer,
    };
    pub use crate::{GeometryError, Matrix3D, Point3D, Vector3D};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_covers_a_dedup_pipeline() {
        let m = Matrix3D::rotate(&Vector3D::Z_AXIS, 0.0).unwrap();
        let pts = [Point3D::new(1.0, 2.0, 3.0), m * Point3D::new(1.0, 2.0, 3.0)];
        assert_eq!(distinct(pts, &ExactComparer).len(), 1);
        let raster = RasterEqualityComparer::new(1.0).unwrap();
        let mut set = ComparerSet::new(raster);
        assert!(set.insert(pts[0]));
        assert!(matches!(
            Vector3D::X_AXIS.try_div(0.0),
            Err(GeometryError::DivideByZero)
        ));
    }
}
