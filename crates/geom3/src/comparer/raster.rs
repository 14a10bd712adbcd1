//! Grid-cell equality (`RasterEqualityComparer`).
//!
//! Each coordinate maps to the integer cell `floor((v − c) / r)` for raster
//! size `r` and centroid axis `c`. Two values are equal iff all three cells
//! match. The hash packs the cells as `cx + (cy << 10) + (cz << 20)` in
//! wrapping `i32` arithmetic: equal cells give equal hashes, but cells outside
//! roughly `[-512, 511]` alias onto others. Re-centering on the data (see
//! `Point3D::centroid`) keeps typical inputs inside the unaliased window.
//!
//! Undefined values (any NaN or infinite coordinate) are never equal to
//! anything, themselves included, matching `NaN != NaN`. Their NaN axes map
//! to the sentinel cell `i32::MIN`.

use super::{require_positive, Coords, EqualityComparer};
use crate::cfg::{RASTER_SHIFT_Y, RASTER_SHIFT_Z};
use crate::error::GeometryError;
use crate::point::Point3D;

#[derive(Clone, Copy, Debug)]
pub struct RasterEqualityComparer {
    raster_size: f64,
    centroid: Point3D,
}

impl RasterEqualityComparer {
    /// Raster around the origin.
    pub fn new(raster_size: f64) -> Result<Self, GeometryError> {
        Self::with_centroid(raster_size, Point3D::ORIGIN)
    }

    /// Raster re-centered on `centroid`; only the cell computation uses it.
    pub fn with_centroid(raster_size: f64, centroid: Point3D) -> Result<Self, GeometryError> {
        Ok(Self {
            raster_size: require_positive("raster_size", raster_size)?,
            centroid,
        })
    }

    #[inline]
    pub fn raster_size(&self) -> f64 {
        self.raster_size
    }

    #[inline]
    pub fn centroid(&self) -> Point3D {
        self.centroid
    }

    /// Cell indices of a coordinate triple. Out-of-range quotients saturate;
    /// NaN maps to `i32::MIN`.
    pub fn cell<T: Coords>(&self, value: &T) -> [i32; 3] {
        let [x, y, z] = value.coords();
        [
            self.index(x, self.centroid.x()),
            self.index(y, self.centroid.y()),
            self.index(z, self.centroid.z()),
        ]
    }

    #[inline]
    fn index(&self, value: f64, center: f64) -> i32 {
        let q = ((value - center) / self.raster_size).floor();
        if q.is_nan() {
            return i32::MIN;
        }
        q as i32
    }
}

impl<T: Coords> EqualityComparer<T> for RasterEqualityComparer {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        defined(a) && defined(b) && self.cell(a) == self.cell(b)
    }

    #[inline]
    fn hash(&self, value: &T) -> i32 {
        let [cx, cy, cz] = self.cell(value);
        cx.wrapping_add(cy.wrapping_shl(RASTER_SHIFT_Y))
            .wrapping_add(cz.wrapping_shl(RASTER_SHIFT_Z))
    }
}

#[inline]
fn defined<T: Coords>(value: &T) -> bool {
    value.coords().iter().all(|c| c.is_finite())
}
