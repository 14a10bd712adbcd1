//! 3×3 linear transforms (`Matrix3D`).
//!
//! Layout (row-major):
//! ```text
//! [ m11 m12 m13 ]
//! [ m21 m22 m23 ]
//! [ m31 m32 m33 ]
//! ```
//! Matrices act on vectors and points from the left: `(M·v)_i = row_i · v`.
//!
//! Rotation
//! - `rotate(axis, θ)`: Rodrigues, `R = I cosθ + (1−cosθ) u⊗u + sinθ [u]×`.
//! - `rotate_between(s, t)`: axis `s × t`, angle `inner_angle(s, t)`. Nearly
//!   parallel inputs (`|s × t|² < PARALLEL_EPS`) yield the identity instead of
//!   normalizing a vanishing axis.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::cfg::PARALLEL_EPS;
use crate::error::GeometryError;
use crate::hash::mix;
use crate::point::Point3D;
use crate::vector::Vector3D;

/// Immutable 3×3 matrix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Matrix3D {
    m11: f64,
    m12: f64,
    m13: f64,
    m21: f64,
    m22: f64,
    m23: f64,
    m31: f64,
    m32: f64,
    m33: f64,
}

impl Matrix3D {
    pub const IDENTITY: Matrix3D = Matrix3D::from_diagonal(1.0);
    pub const UNDEFINED: Matrix3D = Matrix3D::new(
        f64::NAN, f64::NAN, f64::NAN, //
        f64::NAN, f64::NAN, f64::NAN, //
        f64::NAN, f64::NAN, f64::NAN,
    );

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m11: f64,
        m12: f64,
        m13: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> Self {
        Self {
            m11,
            m12,
            m13,
            m21,
            m22,
            m23,
            m31,
            m32,
            m33,
        }
    }

    /// `d · I`.
    #[inline]
    pub const fn from_diagonal(d: f64) -> Self {
        Self::new(d, 0.0, 0.0, 0.0, d, 0.0, 0.0, 0.0, d)
    }

    /// Build from 9 values in row-major order.
    pub fn from_row_major(values: &[f64]) -> Result<Self, GeometryError> {
        match *values {
            [m11, m12, m13, m21, m22, m23, m31, m32, m33] => {
                Ok(Self::new(m11, m12, m13, m21, m22, m23, m31, m32, m33))
            }
            _ => Err(GeometryError::bad_length("row_major", 9, values.len())),
        }
    }

    /// Build from a nested 3×3 sequence (`rows[i][j]` is row `i+1`, column `j+1`).
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GeometryError> {
        if rows.len() != 3 {
            return Err(GeometryError::bad_length("rows", 3, rows.len()));
        }
        let mut flat = [0.0; 9];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != 3 {
                return Err(GeometryError::bad_length("rows[i]", 3, row.len()));
            }
            flat[3 * i..3 * i + 3].copy_from_slice(row);
        }
        Self::from_row_major(&flat)
    }

    /// Diagonal scaling matrix.
    #[inline]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, sz)
    }

    /// Rotation by `theta` radians about `axis` (right-hand rule).
    ///
    /// Points on the axis are fixed. Fails if `axis` has zero length.
    pub fn rotate(axis: &Vector3D, theta: f64) -> Result<Self, GeometryError> {
        let u = axis.normalized()?;
        let (ux, uy, uz) = (u.x(), u.y(), u.z());
        let (sin, cos) = theta.sin_cos();
        let k = 1.0 - cos;
        Ok(Self::new(
            cos + ux * ux * k,
            ux * uy * k - uz * sin,
            ux * uz * k + uy * sin,
            uy * ux * k + uz * sin,
            cos + uy * uy * k,
            uy * uz * k - ux * sin,
            uz * ux * k - uy * sin,
            uz * uy * k + ux * sin,
            cos + uz * uz * k,
        ))
    }

    /// Rotation taking the direction of `source` onto the direction of `target`.
    ///
    /// Returns `IDENTITY` when the two are (anti)parallel within `PARALLEL_EPS`;
    /// this includes `source == target`. Fails if either has zero length.
    pub fn rotate_between(source: &Vector3D, target: &Vector3D) -> Result<Self, GeometryError> {
        let s = source.normalized()?;
        let t = target.normalized()?;
        let axis = s.cross(&t);
        let axis_l2 = axis.squared_length();
        if axis_l2 < PARALLEL_EPS {
            tracing::trace!(axis_l2, "rotate_between: parallel inputs, identity");
            return Ok(Self::IDENTITY);
        }
        let theta = Vector3D::inner_angle(&s, &t);
        Self::rotate(&axis, theta)
    }

    #[inline]
    pub const fn m11(&self) -> f64 {
        self.m11
    }
    #[inline]
    pub const fn m12(&self) -> f64 {
        self.m12
    }
    #[inline]
    pub const fn m13(&self) -> f64 {
        self.m13
    }
    #[inline]
    pub const fn m21(&self) -> f64 {
        self.m21
    }
    #[inline]
    pub const fn m22(&self) -> f64 {
        self.m22
    }
    #[inline]
    pub const fn m23(&self) -> f64 {
        self.m23
    }
    #[inline]
    pub const fn m31(&self) -> f64 {
        self.m31
    }
    #[inline]
    pub const fn m32(&self) -> f64 {
        self.m32
    }
    #[inline]
    pub const fn m33(&self) -> f64 {
        self.m33
    }

    /// True if any entry is NaN or infinite.
    pub fn is_undefined(&self) -> bool {
        !self.to_row_major().iter().all(|v| v.is_finite())
    }

    /// Cofactor expansion.
    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 * self.m33 - self.m11 * self.m23 * self.m32
            + self.m21 * self.m32 * self.m13
            - self.m21 * self.m12 * self.m33
            + self.m31 * self.m12 * self.m23
            - self.m31 * self.m22 * self.m13
    }

    pub fn transposed(&self) -> Self {
        Self::new(
            self.m11, self.m21, self.m31, //
            self.m12, self.m22, self.m32, //
            self.m13, self.m23, self.m33,
        )
    }

    /// Row `index` (1-based).
    pub fn row(&self, index: usize) -> Result<Vector3D, GeometryError> {
        match index {
            1 => Ok(Vector3D::new(self.m11, self.m12, self.m13)),
            2 => Ok(Vector3D::new(self.m21, self.m22, self.m23)),
            3 => Ok(Vector3D::new(self.m31, self.m32, self.m33)),
            _ => Err(GeometryError::IndexOutOfRange { index }),
        }
    }

    /// Column `index` (1-based).
    pub fn column(&self, index: usize) -> Result<Vector3D, GeometryError> {
        match index {
            1 => Ok(Vector3D::new(self.m11, self.m21, self.m31)),
            2 => Ok(Vector3D::new(self.m12, self.m22, self.m32)),
            3 => Ok(Vector3D::new(self.m13, self.m23, self.m33)),
            _ => Err(GeometryError::IndexOutOfRange { index }),
        }
    }

    pub fn to_row_major(&self) -> [f64; 9] {
        [
            self.m11, self.m12, self.m13, //
            self.m21, self.m22, self.m23, //
            self.m31, self.m32, self.m33,
        ]
    }

    pub fn to_column_major(&self) -> [f64; 9] {
        self.transposed().to_row_major()
    }

    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        [
            [self.m11, self.m12, self.m13],
            [self.m21, self.m22, self.m23],
            [self.m31, self.m32, self.m33],
        ]
    }

    /// Exact hash over all nine entries (same mix as `Vector3D`).
    #[inline]
    pub fn hash_code(&self) -> i32 {
        mix(&self.to_row_major())
    }

    #[inline]
    fn apply(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        (
            x * self.m11 + y * self.m12 + z * self.m13,
            x * self.m21 + y * self.m22 + z * self.m23,
            x * self.m31 + y * self.m32 + z * self.m33,
        )
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        let m = self.to_row_major().map(f);
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8])
    }

    fn zip(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.to_row_major();
        let b = other.to_row_major();
        let m: [f64; 9] = std::array::from_fn(|i| f(a[i], b[i]));
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8])
    }
}

impl Hash for Matrix3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl From<[[f64; 3]; 3]> for Matrix3D {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = rows;
        Self::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
    }
}

impl From<nalgebra::Matrix3<f64>> for Matrix3D {
    fn from(m: nalgebra::Matrix3<f64>) -> Self {
        Self::new(
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            m[(2, 0)],
            m[(2, 1)],
            m[(2, 2)],
        )
    }
}

impl From<Matrix3D> for nalgebra::Matrix3<f64> {
    fn from(m: Matrix3D) -> Self {
        nalgebra::Matrix3::from_row_slice(&m.to_row_major())
    }
}

impl fmt::Display for Matrix3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{:6.3} {:6.3} {:6.3}]", self.m11, self.m12, self.m13)?;
        writeln!(f, "[{:6.3} {:6.3} {:6.3}]", self.m21, self.m22, self.m23)?;
        write!(f, "[{:6.3} {:6.3} {:6.3}]", self.m31, self.m32, self.m33)
    }
}

impl Neg for Matrix3D {
    type Output = Matrix3D;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl Add for Matrix3D {
    type Output = Matrix3D;
    #[inline]
    fn add(self, rhs: Matrix3D) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Matrix3D {
    type Output = Matrix3D;
    #[inline]
    fn sub(self, rhs: Matrix3D) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul<f64> for Matrix3D {
    type Output = Matrix3D;
    #[inline]
    fn mul(self, s: f64) -> Self::Output {
        self.map(|v| v * s)
    }
}

impl Mul<Matrix3D> for f64 {
    type Output = Matrix3D;
    #[inline]
    fn mul(self, m: Matrix3D) -> Self::Output {
        m.map(|v| self * v)
    }
}

impl Mul<Vector3D> for Matrix3D {
    type Output = Vector3D;
    #[inline]
    fn mul(self, v: Vector3D) -> Self::Output {
        let (x, y, z) = self.apply(v.x(), v.y(), v.z());
        Vector3D::new(x, y, z)
    }
}

impl Mul<Point3D> for Matrix3D {
    type Output = Point3D;
    #[inline]
    fn mul(self, p: Point3D) -> Self::Output {
        let (x, y, z) = self.apply(p.x(), p.y(), p.z());
        Point3D::new(x, y, z)
    }
}

impl Mul for Matrix3D {
    type Output = Matrix3D;
    fn mul(self, b: Matrix3D) -> Self::Output {
        let a = self;
        Matrix3D::new(
            a.m11 * b.m11 + a.m12 * b.m21 + a.m13 * b.m31,
            a.m11 * b.m12 + a.m12 * b.m22 + a.m13 * b.m32,
            a.m11 * b.m13 + a.m12 * b.m23 + a.m13 * b.m33,
            a.m21 * b.m11 + a.m22 * b.m21 + a.m23 * b.m31,
            a.m21 * b.m12 + a.m22 * b.m22 + a.m23 * b.m32,
            a.m21 * b.m13 + a.m22 * b.m23 + a.m23 * b.m33,
            a.m31 * b.m11 + a.m32 * b.m21 + a.m33 * b.m31,
            a.m31 * b.m12 + a.m32 * b.m22 + a.m33 * b.m32,
            a.m31 * b.m13 + a.m32 * b.m23 + a.m33 * b.m33,
        )
    }
}
