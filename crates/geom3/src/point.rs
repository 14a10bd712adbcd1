//! Absolute 3D position (`Point3D`).
//!
//! Points have no length or direction; the relational operation between two
//! points is distance. Exactness and undefined rules match `Vector3D`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::hash::mix;
use crate::vector::Vector3D;

/// Immutable point in R³.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
    #[serde(rename = "Z")]
    z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build from `[x, y, z]`; any other length is an invalid argument.
    pub fn from_slice(values: &[f64]) -> Result<Self, GeometryError> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(GeometryError::bad_length("values", 3, values.len())),
        }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Same coordinates, read as a direction from the origin.
    #[inline]
    pub fn to_vector(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite())
    }

    /// Squared euclidean distance (no square root).
    pub fn squared_distance_between(a: &Self, b: &Self) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dz = a.z - b.z;
        dx * dx + dy * dy + dz * dz
    }

    #[inline]
    pub fn distance_between(a: &Self, b: &Self) -> f64 {
        Self::squared_distance_between(a, b).sqrt()
    }

    #[inline]
    pub fn squared_distance_to(&self, other: &Self) -> f64 {
        Self::squared_distance_between(self, other)
    }

    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        Self::distance_between(self, other)
    }

    /// Arithmetic mean of `points`; `None` for an empty slice.
    pub fn centroid(points: &[Point3D]) -> Option<Point3D> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let sum = points
            .iter()
            .fold(Vector3D::ZERO, |acc, p| acc + p.to_vector());
        Some(Point3D::ORIGIN + sum / n)
    }

    /// Exact hash, same mixing scheme as [`Vector3D::hash_code`].
    #[inline]
    pub fn hash_code(&self) -> i32 {
        mix(&[self.x, self.y, self.z])
    }
}

impl Hash for Point3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl From<Point3D> for Vector3D {
    #[inline]
    fn from(p: Point3D) -> Self {
        p.to_vector()
    }
}

impl From<[f64; 3]> for Point3D {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[f64]> for Point3D {
    type Error = GeometryError;
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl From<nalgebra::Point3<f64>> for Point3D {
    #[inline]
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point3D> for nalgebra::Point3<f64> {
    #[inline]
    fn from(p: Point3D) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:6.3} {:6.3} {:6.3}]", self.x, self.y, self.z)
    }
}

/// Mirror through the origin.
impl Neg for Point3D {
    type Output = Point3D;
    #[inline]
    fn neg(self) -> Self::Output {
        Point3D::new(-self.x, -self.y, -self.z)
    }
}

impl Add<Vector3D> for Point3D {
    type Output = Point3D;
    #[inline]
    fn add(self, v: Vector3D) -> Self::Output {
        Point3D::new(self.x + v.x(), self.y + v.y(), self.z + v.z())
    }
}

/// Component-wise sum of two points (not a geometric operation, but convenient).
impl Add for Point3D {
    type Output = Point3D;
    #[inline]
    fn add(self, rhs: Point3D) -> Self::Output {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector3D> for Point3D {
    type Output = Point3D;
    #[inline]
    fn sub(self, v: Vector3D) -> Self::Output {
        Point3D::new(self.x - v.x(), self.y - v.y(), self.z - v.z())
    }
}

/// Component-wise difference; yields a point, not a vector.
impl Sub for Point3D {
    type Output = Point3D;
    #[inline]
    fn sub(self, rhs: Point3D) -> Self::Output {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_constructor_checks_length() {
        let p = Point3D::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(p, Point3D::new(1.0, 2.0, 3.0));
        for bad in [&[][..], &[1.0, 2.0][..], &[1.0, 2.0, 3.0, 4.0][..]] {
            match Point3D::try_from(bad) {
                Err(GeometryError::InvalidArgument { name, reason }) => {
                    assert_eq!(name, "values");
                    assert!(reason.contains(&bad.len().to_string()), "{reason}");
                }
                other => panic!("expected InvalidArgument, got {other:?}"),
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        let b = Point3D::new(4.0, 6.0, 3.0);
        assert_eq!(Point3D::squared_distance_between(&a, &b), 25.0);
        assert_eq!(a.squared_distance_to(&b), b.squared_distance_to(&a));
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(Point3D::distance_between(&b, &a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn operators() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let q = Point3D::new(0.5, -1.0, 2.0);
        let v = Vector3D::new(1.0, 1.0, 1.0);
        assert_eq!(p + v, Point3D::new(2.0, 3.0, 4.0));
        assert_eq!(p - v, Point3D::new(0.0, 1.0, 2.0));
        assert_eq!(p + q, Point3D::new(1.5, 1.0, 5.0));
        assert_eq!(p - q, Point3D::new(0.5, 3.0, 1.0));
        assert_eq!(-p, Point3D::new(-1.0, -2.0, -3.0));
        assert_eq!(-(-p), p);
    }

    #[test]
    fn converts_to_vector_keeping_coordinates() {
        let p = Point3D::new(1.5, -2.0, 3.25);
        let v: Vector3D = p.into();
        assert_eq!(v, Vector3D::new(1.5, -2.0, 3.25));
        assert_eq!(p.to_vector(), v);
    }

    #[test]
    fn undefined_detection() {
        assert!(!Point3D::new(1.0, 2.0, 3.0).is_undefined());
        assert!(Point3D::new(f64::NAN, 0.0, 0.0).is_undefined());
        assert!(Point3D::new(0.0, f64::NEG_INFINITY, 0.0).is_undefined());
        assert!(Point3D::new(0.0, 0.0, f64::INFINITY).is_undefined());
        assert!(!Point3D::new(f64::MAX, f64::MIN, 0.0).is_undefined());
    }

    #[test]
    fn exact_equality_and_hash() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        let b = Point3D::new(1.0, 2.0, 3.0);
        let c = Point3D::new(1.0, 2.0, 3.0 + 1e-12);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a, c);
        assert_ne!(a.hash_code(), c.hash_code());
        assert_eq!(
            Point3D::new(0.0, -0.0, 0.0).hash_code(),
            Point3D::ORIGIN.hash_code()
        );
    }

    #[test]
    fn centroid_of_cube_corners() {
        let pts: Vec<Point3D> = (0..8)
            .map(|i| {
                Point3D::new(
                    (i & 1) as f64 * 2.0,
                    ((i >> 1) & 1) as f64 * 2.0,
                    ((i >> 2) & 1) as f64 * 2.0,
                )
            })
            .collect();
        let c = Point3D::centroid(&pts).unwrap();
        assert_eq!(c, Point3D::new(1.0, 1.0, 1.0));
        assert!(Point3D::centroid(&[]).is_none());
    }

    #[test]
    fn display_matches_vector_format() {
        let p = Point3D::new(1.0, -2.5, 3.14159);
        assert_eq!(p.to_string(), "[ 1.000 -2.500  3.142]");
    }

    #[test]
    fn nalgebra_roundtrip() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let q: nalgebra::Point3<f64> = p.into();
        assert_eq!(Point3D::from(q), p);
    }
}
