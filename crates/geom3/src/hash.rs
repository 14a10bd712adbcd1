//! Fixed multiplicative hash mix shared by `Vector3D`, `Point3D` and `Matrix3D`.
//!
//! `hash = ((17·23 + h(c0))·23 + h(c1))·23 + …` with wrapping `i32` arithmetic,
//! where `h(c)` folds the IEEE bits of a component into 32 bits.
//! Not collision resistant; fine for hash tables over typical coordinates.

use crate::cfg::{HASH_FACTOR, HASH_SEED};

/// Fold the 64 IEEE bits of `value` into 32 (`lo ^ hi`).
///
/// `-0.0` is mapped to `+0.0` first: the two compare equal, so they must hash equal.
#[inline]
pub(crate) fn component_hash(value: f64) -> i32 {
    let v = if value == 0.0 { 0.0 } else { value };
    let bits = v.to_bits();
    (bits as u32 ^ (bits >> 32) as u32) as i32
}

/// Mix a sequence of components into one hash code.
#[inline]
pub(crate) fn mix(components: &[f64]) -> i32 {
    components.iter().fold(HASH_SEED, |hash, &c| {
        let h = component_hash(c);
        hash.wrapping_mul(HASH_FACTOR).wrapping_add(h)
    })
}
