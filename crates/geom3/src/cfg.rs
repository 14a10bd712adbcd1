//! Numeric constants for 3D geometry (internal).
//!
//! Policy
//! - Fixed constants, no runtime knobs. Comparer tolerances and raster sizes
//!   are the only runtime configuration and are passed to their constructors.

/// Squared cross-product length below which `Matrix3D::rotate_between` treats
/// source and target as parallel and returns the identity.
pub(crate) const PARALLEL_EPS: f64 = 1e-20;

/// Initial value of the multiplicative hash mix.
pub(crate) const HASH_SEED: i32 = 17;
/// Multiplier applied before folding in each component.
pub(crate) const HASH_FACTOR: i32 = 23;

/// Bit offsets of the y/z raster cells in the packed raster hash (10 bits per axis).
pub(crate) const RASTER_SHIFT_Y: u32 = 10;
pub(crate) const RASTER_SHIFT_Z: u32 = 20;
