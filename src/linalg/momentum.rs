//! This module implements the storage layout of relativistic 4-momenta

use crate::{linalg::vecmat::*, numeric::Float};

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Raw relativistic 4-momentum storage, in (X, Y, Z, E) order
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Spatial 3-vector, used both for 3-momenta and boost velocities
pub type Spatial = Vector3<Float>;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Assemble a 4-momentum from its spatial part and its energy
pub fn from_parts(p: &Spatial, e: Float) -> Momentum {
    Momentum::new(p[X], p[Y], p[Z], e)
}
