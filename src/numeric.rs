//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

// Floating-point precision is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as floats;
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as floats;

/// Amount by which |p| may exceed E before a four-vector is deemed unphysical
pub const PHYSICAL_TOLERANCE: Float = 1e-6;

/// Mathematical functions
pub mod functions {
    use super::Float;
    use prefix_num_ops::real::*;

    /// Square root which preserves the sign of its argument
    ///
    /// Used for invariant masses, where a negative squared mass flags a
    /// spacelike combination that downstream code wants to tell apart from a
    /// timelike one rather than see as an error.
    ///
    pub fn signed_sqrt(x: Float) -> Float {
        if x < 0. {
            -sqrt(-x)
        } else {
            sqrt(x)
        }
    }
}
