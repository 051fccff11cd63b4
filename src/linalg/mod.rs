//! Some shared linear algebra concepts

pub mod momentum;

/// Re-export of the nalgebra vector types in use
pub mod vecmat {
    pub use nalgebra::{SVector, Vector3};
}
