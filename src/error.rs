//! Failure modes of four-vector construction and kinematics

use crate::numeric::Float;

use thiserror::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, KinematicsError>;

/// Everything that can go wrong when building or using a four-vector
///
/// All of these are deterministic functions of the input, so there is no
/// point in retrying: callers must either supply different numbers or give up.
///
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    /// The spatial momentum exceeds the energy beyond numerical tolerance, or
    /// some component is not a finite number
    #[error("Lorentz vector not physical: |p| = {momentum} > E = {energy}")]
    NotPhysical {
        /// Norm of the offending spatial momentum
        momentum: Float,
        /// Offending energy
        energy: Float,
    },

    /// A mass-based constructor was given a negative (or NaN) squared mass
    #[error("Invalid mass: m² = {mass2} is not a non-negative number")]
    InvalidMass {
        /// Squared mass which was supplied
        mass2: Float,
    },

    /// A cylindrical constructor was given pT ≤ 0
    #[error("Transverse momentum must be positive, got pT = {pt}")]
    ZeroTransverseMomentum {
        /// Transverse momentum which was supplied
        pt: Float,
    },

    /// Pseudorapidity of a purely longitudinal vector (|p| = |pz|)
    #[error("Pseudorapidity is undefined for a purely longitudinal vector")]
    UndefinedPseudorapidity,

    /// Rapidity of a vector for which (E + pz)/(E − pz) is not a positive
    /// finite number: on or beyond the light cone along the beam axis
    #[error("Rapidity is undefined when (E + pz)/(E - pz) is not positive and finite")]
    UndefinedRapidity,

    /// Transverse energy of a vector with zero spatial momentum
    #[error("Transverse energy is undefined at zero momentum")]
    ZeroMomentum,

    /// Velocity of a vector with zero energy
    #[error("Boost velocity is undefined at zero energy")]
    ZeroEnergy,

    /// Boost at or beyond the speed of light, or with a NaN velocity
    #[error("Boost not physical: |beta| = {beta} is not strictly below 1")]
    SuperluminalBoost {
        /// Norm of the offending velocity
        beta: Float,
    },
}
