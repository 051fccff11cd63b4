//! Lorentz vector: relativistic four-momenta for particle physics analysis
//!
//!
//! # Introduction (for the physicist)
//!
//! A particle leaving a collision is described by its four-momentum: a spatial
//! momentum p = (px, py, pz), where z is the beam axis, and an energy E. From
//! those, analyses routinely derive the transverse momentum pT, the
//! pseudorapidity η, the azimuth φ, the invariant mass M... and they combine
//! particles (a Z boson is the sum of its two leptons) or change reference
//! frame (a decay looks simpler in the rest frame of the parent).
//!
//! Detectors measure either Cartesian momenta or (pT, η, φ), and either the
//! energy or a mass hypothesis, which is why four constructors are provided.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Quite a few of these formulas have singularities: the pseudorapidity of a
//! particle flying along the beam, the transverse energy of a particle at
//! rest, a boost at the speed of light... These are reported as explicit
//! errors rather than NaNs, so that they cannot silently pollute a histogram.
//!
//! The invariant mass follows the usual convention of returning −√(−M²) for
//! spacelike vectors, which arise when subtracting four-momenta.
//!
//!
//! # Introduction (for the computer guy)
//!
//! [`FourVector`] is a small `Copy` value wrapping a nalgebra 4-vector. It is
//! never mutated: sums, scalings and boosts all produce new values, and all
//! derived quantities are recomputed on demand, so there is no cached state
//! which could go stale. It can be shared freely between threads.

#![warn(missing_docs)]

mod boost;
mod composition;
pub mod error;
mod fourvec;
pub mod linalg;
pub mod numeric;

pub use crate::{
    error::{KinematicsError, Result},
    fourvec::FourVector,
    linalg::momentum::{Momentum, Spatial},
    numeric::{Float, PHYSICAL_TOLERANCE},
};
