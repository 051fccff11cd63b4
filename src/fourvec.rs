//! This module defines the four-vector type, its constructors, and the
//! kinematic quantities which can be derived from it

use crate::{
    error::{KinematicsError, Result},
    linalg::momentum::{self, Momentum, Spatial, E, X, Y, Z},
    numeric::{
        floats::consts::PI,
        functions::signed_sqrt,
        Float, PHYSICAL_TOLERANCE,
    },
};

use prefix_num_ops::real::*;
use tracing::debug;

use std::fmt::{self, Display};

/// Relativistic four-momentum of a particle
///
/// Stores the spatial momentum and the energy, nothing else. Every derived
/// quantity (pseudorapidity, azimuth, invariant mass...) is recomputed from
/// these on each call, and every transformation returns a new vector.
///
/// Vectors built through the public constructors have finite components and
/// satisfy |p| ≤ E + ε, where ε is `PHYSICAL_TOLERANCE`. Vectors produced by algebraic composition (scaling
/// by a negative number, subtraction...) are not re-checked.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourVector(Momentum);
//
impl FourVector {
    // ### CONSTRUCTION ###

    /// Build a four-vector from its Cartesian momentum and its energy
    pub fn from_cartesian(px: Float, py: Float, pz: Float, energy: Float) -> Result<Self> {
        Self::checked(Momentum::new(px, py, pz, energy))
    }

    /// Build a four-vector from its Cartesian momentum and its rest mass
    pub fn from_cartesian_mass(px: Float, py: Float, pz: Float, mass: Float) -> Result<Self> {
        Self::with_mass(Spatial::new(px, py, pz), mass)
    }

    /// Build a four-vector from (pT, η, φ) and its energy
    pub fn from_cylindrical(pt: Float, eta: Float, phi: Float, energy: Float) -> Result<Self> {
        let p = Self::cylindrical_momentum(pt, eta, phi)?;
        Self::checked(momentum::from_parts(&p, energy))
    }

    /// Build a four-vector from (pT, η, φ) and its rest mass
    pub fn from_cylindrical_mass(pt: Float, eta: Float, phi: Float, mass: Float) -> Result<Self> {
        let p = Self::cylindrical_momentum(pt, eta, phi)?;
        Self::with_mass(p, mass)
    }

    /// Wrap raw storage without any physicality check
    ///
    /// Reserved to algebraic operations, whose intermediate results are
    /// allowed to leave the mass shell.
    ///
    pub(crate) fn from_momentum(p4: Momentum) -> Self {
        Self(p4)
    }

    /// Reject vectors whose momentum exceeds their energy, or which are not
    /// made of finite numbers
    fn checked(p4: Momentum) -> Result<Self> {
        let result = Self(p4);
        // Written so that NaN components are rejected too
        let finite = p4.iter().all(|c| c.is_finite());
        if !(finite && result.p() <= result.e() + PHYSICAL_TOLERANCE) {
            debug!(?p4, "Rejecting unphysical four-vector");
            return Err(KinematicsError::NotPhysical {
                momentum: result.p(),
                energy: result.e(),
            });
        }
        Ok(result)
    }

    /// Complete a 3-momentum with the energy of a particle of a given mass
    ///
    /// A negative mass is read with the same signed convention as `m()`,
    /// that is as a negative squared mass, which has no physical meaning.
    ///
    fn with_mass(p: Spatial, mass: Float) -> Result<Self> {
        let mass2 = mass * mass.abs();
        if !(mass2 >= 0.) {
            debug!(?p, mass, "Rejecting tachyonic mass");
            return Err(KinematicsError::InvalidMass { mass2 });
        }
        let energy = p[X].hypot(p[Y]).hypot(p[Z]).hypot(mass.abs());
        Self::checked(momentum::from_parts(&p, energy))
    }

    /// Compute the 3-momentum matching some cylindrical coordinates
    fn cylindrical_momentum(pt: Float, eta: Float, phi: Float) -> Result<Spatial> {
        // Azimuth and pseudorapidity mean nothing without transverse momentum
        if !(pt > 0.) {
            debug!(pt, eta, phi, "Rejecting cylindrical coordinates");
            return Err(KinematicsError::ZeroTransverseMomentum { pt });
        }
        Ok(Spatial::new(pt * cos(phi), pt * sin(phi), pt * eta.sinh()))
    }

    // ### RAW COMPONENTS ###

    /// X component of the momentum
    #[inline]
    pub fn px(&self) -> Float {
        self.0[X]
    }

    /// Y component of the momentum
    #[inline]
    pub fn py(&self) -> Float {
        self.0[Y]
    }

    /// Z (beam axis) component of the momentum
    #[inline]
    pub fn pz(&self) -> Float {
        self.0[Z]
    }

    /// Energy
    #[inline]
    pub fn e(&self) -> Float {
        self.0[E]
    }

    /// Spatial momentum as a 3-vector
    #[inline]
    pub fn momentum(&self) -> Spatial {
        self.0.xyz()
    }

    /// Underlying (X, Y, Z, E) storage
    #[inline]
    pub fn components(&self) -> Momentum {
        self.0
    }

    // ### DERIVED QUANTITIES ###

    /// Squared norm of the 3-momentum
    pub fn p2(&self) -> Float {
        self.momentum().norm_squared()
    }

    /// Norm of the 3-momentum
    pub fn p(&self) -> Float {
        // Squaring would overflow long before the norm itself does
        self.px().hypot(self.py()).hypot(self.pz())
    }

    /// Squared transverse momentum
    pub fn pt2(&self) -> Float {
        self.px() * self.px() + self.py() * self.py()
    }

    /// Transverse momentum
    pub fn pt(&self) -> Float {
        sqrt(self.pt2())
    }

    /// Transverse energy, ET = E·pT/p
    pub fn et(&self) -> Result<Float> {
        let p2 = self.p2();
        if p2 == 0. {
            return Err(KinematicsError::ZeroMomentum);
        }
        Ok(sqrt(self.e() * self.e() * self.pt2() / p2))
    }

    /// Pseudorapidity, η = ½·ln((p + pz) / (p − pz))
    pub fn eta(&self) -> Result<Float> {
        let (p, pz) = (self.p(), self.pz());
        // Both p − pz and p + pz vanish on the beam axis
        if p == pz.abs() {
            return Err(KinematicsError::UndefinedPseudorapidity);
        }
        Ok(0.5 * ln((p + pz) / (p - pz)))
    }

    /// Azimuthal angle around the beam axis, in (−π, π]
    pub fn phi(&self) -> Float {
        let phi = self.py().atan2(self.px());
        // atan2 yields −π when py is a negative zero
        if phi == -PI {
            PI
        } else {
            phi
        }
    }

    /// Rapidity, y = ½·ln((E + pz) / (E − pz))
    pub fn rapidity(&self) -> Result<Float> {
        let (e, pz) = (self.e(), self.pz());
        let ratio = (e + pz) / (e - pz);
        if !(ratio > 0. && ratio.is_finite()) {
            return Err(KinematicsError::UndefinedRapidity);
        }
        Ok(0.5 * ln(ratio))
    }

    /// Lorentz scalar product, u·v = Eu·Ev − pu·pv
    pub fn dot(&self, other: &Self) -> Float {
        self.e() * other.e() - self.momentum().dot(&other.momentum())
    }

    /// Squared invariant mass, which is negative for spacelike vectors
    pub fn m2(&self) -> Float {
        self.dot(self)
    }

    /// Invariant mass, carrying the sign of `m2()`
    pub fn m(&self) -> Float {
        signed_sqrt(self.m2())
    }

    /// Squared transverse mass, i.e. `m2()` with pz set to zero
    pub fn mt2(&self) -> Float {
        self.e() * self.e() - self.pt2()
    }

    /// Transverse mass, carrying the sign of `mt2()`
    pub fn mt(&self) -> Float {
        signed_sqrt(self.mt2())
    }

    /// Azimuthal separation, folded into [0, π]
    pub fn delta_phi(&self, other: &Self) -> Float {
        (self.phi() - other.phi()).cos().acos()
    }

    /// Pseudorapidity separation
    pub fn delta_eta(&self, other: &Self) -> Result<Float> {
        Ok(self.eta()? - other.eta()?)
    }

    /// Angular distance in the (η, φ) plane
    pub fn delta_r(&self, other: &Self) -> Result<Float> {
        let deta = self.delta_eta(other)?;
        let dphi = self.delta_phi(other);
        Ok(sqrt(dphi * dphi + deta * deta))
    }

    /// Truth that |p| ≤ E, within numerical tolerance
    pub fn is_physical(&self) -> bool {
        self.p() <= self.e() + PHYSICAL_TOLERANCE
    }
}

impl Display for FourVector {
    /// Dump the Cartesian components along with the invariant mass
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "FourVector {{ Px: {}, Py: {}, Pz: {}, E: {}, M: {} }}",
            self.px(),
            self.py(),
            self.pz(),
            self.e(),
            self.m()
        )
    }
}
