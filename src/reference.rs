//! Independent reference kinematics, used to cross-check the library
//!
//! These formulas deliberately take a different road than the library: they
//! work on the raw nalgebra storage and go through the polar angle θ, as
//! textbooks do, so that a shared mistake is unlikely.

use lorentz_vector::{
    linalg::momentum::{Momentum, E, X, Y, Z},
    Float, FourVector,
};

/// Kinematic quantities which are compared against the library
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    /// Transverse momentum
    pub pt: Float,
    /// Pseudorapidity
    pub eta: Float,
    /// Azimuthal angle
    pub phi: Float,
    /// Invariant mass
    pub m: Float,
}
//
impl Kinematics {
    /// Compute the reference kinematics of a raw 4-momentum
    pub fn reference(p4: &Momentum) -> Self {
        let pt = p4[X].hypot(p4[Y]);
        let theta = pt.atan2(p4[Z]);
        let p = pt.hypot(p4[Z]);
        let m2 = (p4[E] - p) * (p4[E] + p);
        Self {
            pt,
            eta: -(theta / 2.).tan().ln(),
            phi: p4[Y].atan2(p4[X]),
            m: m2.signum() * m2.abs().sqrt(),
        }
    }

    /// Query the same quantities from the library
    pub fn library(v: &FourVector) -> lorentz_vector::Result<Self> {
        Ok(Self {
            pt: v.pt(),
            eta: v.eta()?,
            phi: v.phi(),
            m: v.m(),
        })
    }

    /// Pair up quantities with those of another set, for reporting
    pub fn zip(&self, other: &Self) -> [Comparison; 4] {
        [
            Comparison::new("Pt", self.pt, other.pt),
            Comparison::new("Eta", self.eta, other.eta),
            Comparison::new("Phi", self.phi, other.phi),
            Comparison::new("Mass", self.m, other.m),
        ]
    }
}

/// One quantity, as computed by the library and by the reference
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// Name of the quantity
    pub name: &'static str,
    /// Value from the library
    pub value: Float,
    /// Value from the reference
    pub reference: Float,
}
//
impl Comparison {
    fn new(name: &'static str, value: Float, reference: Float) -> Self {
        Self {
            name,
            value,
            reference,
        }
    }

    /// Relative discrepancy between both values, absolute below unity
    pub fn discrepancy(&self) -> Float {
        let magnitude = self.value.abs().max(self.reference.abs()).max(1.);
        (self.value - self.reference).abs() / magnitude
    }
}
