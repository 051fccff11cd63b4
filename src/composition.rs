//! Algebraic composition of four-vectors
//!
//! None of these operations checks physicality. Sums of physical vectors are
//! physical anyway, and the other operations are routinely used to build
//! intermediate quantities (negated velocities, missing momenta...) which need
//! not lie on any mass shell.

use crate::{fourvec::FourVector, numeric::Float};

use std::ops::{Add, Mul, Neg, Sub};

impl FourVector {
    /// Multiply momentum and energy by the same factor
    pub fn scale(&self, factor: Float) -> Self {
        Self::from_momentum(self.components() * factor)
    }
}

impl Add for FourVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_momentum(self.components() + rhs.components())
    }
}

impl Sub for FourVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_momentum(self.components() - rhs.components())
    }
}

impl Neg for FourVector {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.)
    }
}

impl Mul<Float> for FourVector {
    type Output = Self;

    fn mul(self, factor: Float) -> Self {
        self.scale(factor)
    }
}
