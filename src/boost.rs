//! Lorentz boosts, i.e. changes of inertial reference frame

use crate::{
    error::{KinematicsError, Result},
    fourvec::FourVector,
    linalg::momentum::{self, Spatial},
};

use prefix_num_ops::real::*;
use tracing::debug;

impl FourVector {
    /// Velocity of the frame in which this vector is at rest, β = p/E
    pub fn boost_vector(&self) -> Result<Spatial> {
        let e = self.e();
        if e == 0. {
            return Err(KinematicsError::ZeroEnergy);
        }
        Ok(self.momentum() / e)
    }

    /// Apply a Lorentz boost of velocity β (|β| < 1), defined as
    ///
    /// ```text
    /// p' = p + [(γ − 1)/β² · (β·p) + γ·E]·β
    /// E' = γ·(E + β·p)
    /// ```
    ///
    /// A null β leaves the vector unchanged.
    ///
    pub fn apply_boost(&self, beta: &Spatial) -> Result<Self> {
        // Boosting at or beyond the speed of light is meaningless
        let beta2 = beta.norm_squared();
        if !(beta2 < 1.) {
            debug!(?beta, "Rejecting superluminal boost");
            return Err(KinematicsError::SuperluminalBoost { beta: sqrt(beta2) });
        }

        // Lorentz transformation parameters
        let (p, e) = (self.momentum(), self.e());
        let beta_dot_p = beta.dot(&p);
        let gamma = 1. / sqrt(1. - beta2);
        // (γ − 1)/β², using γ²β² = γ² − 1 to get rid of the 0/0 at β = 0
        let alpha = gamma * gamma / (1. + gamma);

        // Return the boosted 4-vector
        let p_boosted = p + beta * (alpha * beta_dot_p + gamma * e);
        let e_boosted = gamma * (e + beta_dot_p);
        Ok(Self::from_momentum(momentum::from_parts(
            &p_boosted, e_boosted,
        )))
    }

    /// Express this vector in the rest frame of another one
    pub fn to_rest_frame_of(&self, other: &Self) -> Result<Self> {
        self.apply_boost(&-other.boost_vector()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Float;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn tolerance() -> Float {
        Float::EPSILON.sqrt()
    }

    #[test]
    fn rest_frame_has_no_residual_boost() {
        let v = FourVector::from_cartesian(1., 2., 3., 4.).unwrap();
        let boost = v.boost_vector().unwrap();
        assert_eq!(boost, Spatial::new(0.25, 0.5, 0.75));

        let at_rest = v.apply_boost(&boost.scale(-1.)).unwrap();
        assert_abs_diff_eq!(
            at_rest.boost_vector().unwrap(),
            Spatial::zeros(),
            epsilon = tolerance()
        );
        assert_relative_eq!(at_rest.e(), v.m(), max_relative = tolerance());
        assert_eq!(v.to_rest_frame_of(&v).unwrap(), at_rest);
    }

    #[test]
    fn null_boost_is_identity() {
        let v = FourVector::from_cartesian(1., 2., 3., 4.).unwrap();
        assert_eq!(v.apply_boost(&Spatial::zeros()).unwrap(), v);

        // Tiny boosts must not blow up either
        let nudged = v.apply_boost(&Spatial::new(1e-30, 0., 0.)).unwrap();
        assert_relative_eq!(nudged.px(), v.px());
        assert_relative_eq!(nudged.e(), v.e());
    }

    #[test]
    fn boost_along_beam() {
        // Massive particle at rest, boosted to β = 0.6 along z (γ = 1.25)
        let v = FourVector::from_cartesian_mass(0., 0., 0., 2.).unwrap();
        let boosted = v.apply_boost(&Spatial::new(0., 0., 0.6)).unwrap();
        assert_relative_eq!(boosted.e(), 2.5, max_relative = tolerance());
        assert_relative_eq!(boosted.pz(), 1.5, max_relative = tolerance());
        assert_relative_eq!(boosted.m(), 2., max_relative = tolerance());
    }

    #[test]
    fn superluminal_boosts_are_rejected() {
        let v = FourVector::from_cartesian(1., 2., 3., 4.).unwrap();
        assert_eq!(
            v.apply_boost(&Spatial::new(1., 0., 0.)),
            Err(KinematicsError::SuperluminalBoost { beta: 1. })
        );
        assert!(matches!(
            v.apply_boost(&Spatial::new(0., 3., 4.)),
            Err(KinematicsError::SuperluminalBoost { .. })
        ));
        let err = v
            .apply_boost(&Spatial::new(Float::NAN, 0., 0.))
            .unwrap_err();
        assert!(matches!(err, KinematicsError::SuperluminalBoost { .. }));
        assert!(err.to_string().contains("is not strictly below 1"), "{err}");
    }

    #[test]
    fn photons_have_no_rest_frame() {
        let photon = FourVector::from_cartesian_mass(0., 0., 1., 0.).unwrap();
        let v = FourVector::from_cartesian(1., 2., 3., 4.).unwrap();
        assert!(matches!(
            v.to_rest_frame_of(&photon),
            Err(KinematicsError::SuperluminalBoost { .. })
        ));
        let nothing = v - v;
        assert_eq!(
            v.to_rest_frame_of(&nothing),
            Err(KinematicsError::ZeroEnergy)
        );
    }

    #[test]
    fn input_is_not_modified() {
        let v = FourVector::from_cartesian(1., 2., 3., 4.).unwrap();
        let copy = v;
        let _ = v.apply_boost(&Spatial::new(0.1, 0.2, 0.3)).unwrap();
        assert_eq!(v, copy);
    }
}
