//! Physical properties which must hold for any valid input, checked over a
//! reproducible stream of pseudo-random four-vectors

use approx::{assert_abs_diff_eq, assert_relative_eq};
use lorentz_vector::{numeric::floats::consts::PI, Float, FourVector, Spatial};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

/// Number of random configurations tried by each test
const NUM_TRIALS: usize = 10_000;

/// Test fixture generating random kinematic inputs
struct Generator {
    rng: Xoshiro256Plus,
}
//
impl Generator {
    fn new() -> Self {
        Self {
            rng: Xoshiro256Plus::seed_from_u64(12345),
        }
    }

    /// Random number in [min, max)
    fn uniform(&mut self, min: Float, max: Float) -> Float {
        min + (max - min) * self.rng.gen::<Float>()
    }

    /// Random massive particle
    fn particle(&mut self) -> FourVector {
        let [px, py, pz] = [(); 3].map(|()| self.uniform(-50., 50.));
        let mass = self.uniform(1., 50.);
        FourVector::from_cartesian_mass(px, py, pz, mass).unwrap()
    }

    /// Random velocity with |β| < 0.99
    fn velocity(&mut self) -> Spatial {
        let cos_theta = self.uniform(-1., 1.);
        let sin_theta = (1. - cos_theta * cos_theta).sqrt();
        let phi = self.uniform(-PI, PI);
        let norm = self.uniform(0., 0.99);
        Spatial::new(
            norm * sin_theta * phi.cos(),
            norm * sin_theta * phi.sin(),
            norm * cos_theta,
        )
    }
}

fn tolerance() -> Float {
    Float::EPSILON.sqrt()
}

#[test]
fn boosting_to_own_rest_frame_leaves_no_velocity() {
    let mut gen = Generator::new();
    for _ in 0..NUM_TRIALS {
        let v = gen.particle();
        let at_rest = v.apply_boost(&v.boost_vector().unwrap().scale(-1.)).unwrap();
        assert_abs_diff_eq!(
            at_rest.boost_vector().unwrap(),
            Spatial::zeros(),
            epsilon = tolerance() * v.e() / v.m()
        );
    }
}

#[test]
fn sums_of_physical_vectors_are_physical() {
    let mut gen = Generator::new();
    for _ in 0..NUM_TRIALS {
        let (v1, v2) = (gen.particle(), gen.particle());
        let sum = v1 + v2;
        assert!(sum.is_physical(), "{v1} + {v2} = {sum}");
        assert!(sum.m2() >= 0.);
    }
}

#[test]
fn mass_is_boost_invariant() {
    let mut gen = Generator::new();
    for _ in 0..NUM_TRIALS {
        let v = gen.particle();
        let beta = gen.velocity();
        let boosted = v.apply_boost(&beta).unwrap();
        // Rounding errors on E² − p² scale with E², not with M²
        let scale = v.e() * v.e() + boosted.e() * boosted.e();
        assert_abs_diff_eq!(boosted.m2(), v.m2(), epsilon = tolerance() * scale);
        assert!(boosted.is_physical());
    }
}

#[test]
fn boosts_compose_with_their_inverse() {
    let mut gen = Generator::new();
    for _ in 0..NUM_TRIALS {
        let v = gen.particle();
        let beta = gen.velocity();
        let round_trip = v.apply_boost(&beta).unwrap().apply_boost(&-beta).unwrap();
        let scale = 1. / (1. - beta.norm_squared());
        let eps = tolerance() * scale * v.e();
        assert_abs_diff_eq!(round_trip.components(), v.components(), epsilon = eps);
    }
}

#[test]
fn delta_phi_stays_in_range() {
    let mut gen = Generator::new();
    for _ in 0..NUM_TRIALS {
        let phi1 = gen.uniform(-10., 10.);
        let phi2 = gen.uniform(-10., 10.);
        let v1 = FourVector::from_cylindrical(1., 0., phi1, 2.).unwrap();
        let v2 = FourVector::from_cylindrical(1., 0., phi2, 2.).unwrap();
        let dphi = v1.delta_phi(&v2);
        assert!((0. ..=PI).contains(&dphi), "dphi = {dphi}");
        assert_relative_eq!(dphi, v2.delta_phi(&v1));
    }
}

#[test]
fn invariants_match_cylindrical_inputs() {
    let mut gen = Generator::new();
    for _ in 0..NUM_TRIALS {
        let pt = gen.uniform(0.5, 100.);
        let eta = gen.uniform(-4., 4.);
        let phi = gen.uniform(-PI, PI);
        let mass = gen.uniform(0., 100.);
        let v = FourVector::from_cylindrical_mass(pt, eta, phi, mass).unwrap();
        assert_relative_eq!(v.pt(), pt, max_relative = tolerance());
        assert_abs_diff_eq!(v.eta().unwrap(), eta, epsilon = tolerance());
        assert_abs_diff_eq!(v.phi(), phi, epsilon = tolerance());
        assert!(v.is_physical());
    }
}
