//! lv-show: a tour of the lorentz_vector library
//!
//! Builds a couple of sample particles from the configuration file, combines
//! them, boosts one of them into its own rest frame, and cross-checks the
//! library's kinematics against an independent reference implementation.
//!
//! The configuration file is `lv-show.cfg` in the working directory, unless
//! another path is given as the first command-line argument. Diagnostics are
//! logged to stderr, with verbosity controlled by `RUST_LOG`.

#![warn(missing_docs)]

mod config;
mod output;
mod reference;

use crate::{
    config::{Configuration, DEFAULT_FILE_NAME},
    reference::Kinematics,
};

use eyre::{ensure, Result, WrapErr};
use lorentz_vector::{Float, FourVector};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // ### LOGGING SETUP ###

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // ### CONFIGURATION READOUT ###

    let file_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_owned());
    info!(%file_name, "Loading configuration");
    let cfg = Configuration::load(&file_name).wrap_err("Failed to load the configuration")?;

    // ### QUICK CHECKS ###

    output::section("Printing some 4-vector manipulations");
    quick_test(&cfg).wrap_err("Failed to manipulate the sample particles")?;

    // ### CROSS-CHECK ###

    output::section("Comparison with the reference kinematics");
    check_against_reference(&cfg).wrap_err("Failed to cross-check the library")?;

    Ok(())
}

/// Build, combine and boost the sample particles
fn quick_test(cfg: &Configuration) -> Result<()> {
    // Create an object using (px, py, pz, E)
    let [px, py, pz, e] = cfg.cartesian;
    let vec1 = FourVector::from_cartesian(px, py, pz, e)?;
    output::vector("Vec1", &vec1);

    // Using now (pT, eta, phi, M)
    let [pt, eta, phi, m] = cfg.cylindrical;
    let vec2 = FourVector::from_cylindrical_mass(pt, eta, phi, m)?;
    output::vector("Vec2", &vec2);

    // Combination of 4-vectors scale*v1 + (v2 + v1)
    let vec_sum = vec1.scale(cfg.scale) + (vec2 + vec1);
    output::vector("Vec[sum]", &vec_sum);

    // Boost vec1 and check that the boost is (0, 0, 0) in its rest frame
    let boost = vec1.boost_vector()?;
    let vec1_rf = vec1.apply_boost(&boost.scale(-1.))?;
    debug!(%vec1_rf, "Boosted into the rest frame");
    output::residual_boost(&vec1_rf.boost_vector()?);

    Ok(())
}

/// Compare pT, eta, phi and M of the first sample against the reference
fn check_against_reference(cfg: &Configuration) -> Result<()> {
    let [px, py, pz, e] = cfg.cartesian;
    let v = FourVector::from_cartesian(px, py, pz, e)?;
    let library = Kinematics::library(&v)?;
    let reference = Kinematics::reference(&v.components());

    let comparisons = library.zip(&reference);
    output::comparisons(&comparisons, cfg.tolerance);

    let worst = comparisons
        .iter()
        .map(|c| c.discrepancy())
        .fold(0., |acc: Float, d| acc.max(d));
    info!(worst, "Largest discrepancy with the reference");
    ensure!(
        worst <= cfg.tolerance,
        "Library and reference disagree by {} (tolerance {})",
        worst,
        cfg.tolerance
    );
    Ok(())
}
