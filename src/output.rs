//! This module is in charge of printing the demonstration's results

use crate::reference::Comparison;

use lorentz_vector::{Float, FourVector, Spatial};

/// Print a section title, underlined
pub fn section(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "=".repeat(title.chars().count()));
}

/// Print a labelled four-vector
pub fn vector(label: &str, v: &FourVector) {
    println!();
    println!("{}: {}", label, v);
}

/// Print the velocity left after boosting a particle into its rest frame
pub fn residual_boost(beta: &Spatial) {
    println!();
    println!(
        "Check the boost is (0, 0, 0) in the particle rest frame: ({}, {}, {})",
        beta.x, beta.y, beta.z
    );
}

/// Print the library and reference values side by side
pub fn comparisons(comparisons: &[Comparison], tolerance: Float) {
    for c in comparisons {
        let flag = if c.discrepancy() > tolerance { "  <-- MISMATCH" } else { "" };
        println!(
            "{:<5}: lv= {:<22} vs reference= {:<22}{}",
            c.name, c.value, c.reference, flag
        );
    }
}
