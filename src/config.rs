//! Mechanism for loading the demonstration's configuration

use lorentz_vector::Float;

use eyre::{ensure, eyre, Report, Result, WrapErr};

use std::{fs, str::FromStr};

/// Name of the configuration file used when none is given on the command line
pub const DEFAULT_FILE_NAME: &str = "lv-show.cfg";

/// Demonstration configuration
#[derive(Debug)]
pub struct Configuration {
    /// Sample particle given as (px, py, pz, E)
    pub cartesian: [Float; 4],

    /// Sample particle given as (pT, η, φ, M)
    pub cylindrical: [Float; 4],

    /// Factor applied to the first particle when combining both
    pub scale: Float,

    /// Maximal relative discrepancy accepted against the reference kinematics
    pub tolerance: Float,
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and print it out
    pub fn load(file_name: &str) -> Result<Self> {
        let config_str = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("Could not read {}", file_name))?;

        // Configuration items are the first non-whitespace chunk of text on
        // each line, anything after them is a comment. Blank lines are ignored.
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // This closure fetches the next configuration item, tagging it with
        // the name of the configuration field which it is supposed to fill to
        // ease error reporting, and handling unexpected end-of-file too.
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| eyre!("Missing configuration of {}", name))
        };

        // Decode the configuration items into concrete values
        let config = Configuration {
            cartesian: [
                next_item("px")?.parse()?,
                next_item("py")?.parse()?,
                next_item("pz")?.parse()?,
                next_item("e")?.parse()?,
            ],
            cylindrical: [
                next_item("pt")?.parse()?,
                next_item("eta")?.parse()?,
                next_item("phi")?.parse()?,
                next_item("m")?.parse()?,
            ],
            scale: next_item("scale")?.parse()?,
            tolerance: next_item("tolerance")?.parse()?,
        };

        config.print();

        // A non-positive tolerance would fail every comparison
        ensure!(
            config.tolerance > 0.,
            "The comparison tolerance must be positive, got {}",
            config.tolerance
        );

        Ok(config)
    }

    /// Display the configuration
    pub fn print(&self) {
        let [px, py, pz, e] = self.cartesian;
        let [pt, eta, phi, m] = self.cylindrical;
        println!("(px, py, pz, E)  : ({}, {}, {}, {})", px, py, pz, e);
        println!("(pT, eta, phi, M): ({}, {}, {}, {})", pt, eta, phi, m);
        println!("scale            : {}", self.scale);
        println!("tolerance        : {}", self.tolerance);
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .map_err(Report::new)
            .wrap_err_with(|| format!("Could not parse configuration of {}", self.name))
    }
}
