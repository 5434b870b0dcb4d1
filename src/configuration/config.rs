//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ViewConfig`]       – window size, world-to-screen scale, physics rate
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! view:
//!   width: 2200.0           # window width, pixels
//!   height: 2100.0          # window height, pixels
//!   pixels_per_au: 625.0    # 1 AU on screen
//!   steps_per_second: 60.0  # fixed physics rate
//!
//! parameters:
//!   g: 6.67408e-11          # gravitational constant
//!   h0: 10080.0             # simulated seconds per step
//!   min_sep: 1.0            # skip pairs closer than this, meters
//!   trail_cap: 4096         # orbit trail length cap
//!
//! bodies:
//!   - name: Sun
//!     x: [ 0.0, 0.0 ]       # meters
//!     v: [ 0.0, 0.0 ]       # m/s
//!     m: 1.98892e30         # kg
//!     radius: 160.0         # pixels, display only
//!     color: [ 200, 200, 20 ]
//!     reference: true       # anchor of the distance display
//!     labeled: false        # no name/distance text
//!   - name: Earth
//!     x: [ -1.4959787e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 100, 149, 237 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Window and scale settings for the 2D viewer
#[derive(Deserialize, Debug)]
pub struct ViewConfig {
    pub width: f32, // window width in pixels
    pub height: f32, // window height in pixels
    pub pixels_per_au: f64, // world-to-screen scale, pixels per AU
    pub steps_per_second: f64, // physics steps per wall-clock second
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64, // gravitational constant
    pub h0: f64, // step size, simulated seconds
    pub min_sep: Option<f64>, // close-pair skip threshold, meters
    pub trail_cap: Option<usize>, // orbit trail length cap, omit for unbounded
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // display name
    pub x: [f64; 2], // initial position in meters
    pub v: [f64; 2], // initial velocity in m/s
    pub m: f64, // mass of the body, kg
    pub radius: f64, // display radius, pixels
    pub color: [u8; 3], // display color (sRGB)
    #[serde(default)]
    pub reference: bool, // body anchoring the displayed distance metric
    #[serde(default = "default_labeled")]
    pub labeled: bool, // draw name/distance text for this body
}

fn default_labeled() -> bool {
    true
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub view: ViewConfig, // window and scale settings
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state of the system
}
