//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `h0` in simulated seconds,
//! - gravitational constant `g`,
//! - close-pair threshold `min_sep`,
//! - optional trail length cap

/// One astronomical unit, meters
pub const AU: f64 = 149_597_870_700.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size, simulated seconds
    pub g: f64, // gravitational constant
    pub min_sep: f64, // pairs closer than this are skipped, meters
    pub trail_cap: Option<usize>, // trail length cap, None = unbounded
}
