//! Force / acceleration contributors for the planetary engine
//!
//! Defines the 2D acceleration trait, the direct pairwise Newtonian
//! gravity term, and the `newtonian_force` pair kernel it is built on

use log::trace;

use crate::simulation::states::{Body, NVec2, System};

/// Collection of 2D acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for 2D acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Gravitational force `on` experiences due to `from`
///
/// Magnitude `g * m1 * m2 / r^2`, directed along the displacement from
/// `on` toward `from`. Pairs closer than `min_sep` contribute nothing,
/// which keeps the result finite when two bodies occupy the same point
pub fn newtonian_force(on: &Body, from: &Body, g: f64, min_sep: f64) -> NVec2 {
    // r is the displacement vector from `on` to `from`;
    // the pull on `on` points along +r
    let r = from.x - on.x;

    // Squared separation distance |r|^2
    let r2 = r.dot(&r);

    // Close-pair policy: skip the pair instead of dividing by ~zero
    if r2 < min_sep * min_sep {
        trace!("skipping close pair {} / {}", on.name, from.name);
        return NVec2::zeros();
    }

    // 1 / |r|
    let inv_r = r2.sqrt().recip();

    // 1 / |r|^3
    // (F = g m1 m2 / |r|^2 along r-hat, written as a vector:
    //   F = g m1 m2 r / |r|^3 )
    let inv_r3 = inv_r * inv_r * inv_r;

    g * on.m * from.m * inv_r3 * r
}

/// 2D Newtonian gravity, direct n^2 summation over unordered pairs
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_sep: f64, // skip pairs closer than this, meters
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                let bi = &sys.bodies[i];
                let bj = &sys.bodies[j];

                // Force on i due to j; j feels the exact negation
                let f = newtonian_force(bi, bj, self.g, self.min_sep);

                // -------------------------
                // Apply Newton's law:
                // a_i +=  F / m_i
                // a_j += -F / m_j
                // (equal and opposite)
                // -------------------------
                out[i] += f / bi.m;
                out[j] -= f / bj.m;
            }
        }
    }
}
