//! Fixed-step time integrator for the planetary system
//!
//! Semi-implicit Euler driven by `AccelSet` and `Parameters`: velocities
//! are kicked first and positions advanced with the updated velocities,
//! which keeps the cheap first-order step symplectic

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step of `params.h0` simulated seconds
///
/// Accelerations for the whole step are taken from a snapshot of the
/// positions before any body moves, so the result does not depend on the
/// order of the body list. After the kinematic update each body's new
/// position is appended to its trail and the reference distances are
/// refreshed
pub fn euler_step(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0; // time step dt

    // acc[i] will hold the net acceleration of body i at the current time t
    let mut acc = vec![NVec2::zeros(); n];

    // Ask the force set to accumulate accelerations at time t into acc,
    // based on the current system state sys
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    // Kick, then drift with the *new* velocity:
    // v_n+1 = v_n + dt a_n
    // x_n+1 = x_n + dt v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;

    // Bookkeeping consumed by the renderer: trail points and the
    // displayed distance to the reference body
    for b in sys.bodies.iter_mut() {
        b.push_trail(params.trail_cap);
    }
    sys.refresh_reference_distances();
}
