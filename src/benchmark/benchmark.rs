use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Build a synthetic System of n bodies
/// deterministic positions, no rand needed
fn synthetic_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (i_f * 0.37).sin() * 5.0e11,
            (i_f * 0.13).cos() * 5.0e11,
        );

        bodies.push(Body::new(&format!("body-{i}"), x, NVec2::zeros(), 1.0e24));
    }

    System {
        bodies,
        t: 0.0,
        reference: None,
    }
}

fn bench_params() -> Parameters {
    Parameters {
        h0: 3600.0,
        g: 6.67408e-11,
        min_sep: 1.0,
        trail_cap: Some(1024),
    }
}

/// Time one direct-summation gravity pass across growing system sizes
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = synthetic_system(n);
        let p = bench_params();

        let direct = NewtonianGravity {
            g: p.g,
            min_sep: p.min_sep,
        };

        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        direct.acceleration(0.0, &sys, &mut out);

        // Time direct
        let t0 = Instant::now();
        direct.acceleration(0.0, &sys, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s");
    }
}

/// Time whole integrator steps (force pass + kinematics + bookkeeping)
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 10;

    for n in ns {
        let mut sys = synthetic_system(n);
        let p = bench_params();

        let forces = AccelSet::new().with(NewtonianGravity {
            g: p.g,
            min_sep: p.min_sep,
        });

        // Warm up
        euler_step(&mut sys, &forces, &p);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &forces, &p);
        }
        let dt_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {dt_step:8.6} s");
    }
}
