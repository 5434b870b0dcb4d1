use approx::assert_relative_eq;

use planetsim::simulation::forces::{newtonian_force, AccelSet, NewtonianGravity};
use planetsim::simulation::integrator::euler_step;
use planetsim::simulation::params::{Parameters, AU};
use planetsim::simulation::scenario::Scenario;
use planetsim::simulation::states::{Body, NVec2, System};
use planetsim::configuration::config::ScenarioConfig;

/// Build a simple 2-body System separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body::new("a", NVec2::new(-dist / 2.0, 0.0), NVec2::zeros(), m1);
    let b2 = Body::new("b", NVec2::new(dist / 2.0, 0.0), NVec2::zeros(), m2);
    System {
        bodies: vec![b1, b2],
        t: 0.0,
        reference: None,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        h0: 0.001,
        g: 0.1,
        min_sep: 1e-9,
        trail_cap: None,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        g: p.g,
        min_sep: p.min_sep,
    })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn pair_force_matches_inverse_square() {
    let sys = two_body_system(2.0, 3.0, 5.0);
    let p = test_params();

    let f = newtonian_force(&sys.bodies[0], &sys.bodies[1], p.g, p.min_sep);

    let expected = p.g * 3.0 * 5.0 / 4.0;
    assert_relative_eq!(f.norm(), expected, max_relative = 1e-12);

    // Directed from the first body straight toward the second (+x)
    assert!(f.x > 0.0, "Force does not point toward the other body");
    assert_eq!(f.y, 0.0);
}

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();

    let f_ab = newtonian_force(&sys.bodies[0], &sys.bodies[1], p.g, p.min_sep);
    let f_ba = newtonian_force(&sys.bodies[1], &sys.bodies[0], p.g, p.min_sep);
    assert_eq!(f_ab, -f_ba);

    // Same through the accumulated accelerations: zero net momentum change
    let forces = gravity_set(&p);
    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let net = acc[0] * sys.bodies[0].m + acc[1] * sys.bodies[1].m;
    assert!(net.norm() < 1e-12, "Net momentum not zero: {:?}", net);
}

#[test]
fn gravity_inverse_square_ratio() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![NVec2::zeros(); 2];
    let mut acc_2r = vec![NVec2::zeros(); 2];

    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn net_force_is_sum_of_pairwise() {
    let p = test_params();
    let bodies = vec![
        Body::new("a", NVec2::new(0.0, 0.0), NVec2::zeros(), 2.0),
        Body::new("b", NVec2::new(3.0, 1.0), NVec2::zeros(), 5.0),
        Body::new("c", NVec2::new(-1.0, 2.0), NVec2::zeros(), 7.0),
        Body::new("d", NVec2::new(0.5, -4.0), NVec2::zeros(), 11.0),
    ];
    let sys = System {
        bodies,
        t: 0.0,
        reference: None,
    };
    let forces = gravity_set(&p);

    let mut acc = vec![NVec2::zeros(); 4];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // Accumulated acceleration must equal the sum of pairwise terms
    for i in 0..4 {
        let mut expected = NVec2::zeros();
        for j in 0..4 {
            if i == j {
                continue;
            }
            expected += newtonian_force(&sys.bodies[i], &sys.bodies[j], p.g, p.min_sep) / sys.bodies[i].m;
        }
        assert_relative_eq!(acc[i].x, expected.x, max_relative = 1e-12);
        assert_relative_eq!(acc[i].y, expected.y, max_relative = 1e-12);
    }

    // Reversing the body list must not change anyone's net acceleration
    let mut rev_bodies = sys.bodies.clone();
    rev_bodies.reverse();
    let rev = System {
        bodies: rev_bodies,
        t: 0.0,
        reference: None,
    };
    let mut acc_rev = vec![NVec2::zeros(); 4];
    forces.accumulate_accels(rev.t, &rev, &mut acc_rev);

    for i in 0..4 {
        assert_relative_eq!(acc[i].x, acc_rev[3 - i].x, max_relative = 1e-9);
        assert_relative_eq!(acc[i].y, acc_rev[3 - i].y, max_relative = 1e-9);
    }
}

#[test]
fn coincident_bodies_stay_finite() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = two_body_system(0.0, 1.0, 1.0);

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // The close pair is skipped, not divided by zero
    assert_eq!(acc[0], NVec2::zeros());
    assert_eq!(acc[1], NVec2::zeros());

    euler_step(&mut sys, &forces, &p);
    for b in &sys.bodies {
        assert!(b.x.x.is_finite() && b.x.y.is_finite());
        assert!(b.v.x.is_finite() && b.v.y.is_finite());
    }
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn isolated_body_feels_no_force() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = System {
        bodies: vec![Body::new("lonely", NVec2::new(1.0, 2.0), NVec2::zeros(), 4.0)],
        t: 0.0,
        reference: None,
    };

    euler_step(&mut sys, &forces, &p);

    let b = &sys.bodies[0];
    assert_eq!(b.v, NVec2::zeros());
    assert_eq!(b.x, NVec2::new(1.0, 2.0));
    assert_relative_eq!(sys.t, p.h0);
}

#[test]
fn step_is_deterministic() {
    let p = test_params();
    let forces = gravity_set(&p);

    let mut a = two_body_system(2.0, 1.0, 3.0);
    let mut b = two_body_system(2.0, 1.0, 3.0);

    for _ in 0..100 {
        euler_step(&mut a, &forces, &p);
        euler_step(&mut b, &forces, &p);
    }

    // Same inputs, bit-identical outputs
    for (ba, bb) in a.bodies.iter().zip(b.bodies.iter()) {
        assert_eq!(ba.x, bb.x);
        assert_eq!(ba.v, bb.v);
    }
    assert_eq!(a.t, b.t);
}

#[test]
fn trail_grows_one_point_per_step() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = two_body_system(2.0, 1.0, 1.0);

    for step in 1..=5 {
        euler_step(&mut sys, &forces, &p);
        for b in &sys.bodies {
            assert_eq!(b.trail.len(), step);
            assert_eq!(*b.trail.back().unwrap(), b.x);
        }
    }
}

#[test]
fn trail_cap_drops_oldest_points() {
    let mut p = test_params();
    p.trail_cap = Some(3);
    let forces = gravity_set(&p);
    let mut sys = two_body_system(2.0, 1.0, 1.0);

    for _ in 0..10 {
        euler_step(&mut sys, &forces, &p);
    }

    for b in &sys.bodies {
        assert_eq!(b.trail.len(), 3);
        assert_eq!(*b.trail.back().unwrap(), b.x);
    }
}

#[test]
fn reference_distance_tracks_the_step() {
    let p = test_params();
    let forces = gravity_set(&p);
    let star = Body::new("star", NVec2::zeros(), NVec2::zeros(), 100.0);
    let planet = Body::new("planet", NVec2::new(10.0, 0.0), NVec2::new(0.0, 1.0), 1.0);
    let mut sys = System {
        bodies: vec![star, planet],
        t: 0.0,
        reference: Some(0),
    };

    euler_step(&mut sys, &forces, &p);

    let expected = (sys.bodies[1].x - sys.bodies[0].x).norm();
    assert_relative_eq!(sys.bodies[1].dist_to_ref, expected, max_relative = 1e-12);
}

// ==================================================================================
// Scale / scenario tests
// ==================================================================================

#[test]
fn earth_falls_toward_the_sun() {
    // Earth-mass body 1 AU from a solar-mass body, both at rest,
    // advanced by one simulated week in a single step
    let p = Parameters {
        h0: 3600.0 * 24.0 * 7.0,
        g: 6.67408e-11,
        min_sep: 1.0,
        trail_cap: None,
    };
    let forces = gravity_set(&p);
    let sun = Body::new("sun", NVec2::zeros(), NVec2::zeros(), 1.989e30);
    let earth = Body::new("earth", NVec2::new(AU, 0.0), NVec2::zeros(), 5.97e24);
    let mut sys = System {
        bodies: vec![sun, earth],
        t: 0.0,
        reference: Some(0),
    };

    euler_step(&mut sys, &forces, &p);

    let earth = &sys.bodies[1];

    // Pulled toward the sun, i.e. in -x
    assert!(earth.v.x < 0.0, "Earth not pulled toward the sun");
    assert_eq!(earth.v.y, 0.0);

    // One week of free fall moves it much less than the full separation
    let displacement = (earth.x - NVec2::new(AU, 0.0)).norm();
    assert!(displacement > 0.0);
    assert!(displacement < 0.05 * AU, "Earth moved too far: {displacement}");
}

#[test]
fn scenario_build_resolves_reference_and_defaults() {
    let yaml = r#"
view:
  width: 800.0
  height: 600.0
  pixels_per_au: 100.0
  steps_per_second: 60.0
parameters:
  g: 6.67408e-11
  h0: 10080.0
bodies:
  - name: Star
    x: [ 0.0, 0.0 ]
    v: [ 0.0, 0.0 ]
    m: 1.0e30
    radius: 20.0
    color: [ 200, 200, 20 ]
    reference: true
    labeled: false
  - name: Planet
    x: [ -1.4959787e11, 0.0 ]
    v: [ 0.0, 29783.0 ]
    m: 5.97e24
    radius: 5.0
    color: [ 100, 149, 237 ]
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.system.reference, Some(0));
    assert!(!scenario.system.bodies[0].labeled);
    assert!(scenario.system.bodies[1].labeled);

    // Distances are usable before the first step
    assert_relative_eq!(scenario.system.bodies[1].dist_to_ref, 1.4959787e11, max_relative = 1e-9);

    // Optional parameters fall back to their defaults
    assert_eq!(scenario.parameters.min_sep, 1.0);
    assert_eq!(scenario.parameters.trail_cap, None);

    // pixels_per_au converts to a pixels-per-meter scale
    assert_relative_eq!(scenario.view.scale, 100.0 / AU, max_relative = 1e-12);
}
