//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - view settings (`View`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems

use std::collections::VecDeque;

use bevy::prelude::Resource;
use log::{info, warn};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, System};

/// Close-pair threshold used when the scenario does not set one, meters
const DEFAULT_MIN_SEP: f64 = 1.0;

/// Window and world-to-screen settings for the 2D viewer
#[derive(Debug, Clone)]
pub struct View {
    pub width: f32, // window width, pixels
    pub height: f32, // window height, pixels
    pub scale: f64, // pixels per meter
    pub steps_per_second: f64, // physics steps per wall-clock second
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the view settings, parameters, current system state, and
/// the set of active force laws (accelerations)
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for integration and visualization
#[derive(Resource)]
pub struct Scenario {
    pub view: View,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            name: bc.name.clone(),
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
            radius: bc.radius,
            color: bc.color,
            labeled: bc.labeled,
            dist_to_ref: 0.0,
            trail: VecDeque::new(),
        }).collect();

        // The first body flagged `reference` anchors the distance display
        let reference = cfg.bodies.iter().position(|bc| bc.reference);
        if cfg.bodies.iter().filter(|bc| bc.reference).count() > 1 {
            warn!("multiple reference bodies configured, using the first");
        }
        if reference.is_none() {
            warn!("no reference body configured, distance labels will read zero");
        }

        // Initial system state: bodies at t = 0
        let mut system = System {
            bodies,
            t: 0.0,
            reference,
        };
        system.refresh_reference_distances();

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            g: p_cfg.g,
            min_sep: p_cfg.min_sep.unwrap_or(DEFAULT_MIN_SEP),
            trail_cap: p_cfg.trail_cap,
        };

        // View (runtime) from ViewConfig
        let v_cfg = cfg.view;
        let view = View {
            width: v_cfg.width,
            height: v_cfg.height,
            scale: v_cfg.pixels_per_au / AU,
            steps_per_second: v_cfg.steps_per_second,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            min_sep: parameters.min_sep,
        });

        info!(
            "built scenario: {} bodies, h0 = {} s, {} steps/s",
            system.bodies.len(),
            parameters.h0,
            view.steps_per_second,
        );

        Self {
            view,
            parameters,
            system,
            forces,
        }
    }
}
