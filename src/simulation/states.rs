//! Core state types for the planet simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds one object's kinematic state plus its display attributes
//! - `System` holds the ordered body list, the simulation time `t`, and
//!   the index of the reference body for the displayed distance metric

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // display name
    pub x: NVec2, // position, meters
    pub v: NVec2, // velocity, m/s
    pub m: f64, // mass, kg
    pub radius: f64, // display radius, pixels
    pub color: [u8; 3], // display color (sRGB)
    pub labeled: bool, // draw name/distance text for this body
    pub dist_to_ref: f64, // meters to the reference body, refreshed each step
    pub trail: VecDeque<NVec2>, // past positions for the orbit trail
}

impl Body {
    /// Body with neutral display attributes, for tests and benchmarks
    pub fn new(name: &str, x: NVec2, v: NVec2, m: f64) -> Self {
        Self {
            name: name.to_owned(),
            x,
            v,
            m,
            radius: 1.0,
            color: [255, 255, 255],
            labeled: true,
            dist_to_ref: 0.0,
            trail: VecDeque::new(),
        }
    }

    /// Record the current position in the trail, dropping the oldest
    /// points once `cap` is exceeded
    pub fn push_trail(&mut self, cap: Option<usize>) {
        self.trail.push_back(self.x);
        if let Some(cap) = cap {
            while self.trail.len() > cap {
                self.trail.pop_front();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // time, simulated seconds
    pub reference: Option<usize>, // index of the distance-metric reference body
}

impl System {
    /// Recompute every body's distance to the reference body
    ///
    /// Kept out of the force pass: the reference body is a display concern
    /// and takes no special role in gravity
    pub fn refresh_reference_distances(&mut self) {
        let ref_x = match self.reference.and_then(|r| self.bodies.get(r)) {
            Some(b) => b.x,
            None => return,
        };
        for b in self.bodies.iter_mut() {
            b.dist_to_ref = (ref_x - b.x).norm();
        }
    }
}
