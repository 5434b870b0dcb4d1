pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, newtonian_force};
pub use simulation::integrator::euler_step;
pub use simulation::params::{Parameters, AU};
pub use simulation::scenario::{Scenario, View};

pub use configuration::config::{ViewConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_step};
