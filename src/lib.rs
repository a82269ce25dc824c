pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, Viewport, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, spawn_bodies};

pub use configuration::config::SimConfig;

pub use visualization::starsim_vis2d::run_2d;
