//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - optional fixed integration step (wall-clock frame time otherwise),
//! - gravitational constant and close-encounter distance clamp,
//! - viewport zoom factor and pan step,
//! - trail ring capacity and the spawn region extents

#[derive(Debug, Clone)]
pub struct Parameters {
    pub step: Option<f64>, // fixed step size; None = frame delta time
    pub g: f64, // gravitational constant
    pub min_dist: f64, // distance clamp for close encounters
    pub zoom_factor: f64, // per-keypress zoom multiplier, > 1
    pub pan_step: f64, // per-keypress pan distance at zoom 1
    pub trail_len: usize, // trail ring capacity per body
    pub spawn_width: f64, // spawn region width, simulation units
    pub spawn_height: f64, // spawn region height
}
