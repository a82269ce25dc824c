//! Core state types for the star simulation.
//!
//! Defines:
//! - `Body`     one point mass with its display attributes and trail
//! - `System`   the body collection, simulation time `t`, and the
//!              running/paused playback flag
//! - `Viewport` the pan + zoom transform from simulation space to
//!              screen space

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// One simulated star. Pure data holder plus trail bookkeeping; all
/// physics lives in the force and integrator modules.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, strictly positive, fixed after creation
    pub radius: f64, // display radius
    pub color: [f32; 3], // sRGB display color
    trail: VecDeque<NVec2>, // past positions, oldest first
    trail_len: usize, // ring capacity
}

impl Body {
    /// Build a body. Mass and radius must be strictly positive.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: [f32; 3], trail_len: usize) -> Self {
        assert!(m > 0.0, "body mass must be positive, got {m}");
        assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self {
            x,
            v,
            m,
            radius,
            color,
            trail: VecDeque::with_capacity(trail_len),
            trail_len,
        }
    }

    /// Apply one step's velocity change `dv` and displacement `dx`.
    /// The pre-update position is appended to the trail; the oldest
    /// entry is dropped once the ring is full.
    pub fn advance(&mut self, dv: NVec2, dx: NVec2) {
        self.v += dv;
        if self.trail.len() == self.trail_len {
            self.trail.pop_front();
        }
        self.trail.push_back(self.x);
        self.x += dx;
    }

    /// Recorded past positions, oldest first.
    pub fn trail(&self) -> &VecDeque<NVec2> {
        &self.trail
    }
}

/// The full mutable simulation state.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, stable order
    pub t: f64, // time
    pub running: bool, // true = integrating, false = paused
}

/// Pan + zoom transform from simulation coordinates to screen
/// coordinates: `screen = (x + pan) * zoom`.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub pan: NVec2, // pan offset, simulation units
    pub zoom: f64, // strictly positive
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            pan: NVec2::zeros(),
            zoom: 1.0,
        }
    }

    /// Map a simulation-space position to screen space.
    pub fn project(&self, x: &NVec2) -> NVec2 {
        (x + self.pan) * self.zoom
    }

    pub fn zoom_in(&mut self, factor: f64) {
        self.zoom *= factor;
    }

    /// Inverse of [`Viewport::zoom_in`] with the same factor.
    pub fn zoom_out(&mut self, factor: f64) {
        self.zoom /= factor;
    }

    /// Shift the pan offset by `step` simulation units in direction
    /// `(dx, dy)`, scaled by `1 / zoom` so the apparent pan speed on
    /// screen does not depend on the current zoom level.
    pub fn pan_by(&mut self, dx: f64, dy: f64, step: f64) {
        self.pan += NVec2::new(dx, dy) * (step / self.zoom);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
