//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `SimConfig` and produces the runtime bundle ([`Scenario`])
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with freshly generated bodies at t = 0)
//! - active force set (`AccelSet`)
//! - viewport transform (`Viewport`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration, rendering, and input systems. It is the single owner of
//! all mutable simulation state: only it replaces the body collection
//! (on reset) or mutates the viewport (on pan/zoom input).

use bevy::prelude::Resource;
use rand::Rng;

use crate::configuration::config::SimConfig;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System, Viewport};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`SimConfig`]:
/// it contains the numerical parameters, current system state, the set
/// of active force laws (accelerations), and the viewport transform.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub viewport: Viewport,
    pub n_bodies: usize, // configured star count, reused on reset
}

impl Scenario {
    pub fn build_scenario(cfg: SimConfig) -> Self {
        // Parameters (runtime) from SimConfig
        let parameters = Parameters {
            step: cfg.step,
            g: cfg.g,
            min_dist: cfg.min_dist,
            zoom_factor: cfg.zoom_factor,
            pan_step: cfg.pan_step,
            trail_len: cfg.trail_len,
            spawn_width: cfg.width,
            spawn_height: cfg.height,
        };

        // Initial system state: freshly generated bodies at t = 0
        let system = System {
            bodies: spawn_bodies(cfg.n_bodies, &parameters),
            t: 0.0,
            running: true,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            min_dist: parameters.min_dist,
        });

        Self {
            parameters,
            system,
            forces,
            viewport: Viewport::new(),
            n_bodies: cfg.n_bodies,
        }
    }

    /// One controller frame: advance the system by one step while
    /// running, do nothing while paused. `frame_dt` is the elapsed
    /// wall-clock time since the last frame; a fixed configured step
    /// takes precedence over it when present.
    pub fn tick(&mut self, frame_dt: f64) {
        if !self.system.running {
            return;
        }
        let dt = self.parameters.step.unwrap_or(frame_dt);
        euler_integrator(&mut self.system, &self.forces, dt);
    }

    /// Flip between running and paused.
    pub fn toggle_running(&mut self) {
        self.system.running = !self.system.running;
    }

    /// Discard the current bodies and regenerate the configured count
    /// from fresh random initial conditions. Forces the running state;
    /// the viewport is left untouched.
    pub fn reset(&mut self) {
        self.system = System {
            bodies: spawn_bodies(self.n_bodies, &self.parameters),
            t: 0.0,
            running: true,
        };
    }
}

/// Generate `n` stars with randomized initial conditions:
/// - positions uniform inside the spawn rectangle, keeping a one-tenth
///   margin from each edge (coordinates centered on the origin)
/// - velocities zero
/// - masses uniform in 1000..=4000, normalized by `4 / n` so the total
///   pull stays comparable across star counts
/// - display radius proportional to mass, floored at 3 units
/// - colors uniform random RGB
///
/// Unseeded on purpose: together with frame-time stepping this is what
/// makes no two runs alike.
pub fn spawn_bodies(n: usize, params: &Parameters) -> Vec<Body> {
    let mut rng = rand::thread_rng();

    let x_extent = params.spawn_width / 2.0 - params.spawn_width / 10.0;
    let y_extent = params.spawn_height / 2.0 - params.spawn_height / 10.0;

    (0..n)
        .map(|_| {
            let x = NVec2::new(
                rng.gen_range(-x_extent..=x_extent),
                rng.gen_range(-y_extent..=y_extent),
            );
            let m = rng.gen_range(1000.0..=4000.0) * 4.0 / n as f64;
            let radius = (m / 50.0).max(3.0);
            let color = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()];
            Body::new(x, NVec2::zeros(), m, radius, color, params.trail_len)
        })
        .collect()
}
