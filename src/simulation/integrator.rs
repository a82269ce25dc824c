//! Time stepping for the n-body system
//!
//! Provides a semi-implicit Euler integrator driven by an [`AccelSet`]:
//! one force evaluation per step, velocities updated before positions.

use super::forces::AccelSet;
use super::states::{NVec2, System};

/// Advance the system by one step of size `dt`.
///
/// For each body: `v_n+1 = v_n + a_n * dt`, then `x_n+1 = x_n + v_n+1 * dt`.
/// The velocity-then-position order is load-bearing for reproducibility
/// within a run and must not be swapped.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // Allocate a vector of accelerations, one per body, initialized to zero
    // accels[i] will hold a_n for body i at the current time t = sys.t
    let mut accels = vec![NVec2::zeros(); n];

    // Ask the force set to accumulate accelerations at time t_n into accels,
    // based on the current system state sys
    forces.accumulate_accels(sys.t, &*sys, &mut accels);

    // Kick then drift, in that order:
    // v_n+1 = v_n + dt * a_n
    // x_n+1 = x_n + dt * v_n+1
    // Each body records its pre-step position on its trail as part of
    // the update.
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        let dv = *a * dt;
        let dx = (b.v + dv) * dt;
        b.advance(dv, dx);
    }

    // Increment the system time by one full step
    sys.t += dt;
}
