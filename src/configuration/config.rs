//! Launch configuration for the simulator.
//!
//! `SimConfig` is the validated, CLI-facing description of a run:
//! the star count and the optional fixed integration step, plus the
//! built-in defaults for physics and viewport behavior. The scenario
//! builder maps this into its internal runtime `Parameters`.

/// Stars simulated when no count is given on the command line.
pub const DEFAULT_STAR_COUNT: usize = 3;

/// Window size; also the extent of the spawn region at zoom 1.
pub const SCREEN_SIZE: (f64, f64) = (1280.0, 720.0);

/// Gravitational constant, tuned for pixel-scale coordinates.
pub const G: f64 = 900.0;

/// Separations below this are clamped before the force falloff, to
/// avoid crazy accelerations when bodies are too close.
pub const MIN_DISTANCE: f64 = 50.0;

/// Zoom multiplier applied per zoom-in keypress; zoom-out divides by
/// the same factor.
pub const ZOOM_FACTOR: f64 = 1.25;

/// Pan distance per keypress, in simulation units at zoom 1.
pub const PAN_STEP: f64 = 40.0;

/// Past positions retained per body for trail rendering.
pub const TRAIL_LEN: usize = 512;

/// Full launch configuration for one run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub n_bodies: usize, // star count, >= 1
    pub step: Option<f64>, // fixed step in seconds; None = frame time
    pub g: f64, // gravitational constant
    pub min_dist: f64, // close-encounter distance clamp
    pub zoom_factor: f64, // per-keypress zoom multiplier
    pub pan_step: f64, // per-keypress pan distance at zoom 1
    pub trail_len: usize, // trail ring capacity
    pub width: f64, // window / spawn region width
    pub height: f64, // window / spawn region height
}

impl SimConfig {
    /// Configuration for `n_bodies` stars with the built-in defaults.
    /// `step` fixes the integration step for deterministic runs; `None`
    /// steps by wall-clock frame time.
    pub fn new(n_bodies: usize, step: Option<f64>) -> Self {
        Self {
            n_bodies,
            step,
            g: G,
            min_dist: MIN_DISTANCE,
            zoom_factor: ZOOM_FACTOR,
            pan_step: PAN_STEP,
            trail_len: TRAIL_LEN,
            width: SCREEN_SIZE.0,
            height: SCREEN_SIZE.1,
        }
    }
}
