//! Display and simulation tunables.
//!
//! None of these are physical. They size the scene in pixels and set how fast
//! things move on screen.

/// Configuration for the atom scene.
#[derive(Debug, Clone)]
pub struct AtomConfig {
    /// Number of electron shells drawn and reachable.
    pub num_rings: usize,
    /// Shell the electron starts in (and returns to on reset).
    pub initial_orbit: usize,
    /// Radius of the electron dot, also the grab radius.
    pub electron_radius: f32,
    /// Radius of the nucleus.
    pub nucleus_radius: f32,
    /// Radius of a photon dot.
    pub photon_radius: f32,
    /// Electron angular speed (rad/s).
    pub angular_speed: f32,
    /// Photon linear speed (px/s).
    pub photon_speed: f32,
    /// Photons closer than this to their target are retired (px).
    pub retire_epsilon: f32,
    /// Fraction of the per-ring height used as shell spacing.
    pub orbit_scale: f32,
    /// Radius offset of the innermost shell (px).
    pub orbit_base: f32,
    /// Shell outline width (px).
    pub shell_line_width: f32,
    pub shell_color: [f32; 4],
    pub nucleus_color: [f32; 4],
    pub electron_color: [f32; 4],
    pub outline_color: [f32; 4],
}

impl Default for AtomConfig {
    fn default() -> Self {
        Self {
            num_rings: 5,
            initial_orbit: 1,
            electron_radius: 15.0,
            nucleus_radius: 30.0,
            photon_radius: 6.0,
            angular_speed: 0.6,
            photon_speed: 300.0,
            retire_epsilon: 1.0,
            orbit_scale: 0.3,
            orbit_base: 50.0,
            shell_line_width: 1.0,
            shell_color: [0.0, 0.0, 0.0, 1.0],
            nucleus_color: [211.0 / 255.0, 31.0 / 255.0, 34.0 / 255.0, 1.0], // Red
            electron_color: [32.0 / 255.0, 106.0 / 255.0, 155.0 / 255.0, 1.0], // Blue
            outline_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl AtomConfig {
    /// Default configuration with a different shell count.
    pub fn with_rings(num_rings: usize) -> Self {
        let num_rings = num_rings.max(1);
        Self {
            num_rings,
            initial_orbit: 1usize.min(num_rings - 1),
            ..Self::default()
        }
    }
}
