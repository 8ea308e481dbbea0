//! Bohr Model Simulation
//!
//! An interactive 2D Bohr model of a hydrogen-like atom:
//!
//! - **Energy levels**: discrete shells with `E_n = -hcR / n²`
//! - **Transitions**: dragging the electron between shells emits or absorbs a photon
//! - **Photons**: travel in from / out to a random direction, colored by wavelength
//!
//! The simulation itself has no graphics dependency. It draws through the
//! [`scene::Canvas`] trait, which the wgpu [`renderer`] implements.

pub mod atom;
pub mod config;
pub mod electron;
pub mod energy;
pub mod equations_ui;
pub mod orbit;
pub mod photon;
pub mod renderer;
pub mod scene;
pub mod spectrum;

pub use atom::{Atom, PointerEvent};
pub use config::AtomConfig;
pub use energy::{Transition, TransitionKind};
pub use photon::{Photon, PhotonHandle, PhotonPool};

/// Physical constants for the energy model
pub mod constants {
    /// Planck constant (J·s)
    pub const PLANCK: f64 = 6.63e-34;

    /// Speed of light (m/s)
    pub const SPEED_OF_LIGHT: f64 = 3.0e8;

    /// Rydberg constant (1/m)
    pub const RYDBERG: f64 = 1.097e7;

    /// Joules per electron volt
    pub const ELECTRON_VOLT: f64 = 1.602e-19;
}
