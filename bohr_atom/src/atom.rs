//! The atom: nucleus, shells, one electron and the photons it trades
//!
//! Interaction is a two-state machine. While idle the electron circles its
//! shell. Pressing on the electron starts a drag; releasing drops it onto the
//! nearest shell, and a change of shell emits or absorbs one photon.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::config::AtomConfig;
use crate::electron::Electron;
use crate::energy::{energy_at_level, Transition, TransitionKind};
use crate::orbit::OrbitLayout;
use crate::photon::PhotonPool;
use crate::scene::{Canvas, CircleStyle};

/// Pointer input in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Vec2),
    Moved(Vec2),
    Released(Vec2),
}

pub struct Atom {
    config: AtomConfig,
    layout: OrbitLayout,
    electron: Electron,
    photons: PhotonPool,
    canvas_size: Vec2,
    last_transition: Option<Transition>,
    rng: StdRng,
}

impl Atom {
    pub fn new(config: AtomConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, StdRng::from_entropy())
    }

    /// Deterministic photon directions, for tests and replays
    pub fn with_seed(config: AtomConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: AtomConfig, width: f32, height: f32, rng: StdRng) -> Self {
        let layout = OrbitLayout::new(
            width,
            height,
            config.num_rings,
            config.orbit_scale,
            config.orbit_base,
        );
        let initial_orbit = layout.clamp_index(config.initial_orbit as i64);
        let photons = PhotonPool::new(config.photon_speed, config.retire_epsilon);

        Self {
            config,
            layout,
            electron: Electron::new(initial_orbit),
            photons,
            canvas_size: Vec2::new(width, height),
            last_transition: None,
            rng,
        }
    }

    pub fn config(&self) -> &AtomConfig {
        &self.config
    }

    pub fn layout(&self) -> &OrbitLayout {
        &self.layout
    }

    pub fn electron(&self) -> &Electron {
        &self.electron
    }

    pub fn photons(&self) -> &PhotonPool {
        &self.photons
    }

    pub fn last_transition(&self) -> Option<&Transition> {
        self.last_transition.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.electron.is_dragging()
    }

    pub fn electron_position(&self) -> Vec2 {
        self.electron.position(&self.layout)
    }

    /// Energy of the occupied shell (J)
    pub fn electron_energy(&self) -> f64 {
        energy_at_level(self.electron.orbit_index)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("Canvas resized to {}x{}", width, height);
        self.canvas_size = Vec2::new(width, height);
        self.layout.resize(width, height);
    }

    /// Put the electron back on its starting shell and drop all photons
    pub fn reset(&mut self) {
        let initial_orbit = self.layout.clamp_index(self.config.initial_orbit as i64);
        self.electron = Electron::new(initial_orbit);
        self.photons.clear();
        self.last_transition = None;
        log::info!("Atom reset to orbit n={}", initial_orbit + 1);
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed(pointer) => {
                self.start_drag(pointer);
            }
            PointerEvent::Moved(pointer) => self.drag_to(pointer),
            PointerEvent::Released(pointer) => {
                self.end_drag(pointer);
            }
        }
    }

    /// Grab the electron if the pointer is on it
    pub fn start_drag(&mut self, pointer: Vec2) -> bool {
        if self.electron.is_dragging() {
            return true;
        }
        if !self
            .electron
            .hit_test(pointer, &self.layout, self.config.electron_radius)
        {
            return false;
        }

        log::debug!("Electron grabbed on orbit n={}", self.electron.orbit_index + 1);
        self.electron.begin_drag(pointer);
        true
    }

    pub fn drag_to(&mut self, pointer: Vec2) {
        self.electron.drag_to(pointer);
    }

    /// Release the electron. Returns the transition if it changed shell.
    pub fn end_drag(&mut self, pointer: Vec2) -> Option<Transition> {
        if !self.electron.is_dragging() {
            return None;
        }

        let (old_index, new_index) = self.electron.end_drag(pointer, &self.layout);
        let Some(transition) = Transition::between(old_index, new_index) else {
            log::debug!("Electron dropped back on orbit n={}", new_index + 1);
            return None;
        };

        log::info!(
            "Transition n={} -> n={}: {:.1} nm ({})",
            old_index + 1,
            new_index + 1,
            transition.wavelength_nm,
            transition.kind().label()
        );

        let electron_pos = self.electron.position(&self.layout);
        let far_point = self.random_escape_point();
        let (start, target) = match transition.kind() {
            TransitionKind::Emission => (electron_pos, far_point),
            TransitionKind::Absorption => (far_point, electron_pos),
        };
        self.photons.spawn(start, target, transition.wavelength_nm);

        self.last_transition = Some(transition);
        Some(transition)
    }

    /// A point just off screen in a uniformly random direction from the nucleus
    fn random_escape_point(&mut self) -> Vec2 {
        let angle: f32 = self.rng.gen_range(0.0..TAU);
        let escape_radius = (self.canvas_size.length() * 0.5).max(self.layout.outermost_radius());
        self.layout.center + Vec2::new(angle.cos(), angle.sin()) * escape_radius
    }

    pub fn tick(&mut self, dt: f32) {
        self.electron.advance(self.config.angular_speed * dt);
        self.photons.tick(dt);
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        let config = &self.config;
        let center = self.layout.center;

        for i in 0..self.layout.num_rings {
            canvas.circle(
                center,
                self.layout.radius_for_index(i),
                CircleStyle::outline(config.shell_color, config.shell_line_width),
            );
        }

        canvas.circle(
            center,
            config.nucleus_radius,
            CircleStyle::filled(config.nucleus_color).with_stroke(config.outline_color, 1.0),
        );

        canvas.circle(
            self.electron_position(),
            config.electron_radius,
            CircleStyle::filled(config.electron_color).with_stroke(config.outline_color, 1.0),
        );

        self.photons.for_each_active(|_, photon| {
            canvas.circle(
                photon.position,
                config.photon_radius,
                CircleStyle::filled(photon.color()),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom() -> Atom {
        Atom::with_seed(AtomConfig::default(), 1280.0, 720.0, 7)
    }

    fn shell_point(atom: &Atom, index: usize, angle: f32) -> Vec2 {
        atom.layout().center + Vec2::new(angle.cos(), angle.sin()) * atom.layout().radius_for_index(index)
    }

    #[test]
    fn test_starts_idle_on_initial_orbit() {
        let atom = atom();
        assert_eq!(atom.electron().orbit_index, 1);
        assert!(!atom.is_dragging());
        assert_eq!(atom.photons().active_count(), 0);
    }

    #[test]
    fn test_press_away_from_electron_does_nothing() {
        let mut atom = atom();
        let miss = atom.electron_position() + Vec2::new(40.0, 0.0);
        assert!(!atom.start_drag(miss));
        assert!(!atom.is_dragging());
        assert!(atom.end_drag(miss).is_none());
    }

    #[test]
    fn test_tick_advances_only_when_idle() {
        let mut atom = atom();
        atom.tick(1.0);
        assert!((atom.electron().angle - 0.6).abs() < 1e-5);

        let pos = atom.electron_position();
        atom.start_drag(pos);
        atom.tick(1.0);
        assert!((atom.electron().angle - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_drop_on_same_shell_spawns_nothing() {
        let mut atom = atom();
        let pos = atom.electron_position();
        atom.start_drag(pos);

        let release = shell_point(&atom, 1, 1.0);
        assert!(atom.end_drag(release).is_none());
        assert_eq!(atom.photons().active_count(), 0);
        assert!((atom.electron().angle - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_emission_leaves_from_electron() {
        let mut atom = atom();
        let pos = atom.electron_position();
        atom.start_drag(pos);

        let transition = atom.end_drag(shell_point(&atom, 0, 2.0)).unwrap();
        assert_eq!(transition.kind(), TransitionKind::Emission);
        assert!(transition.wavelength_nm < 0.0);
        assert_eq!(atom.electron().orbit_index, 0);

        let (_, photon) = atom.photons().iter().next().unwrap();
        assert!(photon.position.distance(atom.electron_position()) < 1e-3);
        let escape = photon.target.distance(atom.layout().center);
        assert!(escape >= atom.layout().outermost_radius());
    }

    #[test]
    fn test_absorption_arrives_at_electron() {
        let mut atom = atom();
        let pos = atom.electron_position();
        atom.start_drag(pos);

        let transition = atom.end_drag(shell_point(&atom, 4, 0.5)).unwrap();
        assert_eq!(transition.kind(), TransitionKind::Absorption);

        let (_, photon) = atom.photons().iter().next().unwrap();
        assert!(photon.target.distance(atom.electron_position()) < 1e-3);
        assert!(photon.position.distance(atom.layout().center) > atom.layout().outermost_radius());
        assert_eq!(atom.last_transition(), Some(&transition));
    }

    #[test]
    fn test_pointer_events_drive_drag() {
        let mut atom = atom();
        let pos = atom.electron_position();

        atom.handle(PointerEvent::Pressed(pos));
        assert!(atom.is_dragging());

        let moved = Vec2::new(100.0, 100.0);
        atom.handle(PointerEvent::Moved(moved));
        assert_eq!(atom.electron_position(), moved);

        atom.handle(PointerEvent::Released(shell_point(&atom, 2, 0.0)));
        assert!(!atom.is_dragging());
        assert_eq!(atom.electron().orbit_index, 2);
        assert_eq!(atom.photons().active_count(), 1);
    }

    #[test]
    fn test_reset() {
        let mut atom = atom();
        let pos = atom.electron_position();
        atom.start_drag(pos);
        atom.end_drag(shell_point(&atom, 3, 0.0));

        atom.reset();
        assert_eq!(atom.electron().orbit_index, 1);
        assert_eq!(atom.photons().active_count(), 0);
        assert!(atom.last_transition().is_none());
    }

    #[test]
    fn test_electron_energy_follows_orbit() {
        let mut atom = atom();
        let before = atom.electron_energy();
        let pos = atom.electron_position();
        atom.start_drag(pos);
        atom.end_drag(shell_point(&atom, 3, 0.0));
        assert!(atom.electron_energy() > before);
    }
}
