//! Photons in flight
//!
//! Photons live in a slot arena. A retired photon frees its slot, and the
//! next spawn takes the first free slot before growing the arena, so a
//! handle stays valid for exactly as long as its photon is alive.

use glam::Vec2;

use crate::spectrum::wavelength_to_color;

/// Index of a photon's slot in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotonHandle(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Photon {
    pub position: Vec2,
    pub target: Vec2,
    /// Wavelength magnitude in nanometers
    pub wavelength_nm: f64,
}

impl Photon {
    pub fn new(position: Vec2, target: Vec2, wavelength_nm: f64) -> Self {
        Self {
            position,
            target,
            wavelength_nm: wavelength_nm.abs(),
        }
    }

    pub fn remaining(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn color(&self) -> [f32; 4] {
        wavelength_to_color(self.wavelength_nm)
    }
}

pub struct PhotonPool {
    slots: Vec<Option<Photon>>,
    /// Linear speed (px/s)
    pub speed: f32,
    /// Retirement distance (px)
    pub epsilon: f32,
}

impl PhotonPool {
    pub fn new(speed: f32, epsilon: f32) -> Self {
        Self {
            slots: Vec::new(),
            speed,
            epsilon,
        }
    }

    pub fn spawn(&mut self, start: Vec2, target: Vec2, wavelength_nm: f64) -> PhotonHandle {
        let photon = Photon::new(start, target, wavelength_nm);

        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(photon);
                PhotonHandle(index)
            }
            None => {
                self.slots.push(Some(photon));
                PhotonHandle(self.slots.len() - 1)
            }
        }
    }

    /// Move every photon toward its target and retire arrivals.
    ///
    /// Returns the number of photons retired. A negative `dt` is treated as
    /// zero; photons never move away from their target.
    pub fn tick(&mut self, dt: f32) -> usize {
        let step = (self.speed * dt).max(0.0);
        let mut retired = 0;

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(photon) = slot.as_mut() else {
                continue;
            };

            let to_target = photon.target - photon.position;
            let remaining = to_target.length();

            // Also catches a photon sitting exactly on its target, whose
            // direction would be NaN.
            let arrived = remaining < self.epsilon || step >= remaining;
            if arrived || !remaining.is_finite() {
                log::debug!("Photon {} retired ({:.1} nm)", index, photon.wavelength_nm);
                *slot = None;
                retired += 1;
                continue;
            }

            photon.position += to_target / remaining * step;
        }

        retired
    }

    pub fn for_each_active<F: FnMut(PhotonHandle, &Photon)>(&self, mut f: F) {
        for (handle, photon) in self.iter() {
            f(handle, photon);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PhotonHandle, &Photon)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|photon| (PhotonHandle(index), photon)))
    }

    pub fn get(&self, handle: PhotonHandle) -> Option<&Photon> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    pub fn remove(&mut self, handle: PhotonHandle) -> Option<Photon> {
        self.slots.get_mut(handle.0).and_then(Option::take)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of slots, occupied or free
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
