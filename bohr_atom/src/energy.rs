//! Hydrogen-like energy levels and transition wavelengths
//!
//! Uses the Bohr formula:
//! - `E_n = -h·c·R / n²` with `n = index + 1`
//! - `f = ΔE / h`, `λ = c / f`
//!
//! Wavelengths are signed. A jump to a higher shell gives a positive
//! wavelength (absorption), a jump to a lower shell a negative one (emission).

use crate::constants::{ELECTRON_VOLT, PLANCK, RYDBERG, SPEED_OF_LIGHT};

/// Energy (J) of the shell with the given zero-based index.
pub fn energy_at_level(index: usize) -> f64 {
    let n = (index + 1) as f64;
    -PLANCK * SPEED_OF_LIGHT * RYDBERG / (n * n)
}

/// Signed wavelength (nm) of the photon for a jump between two shells.
///
/// Returns `None` when both indices are equal, since no photon is involved.
pub fn transition_wavelength_nm(old_index: usize, new_index: usize) -> Option<f64> {
    if old_index == new_index {
        return None;
    }

    let delta = energy_at_level(new_index) - energy_at_level(old_index);
    let frequency = delta / PLANCK;
    let wavelength = SPEED_OF_LIGHT / frequency;

    Some(wavelength * 1e9)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Electron dropped to a lower shell and released a photon
    Emission,
    /// Electron climbed to a higher shell by taking in a photon
    Absorption,
}

impl TransitionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransitionKind::Emission => "emission",
            TransitionKind::Absorption => "absorption",
        }
    }
}

/// A jump between two distinct shells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// Signed wavelength in nanometers
    pub wavelength_nm: f64,
}

impl Transition {
    pub fn between(from: usize, to: usize) -> Option<Self> {
        transition_wavelength_nm(from, to).map(|wavelength_nm| Self {
            from,
            to,
            wavelength_nm,
        })
    }

    pub fn kind(&self) -> TransitionKind {
        if self.wavelength_nm < 0.0 {
            TransitionKind::Emission
        } else {
            TransitionKind::Absorption
        }
    }

    pub fn magnitude_nm(&self) -> f64 {
        self.wavelength_nm.abs()
    }

    /// Energy change of the electron (J)
    pub fn energy_delta(&self) -> f64 {
        energy_at_level(self.to) - energy_at_level(self.from)
    }

    pub fn energy_delta_ev(&self) -> f64 {
        self.energy_delta() / ELECTRON_VOLT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_levels_increase_and_stay_negative() {
        let mut previous = energy_at_level(0);
        assert!(previous <= 0.0);

        for index in 1..50 {
            let energy = energy_at_level(index);
            assert!(energy <= 0.0);
            assert!(energy > previous, "level {} not above level {}", index, index - 1);
            previous = energy;
        }
    }

    #[test]
    fn test_ground_state_energy() {
        // -hcR ≈ -13.6 eV
        let ev = energy_at_level(0) / ELECTRON_VOLT;
        assert!((ev + 13.6).abs() < 0.05, "ground state was {} eV", ev);
    }

    #[test]
    fn test_equal_indices_have_no_transition() {
        assert_eq!(transition_wavelength_nm(2, 2), None);
        assert!(Transition::between(0, 0).is_none());
    }

    #[test]
    fn test_reverse_transition_negates_wavelength() {
        for a in 0..6 {
            for b in 0..6 {
                if a == b {
                    continue;
                }
                let forward = transition_wavelength_nm(a, b).unwrap();
                let backward = transition_wavelength_nm(b, a).unwrap();
                assert_eq!(forward, -backward);
            }
        }
    }

    #[test]
    fn test_balmer_beta_absorption() {
        let wavelength = transition_wavelength_nm(1, 3).unwrap();

        assert!(energy_at_level(3) > energy_at_level(1));
        assert!(wavelength > 0.0);

        let expected = 1e9 / (RYDBERG * (1.0 / 4.0 - 1.0 / 16.0));
        let relative = ((wavelength - expected) / expected).abs();
        assert!(relative < 1e-6, "got {} nm, expected {} nm", wavelength, expected);
    }

    #[test]
    fn test_transition_kind() {
        let down = Transition::between(2, 1).unwrap();
        assert_eq!(down.kind(), TransitionKind::Emission);
        assert!(down.energy_delta() < 0.0);
        // H-alpha
        assert!((down.magnitude_nm() - 656.3).abs() < 1.0);

        let up = Transition::between(0, 1).unwrap();
        assert_eq!(up.kind(), TransitionKind::Absorption);
        assert!(up.energy_delta_ev() > 10.0);
    }
}
