//! Wavelength to display color
//!
//! Visible light is interpolated between fixed anchors from violet (400 nm)
//! to deep red (740 nm). Anything shorter is drawn in a fixed ultraviolet
//! tint, anything longer in a fixed infrared tint.

/// Color for wavelengths below the first anchor
pub const ULTRAVIOLET: [f32; 4] = [0.85, 0.75, 1.0, 1.0];

/// Color for wavelengths above the last anchor
pub const INFRARED: [f32; 4] = [0.35, 0.05, 0.05, 1.0];

/// (wavelength nm, color), strictly increasing in wavelength
pub const ANCHORS: &[(f32, [f32; 4])] = &[
    (400.0, [0.5, 0.0, 1.0, 1.0]), // Violet
    (450.0, [0.0, 0.0, 1.0, 1.0]), // Blue
    (490.0, [0.0, 1.0, 1.0, 1.0]), // Cyan
    (530.0, [0.0, 1.0, 0.0, 1.0]), // Green
    (580.0, [1.0, 1.0, 0.0, 1.0]), // Yellow
    (620.0, [1.0, 0.5, 0.0, 1.0]), // Orange
    (680.0, [1.0, 0.0, 0.0, 1.0]), // Red
    (740.0, [0.5, 0.0, 0.0, 1.0]), // Deep red
];

fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Display color for a wavelength in nanometers (sign ignored)
pub fn wavelength_to_color(wavelength_nm: f64) -> [f32; 4] {
    let wavelength = wavelength_nm.abs() as f32;

    let (first_nm, first_color) = ANCHORS[0];
    let (last_nm, last_color) = ANCHORS[ANCHORS.len() - 1];

    if wavelength < first_nm {
        return ULTRAVIOLET;
    }
    if wavelength > last_nm {
        return INFRARED;
    }
    if wavelength == last_nm {
        return last_color;
    }
    if wavelength == first_nm {
        return first_color;
    }

    for pair in ANCHORS.windows(2) {
        let (lo_nm, lo_color) = pair[0];
        let (hi_nm, hi_color) = pair[1];
        if wavelength >= lo_nm && wavelength < hi_nm {
            let t = (wavelength - lo_nm) / (hi_nm - lo_nm);
            return lerp_color(lo_color, hi_color, t);
        }
    }

    last_color
}
