//! Equations sidebar UI for the Bohr model
//!
//! Displays the energy-level and photon equations and the photon color key
//! using egui.

use egui::{Color32, Context, RichText};

use crate::spectrum::{ANCHORS, INFRARED, ULTRAVIOLET};

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Sidebar width in egui points. Fixed so the atom can be laid out beside it.
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Width in physical pixels left for the atom once the sidebar is drawn
pub fn scene_width(window_width: f32, pixels_per_point: f32) -> f32 {
    (window_width - SIDEBAR_WIDTH * pixels_per_point).max(1.0)
}

/// Rows of the spectrum legend: anchor wavelength label and its color
pub fn spectrum_legend() -> Vec<(String, Color32)> {
    let mut rows = vec![("< 400 nm (UV)".to_string(), to_color32(ULTRAVIOLET))];
    rows.extend(
        ANCHORS
            .iter()
            .map(|&(nm, color)| (format!("{:.0} nm", nm), to_color32(color))),
    );
    rows.push(("> 740 nm (IR)".to_string(), to_color32(INFRARED)));
    rows
}

/// Draw the Bohr model sidebar: equations, symbols and the color key
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) {
    egui::SidePanel::right("bohr_sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            ui.heading(RichText::new(title).color(Color32::LIGHT_BLUE));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.collapsing(RichText::new("📐 Equations").strong(), |ui| {
                    for eq in equations {
                        ui.group(|ui| {
                            ui.label(RichText::new(eq.name).strong().color(Color32::YELLOW));
                            ui.label(RichText::new(eq.formula).monospace().color(Color32::WHITE));
                            ui.label(RichText::new(eq.description).small().italics());
                        });
                        ui.add_space(4.0);
                    }
                });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("📖 Symbols").strong(), |ui| {
                    egui::Grid::new("bohr_symbols")
                        .num_columns(2)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            for (symbol, meaning) in variables {
                                ui.label(RichText::new(*symbol).monospace().color(Color32::LIGHT_GREEN));
                                ui.label(*meaning);
                                ui.end_row();
                            }
                        });
                });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("🌈 Photon colors").strong(), |ui| {
                    for (label, color) in spectrum_legend() {
                        ui.label(RichText::new(format!("● {}", label)).color(color));
                    }
                });
            });
        });
}

/// egui color for a simulation RGBA color
pub fn to_color32(color: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

// ============================================================================
// Bohr Model Equations
// ============================================================================

pub const BOHR_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Energy Levels",
        formula: "Eₙ = -h·c·R / n²",
        description: "Energy of the electron in shell n",
    },
    Equation {
        name: "Transition Energy",
        formula: "ΔE = E_final - E_initial",
        description: "Positive when the electron climbs (absorption)",
    },
    Equation {
        name: "Planck Relation",
        formula: "f = ΔE / h",
        description: "Photon frequency from the energy change",
    },
    Equation {
        name: "Wavelength",
        formula: "λ = c / f",
        description: "Photon wavelength, shown as its color",
    },
    Equation {
        name: "Rydberg Formula",
        formula: "1/λ = R(1/n₁² - 1/n₂²)",
        description: "Same result written for hydrogen lines",
    },
];

pub const BOHR_VARIABLES: &[(&str, &str)] = &[
    ("n", "Principal quantum number (shell)"),
    ("h", "Planck constant (6.63×10⁻³⁴ J·s)"),
    ("c", "Speed of light (3.0×10⁸ m/s)"),
    ("R", "Rydberg constant (1.097×10⁷ m⁻¹)"),
    ("f", "Photon frequency"),
    ("λ", "Photon wavelength"),
];
