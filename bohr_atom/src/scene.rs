//! Drawing interface between the simulation and a rendering backend

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: [f32; 4],
    pub width: f32,
}

/// How a circle is painted. Both parts are optional, so an outline-only
/// shell has `fill: None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub fill: Option<[f32; 4]>,
    pub stroke: Option<Stroke>,
}

impl CircleStyle {
    pub fn filled(color: [f32; 4]) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn outline(color: [f32; 4], width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }

    pub fn with_stroke(mut self, color: [f32; 4], width: f32) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }
}

/// Anything that can draw circles in pixel coordinates (y down)
pub trait Canvas {
    fn circle(&mut self, center: Vec2, radius: f32, style: CircleStyle);
}
