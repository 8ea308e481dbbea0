//! The single orbiting electron and its drag interaction

use glam::Vec2;
use std::f32::consts::TAU;

use crate::orbit::OrbitLayout;

/// Wrap an angle into `[0, 2π)`
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone)]
pub struct Electron {
    pub orbit_index: usize,
    /// Angular position on the shell (radians, `[0, 2π)`)
    pub angle: f32,
    /// Live pointer position while being dragged
    drag: Option<Vec2>,
}

impl Electron {
    pub fn new(orbit_index: usize) -> Self {
        Self {
            orbit_index,
            angle: 0.0,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn position(&self, layout: &OrbitLayout) -> Vec2 {
        match self.drag {
            Some(pointer) => pointer,
            None => {
                let r = layout.radius_for_index(self.orbit_index);
                layout.center + Vec2::new(self.angle.cos(), self.angle.sin()) * r
            }
        }
    }

    /// Move along the shell. Ignored while dragging.
    pub fn advance(&mut self, delta_angle: f32) {
        if self.is_dragging() {
            return;
        }
        self.angle = wrap_angle(self.angle + delta_angle);
    }

    pub fn hit_test(&self, pointer: Vec2, layout: &OrbitLayout, hit_radius: f32) -> bool {
        pointer.distance(self.position(layout)) < hit_radius
    }

    /// Start following the pointer. Callers check `hit_test` first.
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag = Some(pointer);
    }

    pub fn drag_to(&mut self, pointer: Vec2) {
        if let Some(drag) = self.drag.as_mut() {
            *drag = pointer;
        }
    }

    /// Drop the electron onto the shell nearest the release point.
    ///
    /// Returns `(old_index, new_index)`; they are equal when the electron
    /// stayed on its shell or was not being dragged.
    pub fn end_drag(&mut self, pointer: Vec2, layout: &OrbitLayout) -> (usize, usize) {
        let old_index = self.orbit_index;
        if self.drag.take().is_none() {
            return (old_index, old_index);
        }

        let new_index = layout.index_at(pointer);
        let offset = pointer - layout.center;
        self.angle = wrap_angle(offset.y.atan2(offset.x));
        self.orbit_index = new_index;

        (old_index, new_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn layout() -> OrbitLayout {
        OrbitLayout::new(1280.0, 720.0, 5, 0.3, 50.0)
    }

    #[test]
    fn test_position_on_shell() {
        let layout = layout();
        let mut electron = Electron::new(2);

        let pos = electron.position(&layout);
        let expected = layout.center + Vec2::new(layout.radius_for_index(2), 0.0);
        assert!(pos.distance(expected) < 1e-3);

        electron.angle = PI / 2.0;
        let pos = electron.position(&layout);
        assert!((pos.distance(layout.center) - layout.radius_for_index(2)).abs() < 1e-3);
        assert!(pos.y > layout.center.y);
    }

    #[test]
    fn test_advance_wraps() {
        let mut electron = Electron::new(0);
        electron.angle = TAU - 0.05;
        electron.advance(0.1);
        assert!(electron.angle >= 0.0 && electron.angle < TAU);
        assert!((electron.angle - 0.05).abs() < 1e-4);

        electron.advance(-0.2);
        assert!(electron.angle >= 0.0 && electron.angle < TAU);
    }

    #[test]
    fn test_no_advance_while_dragging() {
        let layout = layout();
        let mut electron = Electron::new(1);
        let start = electron.position(&layout);

        electron.begin_drag(start);
        electron.advance(1.0);
        assert_eq!(electron.angle, 0.0);

        let pointer = Vec2::new(10.0, 20.0);
        electron.drag_to(pointer);
        assert_eq!(electron.position(&layout), pointer);
    }

    #[test]
    fn test_hit_test() {
        let layout = layout();
        let electron = Electron::new(1);
        let pos = electron.position(&layout);

        assert!(electron.hit_test(pos + Vec2::new(5.0, 5.0), &layout, 15.0));
        assert!(!electron.hit_test(pos + Vec2::new(20.0, 0.0), &layout, 15.0));
    }

    #[test]
    fn test_end_drag_picks_shell_and_angle() {
        let layout = layout();
        let mut electron = Electron::new(1);
        electron.begin_drag(electron.position(&layout));

        // Straight below the nucleus (screen y grows downward)
        let release = layout.center + Vec2::new(0.0, layout.radius_for_index(3) + 4.0);
        let (old, new) = electron.end_drag(release, &layout);

        assert_eq!((old, new), (1, 3));
        assert!(!electron.is_dragging());
        assert!((electron.angle - PI / 2.0).abs() < 1e-4);

        let snapped = electron.position(&layout);
        assert!(snapped.distance(layout.center + Vec2::new(0.0, layout.radius_for_index(3))) < 1e-2);
    }

    #[test]
    fn test_end_drag_clamps() {
        let layout = layout();
        let mut electron = Electron::new(2);

        electron.begin_drag(Vec2::ZERO);
        let (_, new) = electron.end_drag(layout.center + Vec2::new(-3000.0, 0.0), &layout);
        assert_eq!(new, 4);

        electron.begin_drag(Vec2::ZERO);
        let (_, new) = electron.end_drag(layout.center + Vec2::new(1.0, 1.0), &layout);
        assert_eq!(new, 0);
    }

    #[test]
    fn test_end_drag_without_drag_is_noop() {
        let layout = layout();
        let mut electron = Electron::new(2);
        electron.angle = 1.0;

        let (old, new) = electron.end_drag(Vec2::ZERO, &layout);
        assert_eq!((old, new), (2, 2));
        assert_eq!(electron.angle, 1.0);
    }
}
