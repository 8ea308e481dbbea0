//! Screen layout of the shells.
//!
//! Shell radii scale with the canvas height:
//! `r(i) = (height / N) · (i + 1) · scale + base`.
//! `index_for_radius` is the algebraic inverse of that line, rounded.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLayout {
    /// Nucleus position in pixels
    pub center: Vec2,
    pub canvas_height: f32,
    pub num_rings: usize,
    pub scale: f32,
    pub base: f32,
}

impl OrbitLayout {
    pub fn new(width: f32, height: f32, num_rings: usize, scale: f32, base: f32) -> Self {
        Self {
            center: Vec2::new(width * 0.5, height * 0.5),
            canvas_height: height,
            num_rings: num_rings.max(1),
            scale,
            base,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.center = Vec2::new(width * 0.5, height * 0.5);
        self.canvas_height = height;
    }

    fn ring_step(&self) -> f32 {
        self.canvas_height / self.num_rings as f32 * self.scale
    }

    pub fn radius_for_index(&self, index: usize) -> f32 {
        self.ring_step() * (index + 1) as f32 + self.base
    }

    /// Nearest shell index for a distance from the nucleus. Not clamped.
    pub fn index_for_radius(&self, radius: f32) -> i64 {
        let step = self.ring_step();
        if step <= 0.0 {
            return 0;
        }
        ((radius - self.base) / step - 1.0).round() as i64
    }

    pub fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.num_rings as i64 - 1) as usize
    }

    /// Shell index under a screen point, clamped to the valid range
    pub fn index_at(&self, point: Vec2) -> usize {
        self.clamp_index(self.index_for_radius(point.distance(self.center)))
    }

    pub fn outermost_radius(&self) -> f32 {
        self.radius_for_index(self.num_rings - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_index_round_trip() {
        for &(width, height) in &[(1280.0, 720.0), (800.0, 600.0), (1920.0, 1080.0), (300.0, 97.0)] {
            for rings in [5, 6] {
                let layout = OrbitLayout::new(width, height, rings, 0.3, 50.0);
                for i in 0..rings {
                    let r = layout.radius_for_index(i);
                    assert_eq!(layout.index_for_radius(r), i as i64, "{}x{} rings={} i={}", width, height, rings, i);
                }
            }
        }
    }

    #[test]
    fn test_radii_increase_outward() {
        let layout = OrbitLayout::new(1280.0, 720.0, 5, 0.3, 50.0);
        // 720 / 5 * 0.3 = 43.2 px per shell
        assert!((layout.radius_for_index(0) - 93.2).abs() < 1e-3);
        for i in 1..5 {
            assert!(layout.radius_for_index(i) > layout.radius_for_index(i - 1));
        }
    }

    #[test]
    fn test_index_clamping() {
        let layout = OrbitLayout::new(1280.0, 720.0, 5, 0.3, 50.0);

        assert!(layout.index_for_radius(0.0) < 0);
        assert_eq!(layout.index_at(layout.center), 0);

        let far = layout.center + Vec2::new(5000.0, 0.0);
        assert_eq!(layout.index_at(far), 4);
    }

    #[test]
    fn test_resize_recenters() {
        let mut layout = OrbitLayout::new(1280.0, 720.0, 5, 0.3, 50.0);
        layout.resize(800.0, 400.0);
        assert_eq!(layout.center, Vec2::new(400.0, 200.0));
        assert!((layout.radius_for_index(0) - (400.0 / 5.0 * 0.3 + 50.0)).abs() < 1e-4);
    }
}
