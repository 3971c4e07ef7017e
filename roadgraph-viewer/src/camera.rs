//! 2D viewport mapping between lon/lat space and screen space.

use eframe::egui::{Pos2, Rect, Vec2, pos2};

const FIT_MARGIN: f64 = 0.95;
const MIN_SCALE: f64 = 1e-2;
const MAX_SCALE: f64 = 1e8;

/// Pan/zoom state of the map view.
///
/// World y grows north, screen y grows down, so every mapping flips
/// the vertical axis.
pub struct Camera {
    /// World point under the viewport center (lon, lat)
    center: (f64, f64),
    /// Screen pixels per world unit
    scale: f64,
    fitted: bool,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            center: (0.0, 0.0),
            scale: 1.0,
            fitted: false,
        }
    }

    /// Centers on `bounds` and scales it into the viewport, once.
    /// Later pan/zoom state survives window resizes.
    pub fn fit_if_needed(&mut self, bounds: Option<geo::Rect<f64>>, viewport: Rect) {
        if self.fitted {
            return;
        }
        if let Some(bounds) = bounds {
            self.fit(bounds, viewport);
        }
    }

    pub fn fit(&mut self, bounds: geo::Rect<f64>, viewport: Rect) {
        let center = bounds.center();
        self.center = (center.x, center.y);

        let width = bounds.width().max(f64::EPSILON);
        let height = bounds.height().max(f64::EPSILON);
        let scale_x = f64::from(viewport.width()) / width;
        let scale_y = f64::from(viewport.height()) / height;
        self.scale = (scale_x.min(scale_y) * FIT_MARGIN).clamp(MIN_SCALE, MAX_SCALE);
        self.fitted = true;
    }

    pub fn to_screen(&self, world: (f64, f64), viewport: Rect) -> Pos2 {
        let center = viewport.center();
        pos2(
            center.x + ((world.0 - self.center.0) * self.scale) as f32,
            center.y - ((world.1 - self.center.1) * self.scale) as f32,
        )
    }

    pub fn to_world(&self, screen: Pos2, viewport: Rect) -> (f64, f64) {
        let center = viewport.center();
        (
            self.center.0 + f64::from(screen.x - center.x) / self.scale,
            self.center.1 - f64::from(screen.y - center.y) / self.scale,
        )
    }

    /// Converts a pixel length to world units at the current zoom.
    pub fn px_to_world(&self, px: f64) -> f64 {
        px / self.scale
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.center.0 -= f64::from(delta.x) / self.scale;
        self.center.1 += f64::from(delta.y) / self.scale;
    }

    /// Zooms by `factor`, keeping the world point under `focus` fixed.
    pub fn zoom_at(&mut self, focus: Pos2, viewport: Rect, factor: f64) {
        let anchor = self.to_world(focus, viewport);
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);

        let center = viewport.center();
        self.center = (
            anchor.0 - f64::from(focus.x - center.x) / self.scale,
            anchor.1 + f64::from(focus.y - center.y) / self.scale,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use eframe::egui::vec2;
    use geo::coord;

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    fn fitted_camera() -> Camera {
        let mut camera = Camera::new();
        let bounds = geo::Rect::new(coord! { x: -1.0, y: -1.0 }, coord! { x: 1.0, y: 1.0 });
        camera.fit(bounds, viewport());
        camera
    }

    #[test]
    fn screen_world_round_trip() {
        let camera = fitted_camera();
        let world = (0.25, -0.5);

        let screen = camera.to_screen(world, viewport());
        let back = camera.to_world(screen, viewport());

        assert_approx_eq!(back.0, world.0, 1e-6);
        assert_approx_eq!(back.1, world.1, 1e-6);
    }

    #[test]
    fn fit_centers_the_bounds() {
        let camera = fitted_camera();

        let screen = camera.to_screen((0.0, 0.0), viewport());
        assert_approx_eq!(screen.x, 400.0, 1e-3);
        assert_approx_eq!(screen.y, 300.0, 1e-3);
    }

    #[test]
    fn north_maps_up() {
        let camera = fitted_camera();

        let north = camera.to_screen((0.0, 0.5), viewport());
        let south = camera.to_screen((0.0, -0.5), viewport());
        assert!(north.y < south.y);
    }

    #[test]
    fn zoom_keeps_the_focus_point_fixed() {
        let mut camera = fitted_camera();
        let focus = pos2(200.0, 150.0);
        let before = camera.to_world(focus, viewport());

        camera.zoom_at(focus, viewport(), 2.0);
        let after = camera.to_world(focus, viewport());

        assert_approx_eq!(before.0, after.0, 1e-9);
        assert_approx_eq!(before.1, after.1, 1e-9);
    }

    #[test]
    fn pan_shifts_the_view() {
        let mut camera = fitted_camera();
        let before = camera.to_world(pos2(400.0, 300.0), viewport());

        camera.pan(vec2(100.0, 0.0));
        let after = camera.to_world(pos2(400.0, 300.0), viewport());

        assert!(after.0 < before.0);
        assert_approx_eq!(after.1, before.1, 1e-9);
    }
}
