//! Eye geometry: center and the three nested radii
//!
//! Radii always follow the fixed ratios:
//! - iris = eye * IRIS_RATIO
//! - pupil = iris * PUPIL_RATIO

use glam::DVec2;
use serde::Serialize;

use crate::consts::{EYE_RADIUS_RATIO, IRIS_RATIO, PUPIL_RATIO};

/// Widget-space eye geometry
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GeometryModel {
    /// Eye center (half the widget size)
    pub center: DVec2,
    pub eye_radius: f64,
    pub iris_radius: f64,
    pub pupil_radius: f64,
}

impl GeometryModel {
    /// Geometry for a widget of the given size
    pub fn from_size(width: f64, height: f64) -> Self {
        let mut geometry = Self::default();
        geometry.resize(width, height);
        geometry
    }

    /// Recompute everything from the widget's bounding box.
    ///
    /// Zero or negative sizes give all-zero radii.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.center = DVec2::new(width / 2.0, height / 2.0);
        self.derive_radii((width.min(height) * EYE_RADIUS_RATIO).max(0.0));
    }

    /// Override the eye radius directly (center is kept).
    ///
    /// Non-positive sizes are ignored.
    pub fn set_eye_size(&mut self, size: f64) {
        if size > 0.0 {
            self.derive_radii(size);
        } else {
            log::warn!("Ignoring non-positive eye size {size}");
        }
    }

    fn derive_radii(&mut self, eye_radius: f64) {
        self.eye_radius = eye_radius;
        self.iris_radius = eye_radius * IRIS_RATIO;
        self.pupil_radius = self.iris_radius * PUPIL_RATIO;
    }

    /// Maximum travel of the iris center from the eye center
    #[inline]
    pub fn max_iris_offset(&self) -> f64 {
        self.eye_radius - self.iris_radius
    }

    /// Maximum travel of the pupil center from the iris center
    #[inline]
    pub fn max_pupil_offset(&self) -> f64 {
        self.iris_radius - self.pupil_radius
    }

    /// Whether a widget-space point lies on the eye disc (rim included)
    pub fn contains(&self, point: DVec2) -> bool {
        point.distance(self.center) <= self.eye_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_ratios() {
        let g = GeometryModel::from_size(200.0, 100.0);
        assert_eq!(g.center, DVec2::new(100.0, 50.0));
        assert!((g.eye_radius - 40.0).abs() < 1e-9);
        assert!((g.iris_radius - 14.0).abs() < 1e-9);
        assert!((g.pupil_radius - 5.6).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_sizes() {
        let g = GeometryModel::from_size(0.0, 300.0);
        assert_eq!(g.eye_radius, 0.0);
        assert_eq!(g.pupil_radius, 0.0);

        let g = GeometryModel::from_size(-50.0, 80.0);
        assert_eq!(g.eye_radius, 0.0);
        assert_eq!(g.iris_radius, 0.0);
    }

    #[test]
    fn test_set_eye_size() {
        let mut g = GeometryModel::from_size(400.0, 400.0);
        g.set_eye_size(150.0);
        assert_eq!(g.center, DVec2::new(200.0, 200.0));
        assert_eq!(g.eye_radius, 150.0);
        assert!((g.iris_radius - 52.5).abs() < 1e-9);
        assert!((g.pupil_radius - 21.0).abs() < 1e-9);

        // Non-positive override is dropped
        g.set_eye_size(0.0);
        assert_eq!(g.eye_radius, 150.0);
        g.set_eye_size(-3.0);
        assert_eq!(g.eye_radius, 150.0);
    }

    #[test]
    fn test_contains_includes_rim() {
        let g = GeometryModel::from_size(100.0, 100.0);
        assert!(g.contains(DVec2::new(50.0, 50.0)));
        assert!(g.contains(DVec2::new(90.0, 50.0)));
        assert!(!g.contains(DVec2::new(90.1, 50.0)));
    }

    proptest::proptest! {
        #[test]
        fn prop_radii_strictly_nested(w in 0.01f64..10_000.0, h in 0.01f64..10_000.0) {
            let g = GeometryModel::from_size(w, h);
            proptest::prop_assert!(g.pupil_radius < g.iris_radius);
            proptest::prop_assert!(g.iris_radius < g.eye_radius);
        }
    }
}
