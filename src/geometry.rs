use tracing::debug;

use crate::config::{ClockConfig, HandSet};

/// Width the reference sizes in [`ClockConfig`] are expressed against.
pub const REFERENCE_WIDTH: f64 = 500.0;

/// Largest side a clock surface is allowed to grow to.
pub const MAX_SURFACE_SIZE: u32 = 400;

/// Square drawing surface size, recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGeometry {
    pub width: u32,
    pub height: u32,
}

impl SurfaceGeometry {
    /// Largest square that fits the viewport, capped at [`MAX_SURFACE_SIZE`].
    pub fn fit(viewport_width: u32, viewport_height: u32) -> Self {
        let side = viewport_width.min(viewport_height).min(MAX_SURFACE_SIZE);
        Self {
            width: side,
            height: side,
        }
    }

    pub fn scale_factor(&self) -> f64 {
        scale_factor(f64::from(self.width))
    }
}

pub fn scale_factor(surface_width: f64) -> f64 {
    surface_width / REFERENCE_WIDTH
}

/// Sizes derived from the configuration for the current surface width.
///
/// Only a resize changes these; every frame between two resizes reuses them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingParameters {
    pub scale_factor: f64,
    pub hand_widths: HandSet<f64>,
    pub center_dot_size: f64,
}

impl DrawingParameters {
    pub fn for_width(config: &ClockConfig, surface_width: f64) -> Self {
        let scale_factor = scale_factor(surface_width);
        let params = Self {
            scale_factor,
            hand_widths: config.hand_widths.map(|width| width * scale_factor),
            center_dot_size: config.center_dot_size * scale_factor,
        };
        debug!(surface_width, scale_factor, "updated drawing parameters");
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_is_square_and_capped() {
        assert_eq!(SurfaceGeometry::fit(1920, 1080), SurfaceGeometry { width: 400, height: 400 });
        assert_eq!(SurfaceGeometry::fit(300, 720), SurfaceGeometry { width: 300, height: 300 });
        assert_eq!(SurfaceGeometry::fit(640, 250), SurfaceGeometry { width: 250, height: 250 });
    }

    #[test]
    fn half_width_halves_every_size() {
        let params = DrawingParameters::for_width(&ClockConfig::defaults(), 250.0);
        assert_eq!(params.scale_factor, 0.5);
        assert_eq!(params.hand_widths.hour, 4.0);
        assert_eq!(params.hand_widths.minute, 3.0);
        assert_eq!(params.hand_widths.second, 2.0);
        assert_eq!(params.hand_widths.millisecond, 1.0);
        assert_eq!(params.center_dot_size, 3.0);
    }

    #[test]
    fn scale_factor_follows_geometry() {
        assert_eq!(SurfaceGeometry::fit(400, 400).scale_factor(), 0.8);
    }
}
