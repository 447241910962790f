//! Print raster size and on-screen preview size for a model.

use crate::model::PhysicalModel;
use crate::units::{mm_to_px, round_px};

/// Default maximum preview height in CSS pixels.
pub const DEFAULT_MAX_VISUAL_HEIGHT: f64 = 320.0;

/// Full print-resolution raster the design is drawn into and exported from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RasterTarget {
    pub width_px: u32,
    pub height_px: u32,
}

impl RasterTarget {
    pub fn width(&self) -> f64 {
        self.width_px as f64
    }

    pub fn height(&self) -> f64 {
        self.height_px as f64
    }
}

/// Size of the preview container on screen. Same aspect ratio as the raster.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct VisualSize {
    pub width: f64,
    pub height: f64,
}

impl VisualSize {
    /// Factor that maps raster pixels onto the preview.
    pub fn display_scale(&self, raster: RasterTarget) -> f64 {
        if raster.height_px == 0 {
            return 0.0;
        }
        self.height / raster.height()
    }
}

pub fn compute_raster_size(model: &PhysicalModel) -> RasterTarget {
    RasterTarget {
        width_px: round_px(mm_to_px(model.width_mm)),
        height_px: round_px(mm_to_px(model.height_mm)),
    }
}

pub fn compute_visual_size(raster: RasterTarget, max_visual_height: f64) -> VisualSize {
    if raster.width_px == 0 || raster.height_px == 0 {
        return VisualSize::default();
    }
    let ratio = raster.height() / raster.width();
    let height = max_visual_height;
    VisualSize {
        width: height / ratio,
        height,
    }
}

/// Maps a point in the scaled preview (CSS pixels relative to the element) into raster pixels.
pub fn display_to_raster(
    x: f64,
    y: f64,
    display_width: f64,
    display_height: f64,
    raster: RasterTarget,
) -> (f64, f64) {
    if display_width <= 0.0 || display_height <= 0.0 {
        return (x, y);
    }
    (
        x * raster.width() / display_width,
        y * raster.height() / display_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{lookup, CATALOG};

    #[test]
    fn raster_sizes_for_known_models() {
        assert_eq!(
            compute_raster_size(&lookup("s23-ultra")),
            RasterTarget {
                width_px: 992,
                height_px: 1996
            }
        );
        assert_eq!(
            compute_raster_size(&lookup("s24-ultra")),
            RasterTarget {
                width_px: 1004,
                height_px: 1984
            }
        );
        assert_eq!(
            compute_raster_size(&lookup("unknown")),
            RasterTarget {
                width_px: 945,
                height_px: 1949
            }
        );
    }

    #[test]
    fn visual_size_keeps_raster_aspect() {
        for e in CATALOG {
            let raster = compute_raster_size(&e.model);
            for max in [320.0, 520.0, 97.5] {
                let v = compute_visual_size(raster, max);
                assert_eq!(v.height, max);
                let raster_ratio = raster.height() / raster.width();
                let visual_ratio = v.height / v.width;
                assert!((raster_ratio - visual_ratio).abs() < 1e-12, "{}", e.key);
            }
        }
    }

    #[test]
    fn degenerate_raster_has_empty_visual() {
        let v = compute_visual_size(RasterTarget::default(), 320.0);
        assert_eq!(v, VisualSize::default());
    }

    #[test]
    fn display_points_scale_into_raster() {
        let raster = RasterTarget {
            width_px: 1000,
            height_px: 2000,
        };
        let (x, y) = display_to_raster(50.0, 80.0, 160.0, 320.0, raster);
        assert!((x - 312.5).abs() < 1e-9);
        assert!((y - 500.0).abs() < 1e-9);
        assert_eq!(display_to_raster(7.0, 9.0, 0.0, 320.0, raster), (7.0, 9.0));
    }
}
