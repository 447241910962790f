// Pan/zoom state of the background image and its cover placement on the raster.
use crate::sizing::RasterTarget;

pub const MIN_SCALE: f64 = 0.3;
pub const MAX_SCALE: f64 = 3.5;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Destination rectangle of the image on the raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

impl ImageTransform {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale);
    }

    /// Multiplies the scale, clamping the result. Non-finite or non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let next = clamp_scale(self.scale * factor);
        let changed = next != self.scale;
        self.scale = next;
        changed
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        self.offset_x += dx;
        self.offset_y += dy;
        true
    }

    pub fn set_offset_x(&mut self, x: f64) {
        if x.is_finite() {
            self.offset_x = x;
        }
    }

    pub fn set_offset_y(&mut self, y: f64) {
        if y.is_finite() {
            self.offset_y = y;
        }
    }

    /// Cover placement: at scale 1 and no offset the image fills the raster exactly,
    /// cropped on the overflowing axis. `None` when either size is degenerate.
    pub fn placement(&self, image: ImageSize, target: RasterTarget) -> Option<Placement> {
        let canvas = ImageSize::new(target.width(), target.height());
        if !image.is_drawable() || !canvas.is_drawable() {
            return None;
        }
        let img_ratio = image.width / image.height;
        let canvas_ratio = canvas.width / canvas.height;

        let (width, height) = if img_ratio > canvas_ratio {
            let h = canvas.height * self.scale;
            (h * img_ratio, h)
        } else {
            let w = canvas.width * self.scale;
            (w, w / img_ratio)
        };

        let center_x = canvas.width / 2.0 + self.offset_x;
        let center_y = canvas.height / 2.0 + self.offset_y;
        Some(Placement {
            x: center_x - width / 2.0,
            y: center_y - height / 2.0,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(w: u32, h: u32) -> RasterTarget {
        RasterTarget {
            width_px: w,
            height_px: h,
        }
    }

    #[test]
    fn square_image_covers_tall_canvas() {
        let t = ImageTransform::default();
        let p = t
            .placement(ImageSize::new(100.0, 100.0), target(100, 200))
            .unwrap();
        assert_eq!(p.height, 200.0);
        assert_eq!(p.width, 200.0);
        assert_eq!(p.x, -50.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn tall_image_fits_width_and_crops_height() {
        let t = ImageTransform::default();
        let p = t
            .placement(ImageSize::new(100.0, 400.0), target(100, 200))
            .unwrap();
        assert_eq!(p.width, 100.0);
        assert_eq!(p.height, 400.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, -100.0);
    }

    #[test]
    fn cover_never_leaves_gaps_at_identity() {
        let t = ImageTransform::default();
        let raster = target(992, 1996);
        for (w, h) in [(4000.0, 3000.0), (1080.0, 1920.0), (500.0, 1006.0), (7.0, 3.0)] {
            let p = t.placement(ImageSize::new(w, h), raster).unwrap();
            assert!(p.x <= 1e-9 && p.y <= 1e-9);
            assert!(p.x + p.width >= raster.width() - 1e-9);
            assert!(p.y + p.height >= raster.height() - 1e-9);
            // one axis is exact
            assert!(
                (p.width - raster.width()).abs() < 1e-9
                    || (p.height - raster.height()).abs() < 1e-9
            );
        }
    }

    #[test]
    fn offsets_and_scale_move_the_center() {
        let t = ImageTransform {
            scale: 2.0,
            offset_x: 10.0,
            offset_y: -20.0,
        };
        let p = t
            .placement(ImageSize::new(100.0, 100.0), target(100, 200))
            .unwrap();
        assert_eq!((p.width, p.height), (400.0, 400.0));
        assert_eq!(p.x + p.width / 2.0, 60.0);
        assert_eq!(p.y + p.height / 2.0, 80.0);
    }

    #[test]
    fn degenerate_sizes_have_no_placement() {
        let t = ImageTransform::default();
        assert!(t.placement(ImageSize::new(0.0, 10.0), target(10, 10)).is_none());
        assert!(t.placement(ImageSize::new(10.0, 10.0), target(0, 10)).is_none());
        assert!(t
            .placement(ImageSize::new(f64::NAN, 10.0), target(10, 10))
            .is_none());
    }

    #[test]
    fn scale_is_always_clamped() {
        let mut t = ImageTransform::default();
        assert!(t.zoom_by(100.0));
        assert_eq!(t.scale, MAX_SCALE);
        t.reset();
        assert!(t.zoom_by(0.001));
        assert_eq!(t.scale, MIN_SCALE);
        assert!(!t.zoom_by(0.5));
        assert!(!t.zoom_by(0.0));
        assert!(!t.zoom_by(f64::INFINITY));
        t.set_scale(9.0);
        assert_eq!(t.scale, MAX_SCALE);
        t.set_scale(f64::NAN);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn reset_restores_identity() {
        let mut t = ImageTransform {
            scale: 3.0,
            offset_x: 4.0,
            offset_y: 5.0,
        };
        t.reset();
        assert_eq!(t, ImageTransform::default());
    }
}
