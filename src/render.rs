//! Draws the current design into a raster surface.

use crate::sizing::RasterTarget;
use crate::state::{ImageSize, ImageTransform, Placement};

/// A decoded image that can be measured.
pub trait RasterImage {
    fn size(&self) -> ImageSize;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: [ColorStop; 2],
}

impl LinearGradient {
    /// Light to darker grey, top-left to bottom-right.
    pub fn placeholder(width: f64, height: f64) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: width,
            y1: height,
            stops: [
                ColorStop {
                    offset: 0.0,
                    color: "#f0f0f0",
                },
                ColorStop {
                    offset: 1.0,
                    color: "#dddddd",
                },
            ],
        }
    }
}

/// The 2D raster the design is drawn into.
pub trait Surface {
    type Image: RasterImage;
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;
    /// Fills `(0, 0, width, height)` with the gradient.
    fn fill_gradient(
        &mut self,
        gradient: &LinearGradient,
        width: f64,
        height: f64,
    ) -> Result<(), Self::Error>;
    fn draw_image(&mut self, image: &Self::Image, at: Placement) -> Result<(), Self::Error>;
}

/// Clears the raster, then draws the image with its cover placement, or the placeholder
/// gradient when there is no drawable image.
pub fn render<S: Surface>(
    surface: &mut S,
    target: RasterTarget,
    transform: &ImageTransform,
    image: Option<&S::Image>,
) -> Result<(), S::Error> {
    let (w, h) = (target.width(), target.height());
    surface.clear(w, h)?;

    let placed = image.and_then(|img| transform.placement(img.size(), target).map(|p| (img, p)));
    match placed {
        Some((img, at)) => surface.draw_image(img, at),
        None => surface.fill_gradient(&LinearGradient::placeholder(w, h), w, h),
    }
}
