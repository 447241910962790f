//! `Surface` backed by a browser 2D canvas.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::AppError;
use crate::render::{LinearGradient, RasterImage, Surface};
use crate::state::{ImageSize, Placement, Session};
use crate::util::cerror;

impl RasterImage for HtmlImageElement {
    fn size(&self) -> ImageSize {
        ImageSize::new(self.natural_width() as f64, self.natural_height() as f64)
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, AppError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(AppError::dom)?
            .ok_or_else(|| AppError::missing("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Dom("context is not 2d".into()))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;
    type Error = AppError;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), AppError> {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).map_err(AppError::dom)?;
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_gradient(
        &mut self,
        gradient: &LinearGradient,
        width: f64,
        height: f64,
    ) -> Result<(), AppError> {
        let g = self
            .ctx
            .create_linear_gradient(gradient.x0, gradient.y0, gradient.x1, gradient.y1);
        for stop in &gradient.stops {
            g.add_color_stop(stop.offset as f32, stop.color)
                .map_err(AppError::dom)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_image(&mut self, image: &HtmlImageElement, at: Placement) -> Result<(), AppError> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, at.x, at.y, at.width, at.height)
            .map_err(AppError::dom)
    }
}

/// Redraws `session` into `canvas`, logging instead of failing.
pub fn draw_session(canvas: &HtmlCanvasElement, session: &Session<HtmlImageElement>) {
    if !canvas.is_connected() {
        return;
    }
    let result = CanvasSurface::from_canvas(canvas).and_then(|mut s| session.render(&mut s));
    if let Err(e) = result {
        cerror(&format!("render failed: {e}"));
    }
}
