// Session controller: owns the active model, the decoded image and the view transform.
use crate::error::AppError;
use crate::export::export_file_name;
use crate::model::{self, PhysicalModel};
use crate::overlay::{OverlayElement, OverlayStrategy};
use crate::render::{render, RasterImage, Surface};
use crate::sizing::{compute_raster_size, compute_visual_size, RasterTarget, VisualSize};
use crate::util::{clog, cwarn};

use super::gesture::{GestureController, Point, TouchBatch};
use super::transform::ImageTransform;

#[derive(Debug)]
pub struct Session<I> {
    model_key: String,
    model: PhysicalModel,
    raster: RasterTarget,
    transform: ImageTransform,
    image: Option<I>,
    gestures: GestureController,
    // Bumped for every file pick; only the newest decode may land.
    load_generation: u64,
}

impl<I: RasterImage> Session<I> {
    pub fn new(model_key: &str) -> Self {
        let mut session = Self {
            model_key: String::new(),
            model: model::DEFAULT_MODEL,
            raster: RasterTarget::default(),
            transform: ImageTransform::default(),
            image: None,
            gestures: GestureController::default(),
            load_generation: 0,
        };
        session.select_model(model_key);
        session
    }

    /// Switches the print target. The transform and image are kept.
    pub fn select_model(&mut self, key: &str) {
        if !model::is_known(key) {
            cwarn(&format!("unknown model '{key}', using default dimensions"));
        }
        self.model_key = key.to_string();
        self.model = model::lookup(key);
        self.raster = compute_raster_size(&self.model);
        clog(&format!(
            "model {key}: {}x{} px",
            self.raster.width_px, self.raster.height_px
        ));
    }

    /// Installs a freshly decoded image and resets the view to cover.
    pub fn set_image(&mut self, image: I) {
        let size = image.size();
        clog(&format!("image loaded: {}x{}", size.width, size.height));
        self.image = Some(image);
        self.transform.reset();
        self.gestures = GestureController::default();
    }

    /// A failed decode leaves no image loaded; the transform is kept for the next image.
    pub fn image_failed(&mut self, err: &AppError) {
        cwarn(&format!("image not loaded: {err}"));
        self.image = None;
        self.gestures = GestureController::default();
    }

    /// Starts a new file load and returns its generation. Earlier loads become stale.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    /// Applies a finished decode if it belongs to the latest load. Returns whether it was applied.
    pub fn finish_load(&mut self, generation: u64, result: Result<I, AppError>) -> bool {
        if generation != self.load_generation {
            clog(&format!(
                "dropping stale image load {generation} (latest {})",
                self.load_generation
            ));
            return false;
        }
        match result {
            Ok(image) => self.set_image(image),
            Err(e) => self.image_failed(&e),
        }
        true
    }

    pub fn model_key(&self) -> &str {
        &self.model_key
    }

    pub fn model(&self) -> &PhysicalModel {
        &self.model
    }

    pub fn raster(&self) -> RasterTarget {
        self.raster
    }

    pub fn transform(&self) -> ImageTransform {
        self.transform
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn visual_size(&self, max_visual_height: f64) -> VisualSize {
        compute_visual_size(self.raster, max_visual_height)
    }

    pub fn overlay_strategy(&self) -> OverlayStrategy {
        OverlayStrategy::for_key(&self.model_key)
    }

    /// Overlay elements in raster pixels.
    pub fn overlay(&self) -> Vec<OverlayElement> {
        self.overlay_strategy().elements()
    }

    pub fn export_file_name(&self) -> String {
        export_file_name(&self.model_key)
    }

    // Slider input

    pub fn set_scale(&mut self, scale: f64) {
        self.transform.set_scale(scale);
    }

    pub fn set_offset_x(&mut self, x: f64) {
        self.transform.set_offset_x(x);
    }

    pub fn set_offset_y(&mut self, y: f64) {
        self.transform.set_offset_y(y);
    }

    pub fn reset_view(&mut self) {
        self.transform.reset();
    }

    // Pointer and touch input, positions in raster pixels

    pub fn pointer_down(&mut self, at: Point) {
        self.gestures.press(at);
    }

    pub fn pointer_move(&mut self, at: Point) -> bool {
        self.gestures.drag_to(at, &mut self.transform)
    }

    pub fn pointer_up(&mut self) {
        self.gestures.release();
    }

    pub fn touch_start(&mut self, batch: TouchBatch) {
        self.gestures.touch_start(batch);
    }

    pub fn touch_move(&mut self, batch: TouchBatch) -> bool {
        self.gestures.touch_move(batch, &mut self.transform)
    }

    pub fn touch_end(&mut self, remaining: TouchBatch) {
        self.gestures.touch_end(remaining);
    }

    pub fn wheel(&mut self, delta_y: f64) -> bool {
        self.gestures.wheel(delta_y, &mut self.transform)
    }

    pub fn render<S: Surface<Image = I>>(&self, surface: &mut S) -> Result<(), S::Error> {
        render(surface, self.raster, &self.transform, self.image.as_ref())
    }
}
