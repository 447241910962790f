// Drag, pinch and wheel handling on top of ImageTransform.
use super::transform::ImageTransform;

/// Wheel zoom sensitivity per unit of `deltaY`.
pub const WHEEL_ZOOM_RATE: f64 = 0.001;

/// Position in raster pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Touch points of one event, classified once per batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchBatch {
    NoTouch,
    OneTouch(Point),
    /// Extra fingers beyond the first two are ignored.
    TwoTouch(Point, Point),
}

impl TouchBatch {
    pub fn from_points(points: &[Point]) -> Self {
        match points {
            [] => TouchBatch::NoTouch,
            [p] => TouchBatch::OneTouch(*p),
            [a, b, ..] => TouchBatch::TwoTouch(*a, *b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last: Point },
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PinchState {
    pub last_distance: Option<f64>,
}

impl PinchState {
    /// Applies the distance ratio since the previous frame. The first frame only seeds.
    fn update(&mut self, distance: f64, transform: &mut ImageTransform) -> bool {
        if !distance.is_finite() || distance <= 0.0 {
            self.last_distance = None;
            return false;
        }
        let changed = match self.last_distance {
            Some(last) if last > 0.0 => transform.zoom_by(distance / last),
            _ => false,
        };
        self.last_distance = Some(distance);
        changed
    }
}

/// Per-interaction state for mouse and touch input. Both gesture kinds keep their own
/// tracking fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureController {
    drag: DragState,
    pinch: PinchState,
}

impl GestureController {
    #[cfg(test)]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[cfg(test)]
    pub fn pinch_state(&self) -> PinchState {
        self.pinch
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn press(&mut self, at: Point) {
        self.drag = DragState::Dragging { last: at };
    }

    /// Pans by the movement since the last position. No-op while idle.
    pub fn drag_to(&mut self, at: Point, transform: &mut ImageTransform) -> bool {
        let DragState::Dragging { last } = self.drag else {
            return false;
        };
        self.drag = DragState::Dragging { last: at };
        transform.pan_by(at.x - last.x, at.y - last.y)
    }

    /// Mouse up or pointer leaving the surface.
    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn touch_start(&mut self, batch: TouchBatch) {
        match batch {
            TouchBatch::OneTouch(p) => self.press(p),
            TouchBatch::TwoTouch(..) => self.drag = DragState::Idle,
            TouchBatch::NoTouch => {}
        }
    }

    pub fn touch_move(&mut self, batch: TouchBatch, transform: &mut ImageTransform) -> bool {
        match batch {
            TouchBatch::OneTouch(p) => {
                if self.is_dragging() {
                    self.drag_to(p, transform)
                } else {
                    self.press(p);
                    false
                }
            }
            TouchBatch::TwoTouch(a, b) => self.pinch.update(a.distance(b), transform),
            TouchBatch::NoTouch => false,
        }
    }

    /// `remaining` holds the touches still down after the end/cancel event.
    pub fn touch_end(&mut self, remaining: TouchBatch) {
        self.pinch.last_distance = None;
        match remaining {
            TouchBatch::OneTouch(p) => self.press(p),
            TouchBatch::NoTouch => self.release(),
            TouchBatch::TwoTouch(..) => {}
        }
    }

    pub fn wheel(&mut self, delta_y: f64, transform: &mut ImageTransform) -> bool {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return false;
        }
        transform.zoom_by((-delta_y * WHEEL_ZOOM_RATE).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::transform::{MAX_SCALE, MIN_SCALE};

    fn two(dist: f64) -> TouchBatch {
        TouchBatch::TwoTouch(Point::new(0.0, 0.0), Point::new(dist, 0.0))
    }

    #[test]
    fn classifier_counts_touches() {
        assert_eq!(TouchBatch::from_points(&[]), TouchBatch::NoTouch);
        let p = Point::new(1.0, 2.0);
        let q = Point::new(3.0, 4.0);
        assert_eq!(TouchBatch::from_points(&[p]), TouchBatch::OneTouch(p));
        assert_eq!(TouchBatch::from_points(&[p, q]), TouchBatch::TwoTouch(p, q));
        assert_eq!(
            TouchBatch::from_points(&[p, q, Point::default()]),
            TouchBatch::TwoTouch(p, q)
        );
    }

    #[test]
    fn mouse_drag_pans_by_delta() {
        let mut g = GestureController::default();
        let mut t = ImageTransform::default();
        assert!(!g.drag_to(Point::new(5.0, 5.0), &mut t));
        g.press(Point::new(10.0, 10.0));
        assert!(g.drag_to(Point::new(15.0, 8.0), &mut t));
        assert!(g.drag_to(Point::new(20.0, 8.0), &mut t));
        assert_eq!((t.offset_x, t.offset_y), (10.0, -2.0));
        g.release();
        assert!(!g.is_dragging());
        assert!(!g.drag_to(Point::new(100.0, 100.0), &mut t));
        assert_eq!((t.offset_x, t.offset_y), (10.0, -2.0));
    }

    #[test]
    fn offsets_accumulate_across_drag_sessions() {
        let mut g = GestureController::default();
        let mut t = ImageTransform::default();
        g.press(Point::new(0.0, 0.0));
        g.drag_to(Point::new(30.0, 40.0), &mut t);
        g.release();
        g.press(Point::new(200.0, 200.0));
        g.drag_to(Point::new(190.0, 210.0), &mut t);
        g.release();
        assert_eq!((t.offset_x, t.offset_y), (20.0, 50.0));
    }

    #[test]
    fn pinch_seeds_then_scales() {
        let mut g = GestureController::default();
        let mut t = ImageTransform::default();
        g.touch_start(two(100.0));
        assert!(!g.touch_move(two(100.0), &mut t));
        assert_eq!(g.pinch_state().last_distance, Some(100.0));
        assert_eq!(t.scale, 1.0);
        assert!(g.touch_move(two(150.0), &mut t));
        assert!((t.scale - 1.5).abs() < 1e-12);
        assert!(g.touch_move(two(75.0), &mut t));
        assert!((t.scale - 0.75).abs() < 1e-12);
    }

    #[test]
    fn pinch_clamps_scale() {
        let mut g = GestureController::default();
        let mut t = ImageTransform::default();
        g.touch_move(two(1.0), &mut t);
        g.touch_move(two(100.0), &mut t);
        assert_eq!(t.scale, MAX_SCALE);

        g.touch_end(TouchBatch::NoTouch);
        t.reset();
        g.touch_move(two(1000.0), &mut t);
        g.touch_move(two(1.0), &mut t);
        assert_eq!(t.scale, MIN_SCALE);
    }

    #[test]
    fn zero_distance_never_divides() {
        let mut g = GestureController::default();
        let mut t = ImageTransform::default();
        assert!(!g.touch_move(two(0.0), &mut t));
        assert_eq!(g.pinch_state().last_distance, None);
        assert!(!g.touch_move(two(50.0), &mut t));
        assert!(!g.touch_move(two(0.0), &mut t));
        assert_eq!(t.scale, 1.0);
        assert!(t.scale.is_finite());
    }

    #[test]
    fn touch_end_reseeds_next_pinch() {
        let mut g = GestureController::default();
        let mut t = ImageTransform::default();
        g.touch_move(two(100.0), &mut t);
        g.touch_move(two(200.0), &mut t);
        assert!((t.scale - 2.0).abs() < 1e-12);
        g.touch_end(TouchBatch::NoTouch);
        assert_eq!(g.pinch_state().last_distance, None);
        // new gesture starting far apart must not jump
        assert!(!g.touch_move(two(400.0), &mut t));
        assert!((t.scale - 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_touch_pans_and_pinch_keeps_its_own_state() {
        let mut g = GestureController::default();
        let mut t = ImageTransform::default();
        g.touch_start(TouchBatch::OneTouch(Point::new(10.0, 10.0)));
        assert!(g.touch_move(TouchBatch::OneTouch(Point::new(14.0, 13.0)), &mut t));
        assert_eq!((t.offset_x, t.offset_y), (4.0, 3.0));

        g.touch_start(two(50.0));
        assert!(!g.is_dragging());
        g.touch_move(two(50.0), &mut t);
        g.touch_move(two(100.0), &mut t);
        assert_eq!((t.offset_x, t.offset_y), (4.0, 3.0));

        // lifting one finger continues the pan from where that finger is
        g.touch_end(TouchBatch::OneTouch(Point::new(60.0, 60.0)));
        assert_eq!(
            g.drag_state(),
            DragState::Dragging {
                last: Point::new(60.0, 60.0)
            }
        );
        g.touch_move(TouchBatch::OneTouch(Point::new(61.0, 62.0)), &mut t);
        assert_eq!((t.offset_x, t.offset_y), (5.0, 5.0));
    }

    #[test]
    fn wheel_zooms_with_clamp() {
        let mut g = GestureController::default();
        let mut t = ImageTransform::default();
        assert!(g.wheel(-100.0, &mut t));
        assert!(t.scale > 1.0);
        assert!(!g.wheel(0.0, &mut t));
        g.wheel(5000.0, &mut t);
        assert_eq!(t.scale, MIN_SCALE);
    }
}
