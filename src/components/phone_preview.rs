use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent, TouchList, WheelEvent};
use yew::prelude::*;

use super::camera_overlay::CameraOverlay;
use super::SessionHandle;
use crate::canvas::draw_session;
use crate::overlay::{OverlayElement, OverlayStrategy};
use crate::sizing::{display_to_raster, RasterTarget, VisualSize};
use crate::state::{Point, TouchBatch};

#[derive(Properties, PartialEq, Clone)]
pub struct PhonePreviewProps {
    pub canvas_ref: NodeRef,
    pub session: SessionHandle,
    pub model_key: String,
    pub raster: RasterTarget,
    pub visual: VisualSize,
    pub strategy: OverlayStrategy,
    /// Overlay in raster pixels; scaled here to the preview.
    pub overlay: Vec<OverlayElement>,
    /// Fired after a gesture changed the transform and the canvas was redrawn.
    pub on_change: Callback<()>,
}

// Client coordinates -> raster pixels through the element's on-screen rect.
fn to_raster(canvas: &HtmlCanvasElement, raster: RasterTarget, client_x: f64, client_y: f64) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let (x, y) = display_to_raster(
        client_x - rect.left(),
        client_y - rect.top(),
        rect.width(),
        rect.height(),
        raster,
    );
    Point::new(x, y)
}

fn touch_batch(canvas: &HtmlCanvasElement, raster: RasterTarget, touches: &TouchList) -> TouchBatch {
    let points: Vec<Point> = (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| to_raster(canvas, raster, t.client_x() as f64, t.client_y() as f64))
        .collect();
    TouchBatch::from_points(&points)
}

#[function_component(PhonePreview)]
pub fn phone_preview(props: &PhonePreviewProps) -> Html {
    {
        let canvas_ref = props.canvas_ref.clone();
        let session = props.session.0.clone();
        let on_change = props.on_change.clone();

        use_effect_with((), move |_| {
            let canvas: Option<HtmlCanvasElement> = canvas_ref.cast::<HtmlCanvasElement>();
            let listeners = canvas.map(|canvas| {
                let changed: Rc<dyn Fn()> = {
                    let canvas = canvas.clone();
                    let session = session.clone();
                    Rc::new(move || {
                        draw_session(&canvas, &session.borrow());
                        on_change.emit(());
                    })
                };

                // Mouse drag
                let mousedown_cb = {
                    let canvas = canvas.clone();
                    let session = session.clone();
                    Closure::wrap(Box::new(move |e: MouseEvent| {
                        e.prevent_default();
                        let raster = session.borrow().raster();
                        let p = to_raster(&canvas, raster, e.client_x() as f64, e.client_y() as f64);
                        session.borrow_mut().pointer_down(p);
                    }) as Box<dyn FnMut(_)>)
                };
                let mousemove_cb = {
                    let canvas = canvas.clone();
                    let session = session.clone();
                    let changed = changed.clone();
                    Closure::wrap(Box::new(move |e: MouseEvent| {
                        let raster = session.borrow().raster();
                        let p = to_raster(&canvas, raster, e.client_x() as f64, e.client_y() as f64);
                        let moved = session.borrow_mut().pointer_move(p);
                        if moved {
                            changed();
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                let mouseup_cb = {
                    let session = session.clone();
                    Closure::wrap(Box::new(move |_e: MouseEvent| {
                        session.borrow_mut().pointer_up();
                    }) as Box<dyn FnMut(_)>)
                };
                // Wheel zoom
                let wheel_cb = {
                    let session = session.clone();
                    let changed = changed.clone();
                    Closure::wrap(Box::new(move |e: WheelEvent| {
                        e.prevent_default();
                        let zoomed = session.borrow_mut().wheel(e.delta_y());
                        if zoomed {
                            changed();
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                // Touch pan + pinch
                let touch_start_cb = {
                    let canvas = canvas.clone();
                    let session = session.clone();
                    Closure::wrap(Box::new(move |e: TouchEvent| {
                        let raster = session.borrow().raster();
                        let batch = touch_batch(&canvas, raster, &e.touches());
                        session.borrow_mut().touch_start(batch);
                    }) as Box<dyn FnMut(_)>)
                };
                let touch_move_cb = {
                    let canvas = canvas.clone();
                    let session = session.clone();
                    let changed = changed.clone();
                    Closure::wrap(Box::new(move |e: TouchEvent| {
                        e.prevent_default();
                        let raster = session.borrow().raster();
                        let batch = touch_batch(&canvas, raster, &e.touches());
                        let moved = session.borrow_mut().touch_move(batch);
                        if moved {
                            changed();
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                let touch_end_cb = {
                    let canvas = canvas.clone();
                    let session = session.clone();
                    Closure::wrap(Box::new(move |e: TouchEvent| {
                        let raster = session.borrow().raster();
                        let remaining = touch_batch(&canvas, raster, &e.touches());
                        session.borrow_mut().touch_end(remaining);
                    }) as Box<dyn FnMut(_)>)
                };

                let mouse: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)> = vec![
                    ("mousedown", mousedown_cb),
                    ("mousemove", mousemove_cb),
                    ("mouseup", mouseup_cb),
                ];
                for (name, cb) in &mouse {
                    canvas
                        .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                        .ok();
                }
                // leaving the surface ends the drag like a release
                canvas
                    .add_event_listener_with_callback("mouseleave", mouse[2].1.as_ref().unchecked_ref())
                    .ok();
                canvas
                    .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                    .ok();
                let touch: Vec<(&'static str, Closure<dyn FnMut(TouchEvent)>)> = vec![
                    ("touchstart", touch_start_cb),
                    ("touchmove", touch_move_cb),
                    ("touchend", touch_end_cb),
                ];
                for (name, cb) in &touch {
                    canvas
                        .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                        .ok();
                }
                canvas
                    .add_event_listener_with_callback("touchcancel", touch[2].1.as_ref().unchecked_ref())
                    .ok();
                (canvas, mouse, wheel_cb, touch)
            });

            // Cleanup
            move || {
                if let Some((canvas, mouse, wheel_cb, touch)) = listeners {
                    for (name, cb) in &mouse {
                        let _ = canvas
                            .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
                    }
                    let _ = canvas.remove_event_listener_with_callback(
                        "mouseleave",
                        mouse[2].1.as_ref().unchecked_ref(),
                    );
                    let _ = canvas
                        .remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                    for (name, cb) in &touch {
                        let _ = canvas
                            .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
                    }
                    let _ = canvas.remove_event_listener_with_callback(
                        "touchcancel",
                        touch[2].1.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let display_scale = props.visual.display_scale(props.raster);
    let elements: Vec<OverlayElement> = props
        .overlay
        .iter()
        .map(|el| el.scaled(display_scale))
        .collect();

    html! {
        <div class={classes!("phone-wrapper", props.model_key.clone())}
            style={format!(
                "position:relative; width:{}px; height:{}px; border-radius:24px; overflow:hidden; border:2px solid #30363d; touch-action:none;",
                props.visual.width, props.visual.height
            )}>
            <canvas ref={props.canvas_ref.clone()} id="bgCanvas"
                width={props.raster.width_px.to_string()}
                height={props.raster.height_px.to_string()}
                style="display:block; width:100%; height:100%; cursor:grab;"></canvas>
            <CameraOverlay model_key={props.model_key.clone()} strategy={props.strategy} elements={elements} />
        </div>
    }
}
