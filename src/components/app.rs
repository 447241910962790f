use std::rc::Rc;
use web_sys::{File, HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;

use super::{
    controls_panel::ControlsPanel, phone_preview::PhonePreview,
    print_info_panel::PrintInfoPanel, SessionHandle,
};
use crate::canvas::draw_session;
use crate::error::AppError;
use crate::export::download_canvas_png;
use crate::loader::decode_file;
use crate::model;
use crate::settings::{self, Settings};
use crate::state::Session;
use crate::util::{cerror, clog};

#[function_component(App)]
pub fn app() -> Html {
    let prefs = use_state(settings::load);
    let session = use_mut_ref(|| Session::<HtmlImageElement>::new(&prefs.model_key));
    let canvas_ref = use_node_ref();
    let update = use_force_update();

    // Redraw synchronously from the current session state
    let redraw: Rc<dyn Fn()> = {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        Rc::new(move || {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw_session(&canvas, &session.borrow());
            }
        })
    };

    let (model_key, physical, raster, transform, has_image, strategy, overlay, file_name) = {
        let s = session.borrow();
        (
            s.model_key().to_string(),
            *s.model(),
            s.raster(),
            s.transform(),
            s.has_image(),
            s.overlay_strategy(),
            s.overlay(),
            s.export_file_name(),
        )
    };
    let visual = session.borrow().visual_size(prefs.max_visual_height);

    // Resizing the canvas clears it, so draw again whenever the raster changes.
    {
        let redraw = redraw.clone();
        use_effect_with(raster, move |_| {
            redraw();
            || ()
        });
    }

    let on_select_model = {
        let session = session.clone();
        let prefs = prefs.clone();
        Callback::from(move |key: String| {
            session.borrow_mut().select_model(&key);
            let next = Settings {
                model_key: key,
                ..(*prefs).clone()
            };
            settings::save(&next);
            prefs.set(next);
        })
    };

    let on_file = {
        let session = session.clone();
        let redraw = redraw.clone();
        let update = update.clone();
        Callback::from(move |file: File| {
            let generation = session.borrow_mut().begin_load();
            let on_decoded = {
                let session = session.clone();
                let redraw = redraw.clone();
                let update = update.clone();
                Callback::from(move |result: Result<HtmlImageElement, AppError>| {
                    if session.borrow_mut().finish_load(generation, result) {
                        redraw();
                        update.force_update();
                    }
                })
            };
            if let Err(e) = decode_file(file, on_decoded) {
                cerror(&format!("could not read file: {e}"));
            }
        })
    };

    let slider = |apply: fn(&mut Session<HtmlImageElement>, f64)| {
        let session = session.clone();
        let redraw = redraw.clone();
        let update = update.clone();
        Callback::from(move |v: f64| {
            apply(&mut session.borrow_mut(), v);
            redraw();
            update.force_update();
        })
    };
    let on_scale = slider(Session::set_scale);
    let on_offset_x = slider(Session::set_offset_x);
    let on_offset_y = slider(Session::set_offset_y);

    let on_reset = {
        let session = session.clone();
        let redraw = redraw.clone();
        let update = update.clone();
        Callback::from(move |_| {
            session.borrow_mut().reset_view();
            redraw();
            update.force_update();
        })
    };

    let on_export = {
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |_| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                cerror("export: canvas not mounted");
                return;
            };
            if let Err(e) = download_canvas_png(&canvas, &file_name) {
                cerror(&format!("{e}"));
            }
        })
    };

    let on_change = {
        let update = update.clone();
        Callback::from(move |_| update.force_update())
    };

    let label = model::entry(&model_key)
        .map(|e| e.label.to_string())
        .unwrap_or_else(|| {
            clog(&format!("no catalog entry for '{model_key}'"));
            format!("{model_key} (default size)")
        });

    html! {
        <div id="root" style="min-height:100vh; display:flex; gap:24px; padding:24px; align-items:flex-start; flex-wrap:wrap; justify-content:center;">
            <PhonePreview
                canvas_ref={canvas_ref.clone()}
                session={SessionHandle(session.clone())}
                model_key={model_key.clone()}
                raster={raster}
                visual={visual}
                strategy={strategy}
                overlay={overlay}
                on_change={on_change}
            />
            <div style="display:flex; flex-direction:column; gap:12px;">
                <ControlsPanel
                    model_key={model_key}
                    transform={transform}
                    raster={raster}
                    has_image={has_image}
                    on_select_model={on_select_model}
                    on_file={on_file}
                    on_scale={on_scale}
                    on_offset_x={on_offset_x}
                    on_offset_y={on_offset_y}
                    on_reset={on_reset}
                    on_export={on_export}
                />
                <PrintInfoPanel
                    label={label}
                    physical={physical}
                    raster={raster}
                    transform={transform}
                    has_image={has_image}
                />
            </div>
        </div>
    }
}
