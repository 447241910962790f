use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::model::CATALOG;
use crate::sizing::RasterTarget;
use crate::state::transform::{ImageTransform, MAX_SCALE, MIN_SCALE};

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub model_key: String,
    pub transform: ImageTransform,
    pub raster: RasterTarget,
    pub has_image: bool,
    pub on_select_model: Callback<String>,
    pub on_file: Callback<File>,
    pub on_scale: Callback<f64>,
    pub on_offset_x: Callback<f64>,
    pub on_offset_y: Callback<f64>,
    pub on_reset: Callback<()>,
    pub on_export: Callback<()>,
}

fn slider_input(cb: &Callback<f64>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Ok(v) = input.value().parse::<f64>() {
            cb.emit(v);
        }
    })
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let select_cb = {
        let cb = props.on_select_model.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };
    let file_cb = {
        let cb = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|f| f.get(0)) {
                cb.emit(file);
            }
            // allow picking the same file again
            input.set_value("");
        })
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let export_cb = {
        let cb = props.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let t = props.transform;
    let max_x = props.raster.width_px.max(1) as f64;
    let max_y = props.raster.height_px.max(1) as f64;
    let row_style = "display:flex; flex-direction:column; gap:4px; font-size:12px;";

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px;">
        <label style={row_style}>
            <span>{"Phone model"}</span>
            <select onchange={select_cb}>
                { for CATALOG.iter().map(|e| html! {
                    <option value={e.key} selected={e.key == props.model_key}>{ e.label }</option>
                }) }
            </select>
        </label>
        <label style={row_style}>
            <span>{"Background image"}</span>
            <input type="file" accept="image/*" onchange={file_cb} />
        </label>
        <label style={row_style}>
            <span>{ format!("Scale ({:.2})", t.scale) }</span>
            <input type="range" min={MIN_SCALE.to_string()} max={MAX_SCALE.to_string()} step="0.01"
                value={t.scale.to_string()} oninput={slider_input(&props.on_scale)} />
        </label>
        <label style={row_style}>
            <span>{ format!("Offset X ({:.0} px)", t.offset_x) }</span>
            <input type="range" min={(-max_x).to_string()} max={max_x.to_string()} step="1"
                value={t.offset_x.to_string()} oninput={slider_input(&props.on_offset_x)} />
        </label>
        <label style={row_style}>
            <span>{ format!("Offset Y ({:.0} px)", t.offset_y) }</span>
            <input type="range" min={(-max_y).to_string()} max={max_y.to_string()} step="1"
                value={t.offset_y.to_string()} oninput={slider_input(&props.on_offset_y)} />
        </label>
        <div style="display:flex; gap:8px;">
            <button onclick={reset_cb} disabled={!props.has_image} style="flex:1;">{"Reset view"}</button>
            <button onclick={export_cb} style="flex:1; background:#238636; border:1px solid #2ea043; color:#fff;">{"Download PNG"}</button>
        </div>
        <div style="font-size:11px; opacity:0.7;">{"Drag to move, pinch or scroll to zoom"}</div>
    </div>}
}
