use yew::prelude::*;

use crate::model::PhysicalModel;
use crate::sizing::RasterTarget;
use crate::state::ImageTransform;
use crate::units::{px_to_mm, DPI};
use crate::util::format_percent;

#[derive(Properties, PartialEq, Clone)]
pub struct PrintInfoPanelProps {
    pub label: String,
    pub physical: PhysicalModel,
    pub raster: RasterTarget,
    pub transform: ImageTransform,
    pub has_image: bool,
}

#[function_component]
pub fn PrintInfoPanel(props: &PrintInfoPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500; color:#8b949e;";
    let value_style =
        "min-width:110px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let t = props.transform;
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:8px; font-size:13px;">
            <div style="font-weight:600;">{ props.label.clone() }</div>
            <div style={row_style}>
                <span style={label_style}>{"Print size"}</span>
                <span style={value_style}>{ format!("{} × {} mm", props.physical.width_mm, props.physical.height_mm) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Raster"}</span>
                <span style={value_style}>{ format!("{} × {} px @ {} DPI", props.raster.width_px, props.raster.height_px, DPI) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Zoom"}</span>
                <span style={value_style}>{ format_percent(t.scale) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Offset"}</span>
                <span style={value_style}>{ format!("{:.0}, {:.0} px ({:.1}, {:.1} mm)", t.offset_x, t.offset_y, px_to_mm(t.offset_x), px_to_mm(t.offset_y)) }</span>
            </div>
            { if !props.has_image { html!{ <div style="font-size:11px; opacity:0.7;">{"No image loaded, showing placeholder"}</div> } } else { html!{} } }
        </div>
    }
}
