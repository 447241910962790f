use yew::prelude::*;

use crate::model::PlaceholderStyle;
use crate::overlay::{OverlayElement, OverlayRole, OverlayStrategy};

#[derive(Properties, PartialEq, Clone)]
pub struct CameraOverlayProps {
    pub model_key: String,
    pub strategy: OverlayStrategy,
    /// Elements already scaled to preview pixels.
    pub elements: Vec<OverlayElement>,
}

fn element_style(el: &OverlayElement) -> String {
    let fill = match el.role {
        OverlayRole::Lens => "background:rgba(10,12,16,0.85); border:3px solid #30363d;",
        OverlayRole::Flash => "background:#ffd966;",
        OverlayRole::Laser => "background:#888;",
    };
    format!(
        "position:absolute; box-sizing:border-box; border-radius:50%; left:{}px; top:{}px; width:{}px; height:{}px; {}",
        el.left_px, el.top_px, el.width_px, el.height_px, fill
    )
}

#[function_component(CameraOverlay)]
pub fn camera_overlay(props: &CameraOverlayProps) -> Html {
    let base = "position:absolute; pointer-events:none;";
    match props.strategy {
        OverlayStrategy::Precise(_) => html! {
            <div class="camera-overlay" style={format!("{base} inset:0;")}>
                { for props.elements.iter().map(|el| html! {
                    <div class={el.role.css_class()} style={element_style(el)}></div>
                }) }
            </div>
        },
        OverlayStrategy::Styled(PlaceholderStyle::LensColumn {
            lenses,
            lens_px,
            top_px,
            left_px,
            width_px,
            height_px,
        }) => html! {
            <div class="camera-overlay" style={format!(
                "{base} top:{top_px}px; left:{left_px}px; width:{width_px}px; height:{height_px}px; display:flex; flex-direction:column; justify-content:space-between;"
            )}>
                { for (0..lenses).map(|_| html! {
                    <div class="camera-lens" style={format!("width:{lens_px}px; height:{lens_px}px;")}></div>
                }) }
            </div>
        },
        OverlayStrategy::Styled(PlaceholderStyle::NoteCluster { lenses }) => html! {
            <div class={classes!("camera-overlay", props.model_key.clone())} style={base}>
                { for (0..lenses).map(|_| html! { <div class="camera-lens"></div> }) }
            </div>
        },
        OverlayStrategy::Styled(PlaceholderStyle::Island) => html! {
            <div class={classes!("camera-overlay", "island")} style={format!("{base} inset:0;")}></div>
        },
        OverlayStrategy::Styled(PlaceholderStyle::None) => html! {},
    }
}
