//! PNG download of the print raster.

use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

use crate::error::{describe_js, AppError};
use crate::util::clog;

pub const PNG_MIME: &str = "image/png";

pub fn export_file_name(model_key: &str) -> String {
    format!("{model_key}-phone-case-300dpi.png")
}

/// Downloads the canvas at its own pixel size; nothing is resampled.
pub fn download_canvas_png(canvas: &HtmlCanvasElement, file_name: &str) -> Result<(), AppError> {
    let data_url = canvas
        .to_data_url_with_type(PNG_MIME)
        .map_err(|e| AppError::Export(describe_js(&e)))?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::missing("document"))?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(AppError::dom)?
        .dyn_into()
        .map_err(|_| AppError::Export("anchor element has unexpected type".into()))?;
    link.set_download(file_name);
    link.set_href(&data_url);
    link.click();
    clog(&format!(
        "exported {file_name} ({}x{})",
        canvas.width(),
        canvas.height()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_embeds_model_and_resolution() {
        assert_eq!(
            export_file_name("s23-ultra"),
            "s23-ultra-phone-case-300dpi.png"
        );
        assert_eq!(export_file_name("iphone-13"), "iphone-13-phone-case-300dpi.png");
    }
}
