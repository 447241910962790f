//! Decodes a user-selected file into an image element.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, HtmlImageElement};
use yew::Callback;

use crate::error::{describe_js, AppError};

/// Reads `file` as a data URL and decodes it. `on_done` fires exactly once.
pub fn decode_file(
    file: File,
    on_done: Callback<Result<HtmlImageElement, AppError>>,
) -> Result<(), AppError> {
    let reader = FileReader::new().map_err(AppError::dom)?;
    let name = file.name();

    let onload = {
        let reader = reader.clone();
        let on_done = on_done.clone();
        let name = name.clone();
        Closure::once(Box::new(move |_: web_sys::Event| {
            let url = match reader.result() {
                Ok(v) => v.as_string(),
                Err(e) => {
                    on_done.emit(Err(AppError::Decode(describe_js(&e))));
                    return;
                }
            };
            match url {
                Some(url) => decode_data_url(&url, name, on_done),
                None => on_done.emit(Err(AppError::Decode(format!("{name}: unreadable")))),
            }
        }) as Box<dyn FnOnce(_)>)
    };
    let onerror = {
        let on_done = on_done.clone();
        Closure::once(Box::new(move |_: web_sys::Event| {
            on_done.emit(Err(AppError::Decode(format!("{name}: read failed"))));
        }) as Box<dyn FnOnce(_)>)
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    reader.read_as_data_url(&file).map_err(AppError::dom)
}

fn decode_data_url(
    url: &str,
    name: String,
    on_done: Callback<Result<HtmlImageElement, AppError>>,
) {
    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            on_done.emit(Err(AppError::dom(e)));
            return;
        }
    };
    let onload = {
        let img = img.clone();
        let on_done = on_done.clone();
        let name = name.clone();
        Closure::once(Box::new(move |_: web_sys::Event| {
            if img.natural_width() == 0 || img.natural_height() == 0 {
                on_done.emit(Err(AppError::Decode(format!("{name}: image has no size"))));
            } else {
                on_done.emit(Ok(img));
            }
        }) as Box<dyn FnOnce(_)>)
    };
    let onerror = Closure::once(Box::new(move |_: web_sys::Event| {
        on_done.emit(Err(AppError::Decode(format!("{name}: not a supported image"))));
    }) as Box<dyn FnOnce(_)>);
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();
    img.set_src(url);
}
