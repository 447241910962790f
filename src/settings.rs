//! User preferences persisted in `localStorage`.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model;
use crate::sizing::DEFAULT_MAX_VISUAL_HEIGHT;
use crate::util::cwarn;

pub const STORAGE_KEY: &str = "pcd_settings";
pub const DEFAULT_MODEL_KEY: &str = "s23-ultra";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Model selected when the page was last used.
    pub model_key: String,
    /// Height of the on-screen preview in CSS pixels.
    pub max_visual_height: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_key: DEFAULT_MODEL_KEY.to_string(),
            max_visual_height: DEFAULT_MAX_VISUAL_HEIGHT,
        }
    }
}

impl Settings {
    fn sanitized(mut self) -> Self {
        if !self.max_visual_height.is_finite() || self.max_visual_height <= 0.0 {
            self.max_visual_height = DEFAULT_MAX_VISUAL_HEIGHT;
        }
        // the picker only offers catalog models
        if !model::is_known(&self.model_key) {
            cwarn(&format!("stored model '{}' is not in the catalog", self.model_key));
            self.model_key = DEFAULT_MODEL_KEY.to_string();
        }
        self
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn parse(raw: &str) -> Result<Settings, AppError> {
    let settings: Settings = serde_json::from_str(raw)?;
    Ok(settings.sanitized())
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored settings, or defaults when nothing usable is stored.
pub fn load() -> Settings {
    let Some(store) = storage() else {
        return Settings::default();
    };
    match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => parse(&raw).unwrap_or_else(|e| {
            cwarn(&format!("ignoring stored settings: {e}"));
            Settings::default()
        }),
        _ => Settings::default(),
    }
}

pub fn save(settings: &Settings) {
    let Some(store) = storage() else {
        return;
    };
    let result = settings
        .to_json()
        .and_then(|json| store.set_item(STORAGE_KEY, &json).map_err(AppError::dom));
    if let Err(e) = result {
        cwarn(&format!("could not save settings: {e}"));
    }
}
