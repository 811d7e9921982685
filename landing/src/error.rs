//! Error type shared by the config loader, the browser glue and the prerender.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while setting up the page.
///
/// None of these are fatal for the visitor: callers log them and fall back to
/// defaults or to the static backdrop.
#[derive(Debug, Error)]
pub enum LandingError {
    /// The TOML page configuration could not be parsed.
    #[error("invalid page config: {0}")]
    Config(#[from] toml::de::Error),

    /// A browser global (`window`, `document`) is missing.
    #[error("browser API unavailable: {0}")]
    BrowserUnavailable(&'static str),

    /// A DOM call threw.
    #[error("browser call failed during {context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LandingError {
    /// Wrap a thrown JS value, keeping a short label of what was being done.
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;
