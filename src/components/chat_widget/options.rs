//! Widget configuration, read from the JS options object or from the
//! `data-*` attributes of a `[data-chatbot]` host element.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::constants::{DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_PLACEHOLDER, DEFAULT_WIDGET_TITLE};

/// Screen corner the widget is pinned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Position {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bottom-right" => Some(Position::BottomRight),
            "bottom-left" => Some(Position::BottomLeft),
            "top-right" => Some(Position::TopRight),
            "top-left" => Some(Position::TopLeft),
            _ => None,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Options exactly as the embedding page supplied them. Every key is
/// optional; blank strings count as missing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOptions {
    pub api_url: Option<String>,
    pub position: Option<String>,
    pub theme: Option<String>,
    pub model: Option<String>,
    pub title: Option<String>,
    pub placeholder: Option<String>,
    pub api_key: Option<String>,
}

/// Resolved widget configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetOptions {
    pub api_url: String,
    pub position: Position,
    pub theme: Theme,
    pub model: String,
    pub title: String,
    pub placeholder: String,
    /// Accepted for compatibility with existing embeds. Not attached to any
    /// request: the backend has no auth scheme for the chat endpoint yet.
    pub api_key: String,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self::from_raw(RawOptions::default())
    }
}

impl WidgetOptions {
    pub fn from_raw(raw: RawOptions) -> Self {
        fn pick(value: Option<String>, default: &str) -> String {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        }

        let position = raw.position.as_deref().and_then(|p| {
            let parsed = Position::parse(p.trim());
            if parsed.is_none() {
                log::warn!("unknown widget position {:?}, using bottom-right", p);
            }
            parsed
        });
        let theme = raw.theme.as_deref().and_then(|t| {
            let parsed = Theme::parse(t.trim());
            if parsed.is_none() {
                log::warn!("unknown widget theme {:?}, using light", t);
            }
            parsed
        });

        Self {
            api_url: pick(raw.api_url, DEFAULT_API_URL),
            position: position.unwrap_or_default(),
            theme: theme.unwrap_or_default(),
            model: pick(raw.model, DEFAULT_MODEL),
            title: pick(raw.title, DEFAULT_WIDGET_TITLE),
            placeholder: pick(raw.placeholder, DEFAULT_PLACEHOLDER),
            api_key: raw.api_key.unwrap_or_default(),
        }
    }

    /// Parse the options object handed to the JS constructor. `undefined`
    /// and `null` select all defaults.
    pub fn from_js(value: JsValue) -> Result<Self, serde_wasm_bindgen::Error> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let raw: RawOptions = serde_wasm_bindgen::from_value(value)?;
        Ok(Self::from_raw(raw))
    }

    /// Build options from `data-*` attributes. `lookup` receives the
    /// camelCase dataset key (`apiUrl`, `position`, ...).
    pub fn from_dataset(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_raw(RawOptions {
            api_url: lookup("apiUrl"),
            position: lookup("position"),
            theme: lookup("theme"),
            model: lookup("model"),
            title: lookup("title"),
            placeholder: lookup("placeholder"),
            api_key: None,
        })
    }
}
