use std::fmt;

use wasm_bindgen::JsValue;

use crate::components::progress::DEFAULT_MAX;

/// Startup settings for the demo page, overridable from the URL query string:
/// `?value=30&max=200&step=5&tick=250`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub initial_value: f64,
    pub max: f64,
    pub step: f64,
    /// Autoplay interval in milliseconds.
    pub tick_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_value: 0.0,
            max: DEFAULT_MAX,
            step: 10.0,
            tick_ms: 500,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidNumber { key: String, value: String },
    ZeroTick,
    InvalidStep(f64),
    Browser(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "Invalid number for '{}': {}", key, value)
            }
            Self::ZeroTick => write!(f, "Autoplay tick must be greater than zero"),
            Self::InvalidStep(step) => {
                write!(f, "Step must be a positive finite number, got {}", step)
            }
            Self::Browser(msg) => write!(f, "Cannot read page location: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<JsValue> for ConfigError {
    fn from(value: JsValue) -> Self {
        let msg = if let Some(msg) = value.as_string() {
            msg
        } else if let Some(msg) = js_sys::Error::from(value).message().as_string() {
            msg
        } else {
            "Unknown error".to_string()
        };

        ConfigError::Browser(msg)
    }
}

impl AppConfig {
    /// Read overrides from the current page's query string.
    pub fn from_location() -> Result<Self, ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::Browser("no global window exists".to_string()))?;
        let search = window.location().search()?;
        Self::from_query(&search)
    }

    /// Apply `key=value` pairs from a query string on top of the defaults.
    ///
    /// Unknown keys and empty values are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .filter(|(_, value)| !value.is_empty());

        for (key, value) in pairs {
            match key {
                "value" => config.initial_value = parse(key, value)?,
                "max" => config.max = parse(key, value)?,
                "step" => config.step = parse(key, value)?,
                "tick" => config.tick_ms = parse(key, value)?,
                _ => {}
            }
        }

        if config.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if !config.step.is_finite() || config.step <= 0.0 {
            return Err(ConfigError::InvalidStep(config.step));
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}
