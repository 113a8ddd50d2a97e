//! Build-time configuration for the auth endpoints with an optional runtime
//! override. The runtime config is read from `window.AUTHPAGES_CONFIG` (if
//! present) so the server templates can point the pages at another host
//! without rebuilding. Configuration values are public; do not store secrets
//! here.

use tracing::Level;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Prefix for the auth endpoints. Empty means same-origin relative paths.
    pub api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("AUTHPAGES_API_BASE_URL").unwrap_or("");
        let log_level = option_env!("AUTHPAGES_LOG_LEVEL")
            .and_then(parse_log_level)
            .unwrap_or(Level::INFO);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            log_level,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_log_level) {
        config.log_level = level;
    }
}

/// Accepts the usual level names in any case; anything else is ignored.
fn parse_log_level(value: &str) -> Option<Level> {
    value.trim().parse::<Level>().ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AUTHPAGES_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
