use chrono::NaiveDate;
use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::AppError;

const CONFIG_GLOBAL: &str = "__HOSTELHUB_CONFIG";

/// Raw shape of `window.__HOSTELHUB_CONFIG`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub time_zone: Option<String>,
    pub initial_selected_date: Option<NaiveDate>,
}

/// Config with every fallback applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub time_zone: Tz,
    pub initial_selected_date: NaiveDate,
}

impl Default for AppConfig {
    fn default() -> Self {
        RuntimeConfig::default().resolve()
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn default_selected_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap_or_default()
}

pub fn parse_time_zone(name: &str) -> Result<Tz, AppError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::Config(format!("unknown time zone `{}`", name)))
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|err| AppError::Config(err.to_string()))
    }

    pub fn resolve(&self) -> AppConfig {
        let time_zone = match self.time_zone.as_deref() {
            Some(name) => parse_time_zone(name).unwrap_or_else(|err| {
                warn!("{}; falling back to UTC", err);
                Tz::UTC
            }),
            None => Tz::UTC,
        };
        AppConfig {
            time_zone,
            initial_selected_date: self
                .initial_selected_date
                .unwrap_or_else(default_selected_date),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

fn load() -> AppConfig {
    let Some(raw) = snapshot_from_globals() else {
        return AppConfig::default();
    };
    match RuntimeConfig::from_json(&raw) {
        Ok(cfg) => cfg.resolve(),
        Err(err) => {
            warn!("{} in {}; using defaults", err, CONFIG_GLOBAL);
            AppConfig::default()
        }
    }
}

/// Reads the global config once and caches it for the page lifetime.
pub fn current() -> AppConfig {
    *APP_CONFIG.get_or_init(load)
}
