//! Browser-side configuration: the embedded `dashboard.toml`, overridden by
//! `<meta name="sensorboard:…">` tags injected into the host page.

use sensorboard_app::config::DashboardConfig;

const EMBEDDED: &str = include_str!("../dashboard.toml");
const META_PREFIX: &str = "sensorboard:";

/// Load the configuration, falling back to defaults when it is unusable.
///
/// Runs before the log subscriber exists, so failures go straight to the
/// console.
pub fn load() -> DashboardConfig {
    DashboardConfig::load(EMBEDDED, meta_content).unwrap_or_else(|err| {
        leptos::logging::error!("{err}; using built-in defaults");
        DashboardConfig::default()
    })
}

/// Content of `<meta name="sensorboard:{key}">`, if the page has one.
fn meta_content(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}
