//! # sensorboard-dashboard
//!
//! Client-side rendered Leptos dashboard for the air-quality sensor fleet.
//!
//! ## Responsibilities
//! - Implement the `SensorApi` port over `gloo-net` ([`api`])
//! - Load configuration from the embedded TOML and page `<meta>` tags ([`config`])
//! - Route `tracing` output to the browser console ([`logging`])
//! - Render the fleet table and the seven metric charts, and run the two
//!   polling timers
//!
//! ## Dependency rule
//! Adapter crate: depends on `sensorboard-app` and `sensorboard-domain`.
//! All browser APIs stay in this crate.

use leptos::prelude::*;
use sensorboard_app::config::DashboardConfig;

pub mod api;
mod components;
pub mod config;
pub mod logging;
mod pages;

use pages::Dashboard;

/// Root application component.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Air Quality Monitor"</h1>
        </header>
        <main>
            <Dashboard config/>
        </main>
    }
}
