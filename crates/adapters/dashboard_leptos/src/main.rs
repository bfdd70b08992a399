use leptos::prelude::*;
use sensorboard_dashboard::{App, config, logging};

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    logging::init(&config.logging.filter);
    tracing::info!(
        fleet_url = %config.api.fleet_url,
        interval_ms = config.polling.interval_ms,
        "starting sensorboard dashboard"
    );

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
