//! The dashboard page: fleet table, chart panel and the two polling timers.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sensorboard_app::config::DashboardConfig;
use sensorboard_app::controller::DashboardController;
use sensorboard_app::state::DashboardState;
use sensorboard_domain::device::DeviceId;

use crate::api::HttpSensorApi;
use crate::components::{ChartPanel, Loading, ReadingTable};

type Controller = Rc<DashboardController<HttpSensorApi>>;

/// Dashboard page.
///
/// Owns the controller for the page's lifetime and mirrors its state into a
/// signal after every poll, click and response.
#[component]
pub fn Dashboard(config: DashboardConfig) -> impl IntoView {
    let controller: Controller = Rc::new(DashboardController::new(HttpSensorApi::new(&config)));
    let state = RwSignal::new(controller.snapshot());
    let (clicked, on_select) = signal(None::<DeviceId>);
    let interval_ms = config.polling.interval_ms;

    start_fleet_timer(Rc::clone(&controller), state, interval_ms);
    start_history_timer(Rc::clone(&controller), state, interval_ms);

    // Row clicks: highlight right away, then load the device's history.
    Effect::new(move |_| {
        let Some(device) = clicked.get() else {
            return;
        };
        let request = controller.select(device);
        state.set(controller.snapshot());
        let ctl = Rc::clone(&controller);
        spawn_local(async move {
            ctl.load_history(request).await;
            state.set(ctl.snapshot());
        });
    });

    let loading = Memo::new(move |_| state.with(DashboardState::is_loading));
    let table = Memo::new(move |_| state.with(|s| s.table().clone()));
    let highlighted = Memo::new(move |_| state.with(DashboardState::highlighted_row));
    let title = Memo::new(move |_| state.with(|s| s.selection().chart_title()));
    let charts = Memo::new(move |_| state.with(|s| s.charts().clone()));

    view! {
        <div class="dashboard">
            <section class="table-section">
                <h2>"Latest Readings"</h2>
                <Show when=move || loading.get()>
                    <Loading/>
                </Show>
                <ReadingTable table=table.into() highlighted=highlighted.into() on_select/>
            </section>
            <ChartPanel title=title.into() charts=charts.into()/>
        </div>
    }
}

/// Fleet timer: poll immediately, then every `interval_ms`, forever. Each
/// tick runs as its own task so a slow response never delays the timer.
fn start_fleet_timer(ctl: Controller, state: RwSignal<DashboardState>, interval_ms: u32) {
    spawn_local(async move {
        loop {
            let tick = Rc::clone(&ctl);
            spawn_local(async move {
                tick.refresh_fleet().await;
                state.set(tick.snapshot());
            });
            TimeoutFuture::new(interval_ms).await;
        }
    });
}

/// History timer: every `interval_ms`, reload the selected device (a no-op
/// while nothing is selected).
fn start_history_timer(ctl: Controller, state: RwSignal<DashboardState>, interval_ms: u32) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            let tick = Rc::clone(&ctl);
            spawn_local(async move {
                tick.refresh_history().await;
                state.set(tick.snapshot());
            });
        }
    });
}
