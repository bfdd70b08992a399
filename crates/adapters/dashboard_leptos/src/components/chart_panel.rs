//! Chart panel: placeholder until a device is selected, then the seven
//! metric charts.

use leptos::prelude::*;
use sensorboard_domain::chart::ChartSet;
use sensorboard_domain::metric::Metric;

use crate::components::MetricChart;

/// The chart section of the dashboard.
///
/// Each [`MetricChart`] is mounted once and stays mounted; switching device
/// only feeds it new data.
#[component]
pub fn ChartPanel(
    /// `Device <id> Charts` once something is selected.
    title: Signal<Option<String>>,
    charts: Signal<ChartSet>,
) -> impl IntoView {
    let selected = move || title.with(Option::is_some);

    view! {
        <section class="chart-section">
            <h2 id="chart-title">
                {move || title.get().unwrap_or_else(|| "Device Charts".to_string())}
            </h2>
            <p id="chart-placeholder" style:display=move || if selected() { "none" } else { "block" }>
                <em>"Select a device in the table to view its charts."</em>
            </p>
            <div
                id="chart-container"
                class="chart-container"
                style:display=move || if selected() { "flex" } else { "none" }
            >
                {Metric::ALL
                    .into_iter()
                    .map(|metric| {
                        let handle = Memo::new(move |_| charts.with(|set| set.get(metric).cloned()));
                        view! { <MetricChart metric handle=handle.into()/> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
