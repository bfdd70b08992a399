//! Fleet table component: one clickable row per device reading.

use leptos::prelude::*;
use sensorboard_domain::device::DeviceId;
use sensorboard_domain::table::{FleetTable, TableRow};

/// The table of latest readings.
///
/// The body is rebuilt whenever `table` changes; the highlight is derived
/// from `highlighted` so it follows the selection across rebuilds.
#[component]
pub fn ReadingTable(
    /// Rows of the latest snapshot.
    table: Signal<FleetTable>,
    /// Index of the row showing the selected device.
    highlighted: Signal<Option<usize>>,
    /// Receives the clicked row's device.
    on_select: WriteSignal<Option<DeviceId>>,
) -> impl IntoView {
    view! {
        <table class="table fleet-table">
            <thead>
                <tr>
                    <th>"Device"</th>
                    <th>"Position"</th>
                    <th>"Temp (°C)"</th>
                    <th>"Humidity (%)"</th>
                    <th>"Pressure (Pa)"</th>
                    <th>"PM1"</th>
                    <th>"PM2.5"</th>
                    <th>"PM10"</th>
                    <th>"CO₂ (ppm)"</th>
                    <th>"Last Update"</th>
                </tr>
            </thead>
            <tbody id="table-body">
                {move || {
                    let table = table.get();
                    if table.is_empty() {
                        view! {
                            <tr>
                                <td class="empty" colspan="10">"No devices reporting."</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        table
                            .rows()
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(index, row)| {
                                view! { <ReadingRow row index highlighted on_select/> }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

/// A single row in the fleet table.
#[component]
fn ReadingRow(
    row: TableRow,
    index: usize,
    highlighted: Signal<Option<usize>>,
    on_select: WriteSignal<Option<DeviceId>>,
) -> impl IntoView {
    let stale = row.stale;
    let device_id = row.device_id.clone();
    let class = move || row_class(stale, highlighted.get() == Some(index));

    view! {
        <tr class=class on:click=move |_| on_select.set(Some(device_id.clone()))>
            <td>{row.device_id.to_string()}</td>
            <td>{row.position.label()}</td>
            <td>{row.temperature}</td>
            <td>{row.humidity}</td>
            <td>{row.pressure}</td>
            <td>{row.pm1}</td>
            <td>{row.pm2_5}</td>
            <td>{row.pm10}</td>
            <td>{row.co2}</td>
            <td>{row.timestamp}</td>
        </tr>
    }
}

fn row_class(stale: bool, selected: bool) -> &'static str {
    match (stale, selected) {
        (false, false) => "",
        (true, false) => "row-stale",
        (false, true) => "table-primary",
        (true, true) => "row-stale table-primary",
    }
}
