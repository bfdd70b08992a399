//! One metric's line chart, drawn with `plotters` onto a canvas.

use leptos::html::Canvas;
use leptos::prelude::*;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use sensorboard_domain::chart::ChartHandle;
use sensorboard_domain::metric::Metric;
use web_sys::HtmlCanvasElement;

const LINE_COLOR: RGBColor = RGBColor(54, 162, 235);

/// A canvas bound to one metric, redrawn whenever its handle changes.
#[component]
pub fn MetricChart(
    metric: Metric,
    /// Chart data; `None` until the first history arrives.
    handle: Signal<Option<ChartHandle>>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(handle) = handle.get() else {
            return;
        };
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(err) = draw(&canvas, &handle) {
            leptos::logging::warn!("failed to draw {} chart: {err}", metric.label());
        }
    });

    view! {
        <div class="chart-card">
            <canvas id=metric.canvas_id() node_ref=canvas_ref width="480" height="260"></canvas>
        </div>
    }
}

fn draw(canvas: &HtmlCanvasElement, handle: &ChartHandle) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let (y_min, y_max) = handle.value_range();
    let mut chart = ChartBuilder::on(&root)
        .caption(handle.metric().label(), ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(48)
        .build_cartesian_2d(0f64..x_extent(handle), y_min..y_max)
        .map_err(|e| e.to_string())?;

    let tick_label = |x: &f64| index_label(handle, *x);
    chart
        .configure_mesh()
        .x_labels(handle.span().clamp(2, 8))
        .x_label_formatter(&tick_label)
        .draw()
        .map_err(|e| e.to_string())?;

    for segment in handle.segments() {
        chart
            .draw_series(LineSeries::new(segment, LINE_COLOR.stroke_width(1)).point_size(2))
            .map_err(|e| e.to_string())?;
    }

    root.present().map_err(|e| e.to_string())
}

/// Right edge of the x axis; at least 1 so a single sample still has room.
#[allow(clippy::cast_precision_loss)]
fn x_extent(handle: &ChartHandle) -> f64 {
    handle.span().saturating_sub(1).max(1) as f64
}

/// Tick label for an x position: the sample's time label at whole indices,
/// nothing in between.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn index_label(handle: &ChartHandle, x: f64) -> String {
    if x < 0.0 || x.fract() != 0.0 {
        return String::new();
    }
    handle.label_at(x as usize).unwrap_or_default().to_string()
}
