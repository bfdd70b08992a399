mod chart_panel;
mod loading;
mod metric_chart;
mod reading_table;

pub use chart_panel::ChartPanel;
pub use loading::Loading;
pub use metric_chart::MetricChart;
pub use reading_table::ReadingTable;
