//! Chart handles: the live per-metric chart models.
//!
//! A handle is created the first time history arrives for its metric and is
//! then updated in place for the rest of the page's life. Drawing is an
//! adapter concern; this module only decides what gets drawn.

use crate::history::{HistorySeries, Sample};
use crate::metric::Metric;

/// The data behind one line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    metric: Metric,
    labels: Vec<String>,
    values: Vec<Sample>,
    revision: u64,
}

impl ChartHandle {
    fn create(metric: Metric, labels: Vec<String>, values: Vec<Sample>) -> Self {
        Self {
            metric,
            labels,
            values,
            revision: 0,
        }
    }

    /// Replace labels and values and mark the chart for redraw.
    pub fn update(&mut self, labels: Vec<String>, values: Vec<Sample>) {
        self.labels = labels;
        self.values = values;
        self.revision += 1;
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[Sample] {
        &self.values
    }

    /// Number of updates since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Label for sample index `index`, if the server sent one.
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of x positions the axis must span.
    #[must_use]
    pub fn span(&self) -> usize {
        self.labels.len().max(self.values.len())
    }

    /// Unbroken runs of `(index, value)` points. A `None` sample or a
    /// non-finite value ends a run; nothing is interpolated across it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (index, sample) in self.values.iter().enumerate() {
            match sample {
                Some(value) if value.is_finite() => current.push((index as f64, *value)),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Y-axis range: min/max padded by 5 %, ±1 for a flat series, `0..1`
    /// when there is nothing to plot.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        let mut present = self.values.iter().flatten().copied().filter(|v| v.is_finite());
        let Some(first) = present.next() else {
            return (0.0, 1.0);
        };
        let (min, max) = present.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if (max - min).abs() < f64::EPSILON {
            return (min - 1.0, max + 1.0);
        }
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

/// Exactly one lazily created [`ChartHandle`] per [`Metric`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSet {
    handles: [Option<ChartHandle>; 7],
}

impl ChartSet {
    /// Push a device's history into every chart, creating handles on first
    /// use and updating them in place afterwards.
    pub fn apply(&mut self, history: &HistorySeries) {
        for metric in Metric::ALL {
            let labels = history.time().to_vec();
            let values = history.series(metric).to_vec();
            let slot = &mut self.handles[metric.index()];
            if let Some(handle) = slot.as_mut() {
                handle.update(labels, values);
            } else {
                *slot = Some(ChartHandle::create(metric, labels, values));
            }
        }
    }

    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<&ChartHandle> {
        self.handles[metric.index()].as_ref()
    }

    /// Whether any history has arrived yet.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.handles.iter().any(Option::is_some)
    }
}
