//! The one mutable dashboard state, owned by the controller.

use sensorboard_domain::chart::ChartSet;
use sensorboard_domain::selection::Selection;
use sensorboard_domain::table::FleetTable;

use crate::request_gate::RequestGate;

/// Everything the page shows, plus the gates guarding the two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub(crate) loading: bool,
    pub(crate) table: FleetTable,
    pub(crate) selection: Selection,
    pub(crate) charts: ChartSet,
    pub(crate) fleet_gate: RequestGate,
    pub(crate) history_gate: RequestGate,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            loading: true,
            table: FleetTable::default(),
            selection: Selection::default(),
            charts: ChartSet::default(),
            fleet_gate: RequestGate::default(),
            history_gate: RequestGate::default(),
        }
    }
}

impl DashboardState {
    /// `true` until the first fleet request settles, whatever its outcome.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn table(&self) -> &FleetTable {
        &self.table
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    /// Row carrying the highlight, derived from the selection so that it
    /// survives table rebuilds.
    #[must_use]
    pub fn highlighted_row(&self) -> Option<usize> {
        self.table.highlighted(&self.selection)
    }

    /// The chart panel replaces its placeholder once a device is selected.
    #[must_use]
    pub fn charts_visible(&self) -> bool {
        self.selection.is_active()
    }
}
