//! Fleet table: display rows built from one fleet snapshot.
//!
//! Rows are rebuilt from scratch on every snapshot. Staleness is evaluated
//! once, against the `now` the table was rendered at.

use chrono::TimeDelta;

use crate::device::{DeviceId, Position};
use crate::reading::Reading;
use crate::selection::Selection;
use crate::time::{Timestamp, format_local, parse_timestamp};

/// Readings older than this are flagged. Exactly this old is still fresh.
pub const STALE_AFTER: TimeDelta = TimeDelta::minutes(10);

/// Placeholder for a measurement the node did not report.
pub const MISSING: &str = "\u{2014}";

/// Whether a reading taken at `taken_at` is stale at `now`.
#[must_use]
pub fn is_stale(taken_at: Timestamp, now: Timestamp) -> bool {
    now.signed_duration_since(taken_at) > STALE_AFTER
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub device_id: DeviceId,
    pub position: Position,
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    pub pm1: String,
    pub pm2_5: String,
    pub pm10: String,
    pub co2: String,
    pub timestamp: String,
    pub stale: bool,
}

impl TableRow {
    /// Render one reading. An unparseable timestamp is shown verbatim and
    /// never counts as stale.
    #[must_use]
    pub fn render(reading: &Reading, now: Timestamp) -> Self {
        let local = *now.offset();
        let (timestamp, stale) = match parse_timestamp(&reading.timestamp, local) {
            Some(taken_at) => (format_local(taken_at, local), is_stale(taken_at, now)),
            None => (reading.timestamp.clone(), false),
        };

        Self {
            device_id: reading.device_id.clone(),
            position: reading.device_id.position(),
            temperature: cell(reading.air_temperature),
            humidity: cell(reading.humidity),
            pressure: cell(reading.pressure),
            pm1: cell(reading.pm1),
            pm2_5: cell(reading.pm2_5),
            pm10: cell(reading.pm10),
            co2: cell(reading.co2),
            timestamp,
            stale,
        }
    }
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// The whole table body for one snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FleetTable {
    rows: Vec<TableRow>,
}

impl FleetTable {
    /// Build rows in the order the readings arrived.
    #[must_use]
    pub fn render(readings: &[Reading], now: Timestamp) -> Self {
        Self {
            rows: readings.iter().map(|r| TableRow::render(r, now)).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the row to highlight for `selection`: the first row showing
    /// the selected device. Never more than one.
    #[must_use]
    pub fn highlighted(&self, selection: &Selection) -> Option<usize> {
        let device = selection.device()?;
        self.rows.iter().position(|row| &row.device_id == device)
    }
}
