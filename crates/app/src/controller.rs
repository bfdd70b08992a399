//! Dashboard controller: the use-cases behind the two timers and the row
//! click.
//!
//! All state lives in one `RefCell`. Borrows are taken before and after each
//! `.await`, never across one, so overlapping calls on the single-threaded
//! event loop interleave safely; the request gates decide whose response wins.

use std::cell::RefCell;

use sensorboard_domain::device::DeviceId;
use sensorboard_domain::error::SensorboardError;
use sensorboard_domain::history::HistorySeries;
use sensorboard_domain::table::FleetTable;
use sensorboard_domain::time::{self, Timestamp};
use tracing::{debug, info, warn};

use crate::ports::SensorApi;
use crate::request_gate::Ticket;
use crate::state::DashboardState;

/// What happened to one polling attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The response was applied to the state.
    Applied,
    /// The request or its payload failed; the state is unchanged.
    Failed,
    /// A newer request was issued meanwhile; the response was dropped.
    Superseded,
    /// A request to the same endpoint is still in flight; nothing was sent.
    InFlight,
    /// No device is selected; nothing was sent.
    Idle,
}

/// A history fetch issued for one device, waiting to be loaded.
#[derive(Debug)]
#[must_use = "an issued request keeps the history gate busy until loaded"]
pub struct HistoryRequest {
    device: DeviceId,
    ticket: Ticket,
}

impl HistoryRequest {
    #[must_use]
    pub fn device(&self) -> &DeviceId {
        &self.device
    }
}

/// Owns the dashboard state and drives it from the sensor API.
pub struct DashboardController<A> {
    api: A,
    state: RefCell<DashboardState>,
    clock: Box<dyn Fn() -> Timestamp>,
}

impl<A: SensorApi> DashboardController<A> {
    /// Create a controller reading the local wall clock.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self::with_clock(api, time::now)
    }

    /// Create a controller with an explicit clock, used for staleness.
    #[must_use]
    pub fn with_clock(api: A, clock: impl Fn() -> Timestamp + 'static) -> Self {
        Self {
            api,
            state: RefCell::new(DashboardState::default()),
            clock: Box::new(clock),
        }
    }

    /// Copy of the current state, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Fleet timer tick: fetch the snapshot and rebuild the table.
    ///
    /// Staleness is evaluated against the clock at the moment the response
    /// is applied.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_fleet(&self) -> PollOutcome {
        let Some(ticket) = self.state.borrow_mut().fleet_gate.try_begin() else {
            debug!("fleet request still in flight, skipping tick");
            return PollOutcome::InFlight;
        };

        let result = match self.api.fetch_fleet().await {
            Ok(response) => response.into_readings().map_err(SensorboardError::from),
            Err(err) => Err(err),
        };

        let mut state = self.state.borrow_mut();
        if !state.fleet_gate.complete(ticket) {
            debug!("discarding superseded fleet response");
            return PollOutcome::Superseded;
        }
        state.loading = false;

        match result {
            Ok(readings) => {
                state.table = FleetTable::render(&readings, (self.clock)());
                debug!(rows = readings.len(), "fleet table rebuilt");
                PollOutcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "fleet poll failed, keeping previous table");
                PollOutcome::Failed
            }
        }
    }

    /// Row click, synchronous half: select `device` and issue a history
    /// request that supersedes any still in flight. The caller can render
    /// the new highlight before awaiting [`load_history`](Self::load_history).
    #[tracing::instrument(skip(self))]
    pub fn select(&self, device: DeviceId) -> HistoryRequest {
        let mut state = self.state.borrow_mut();
        let previous = state.selection.select(device.clone());
        info!(previous = ?previous.as_ref().map(DeviceId::as_str), "device selected");
        HistoryRequest {
            device,
            ticket: state.history_gate.supersede(),
        }
    }

    /// Row click: select `device` and load its history right away.
    pub async fn select_device(&self, device: DeviceId) -> PollOutcome {
        let request = self.select(device);
        self.load_history(request).await
    }

    /// History timer tick: reload the selected device's history, if any.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_history(&self) -> PollOutcome {
        let request = {
            let mut state = self.state.borrow_mut();
            let Some(device) = state.selection.device().cloned() else {
                return PollOutcome::Idle;
            };
            let Some(ticket) = state.history_gate.try_begin() else {
                debug!(device = %device, "history request still in flight, skipping tick");
                return PollOutcome::InFlight;
            };
            HistoryRequest { device, ticket }
        };
        self.load_history(request).await
    }

    /// Fetch and apply the history for an issued request.
    #[tracing::instrument(skip(self, request), fields(device = %request.device, seq = request.ticket.seq()))]
    pub async fn load_history(&self, request: HistoryRequest) -> PollOutcome {
        let HistoryRequest { device, ticket } = request;
        let result = match self.api.fetch_history(&device).await {
            Ok(payload) => HistorySeries::try_from(payload).map_err(SensorboardError::from),
            Err(err) => Err(err),
        };

        let mut state = self.state.borrow_mut();
        // Every selection change supersedes the gate, so an accepted ticket
        // always belongs to the selected device.
        if !state.history_gate.complete(ticket) {
            debug!("discarding superseded history response");
            return PollOutcome::Superseded;
        }

        match result {
            Ok(series) => {
                state.charts.apply(&series);
                debug!(points = series.len(), "charts updated");
                PollOutcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "history poll failed, keeping previous charts");
                PollOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::future::Future;

    use chrono::{FixedOffset, TimeZone};
    use sensorboard_domain::error::{PayloadError, TransportError};
    use sensorboard_domain::history::HistoryPayload;
    use sensorboard_domain::metric::Metric;
    use sensorboard_domain::reading::FleetResponse;

    use super::*;

    type FleetResult = Result<FleetResponse, SensorboardError>;
    type HistoryResult = Result<HistoryPayload, SensorboardError>;

    /// Scripted API answering from queues, in call order.
    #[derive(Default)]
    struct ScriptedApi {
        fleet: RefCell<VecDeque<FleetResult>>,
        history: RefCell<VecDeque<HistoryResult>>,
        history_calls: RefCell<Vec<String>>,
        fleet_calls: Cell<usize>,
    }

    impl ScriptedApi {
        fn fleet(self, body: &str) -> Self {
            self.fleet
                .borrow_mut()
                .push_back(Ok(FleetResponse::from_json(body).unwrap()));
            self
        }

        fn fleet_err(self, err: SensorboardError) -> Self {
            self.fleet.borrow_mut().push_back(Err(err));
            self
        }

        fn history(self, body: &str) -> Self {
            self.history
                .borrow_mut()
                .push_back(Ok(HistoryPayload::from_json(body).unwrap()));
            self
        }
    }

    impl SensorApi for ScriptedApi {
        fn fetch_fleet(&self) -> impl Future<Output = FleetResult> {
            self.fleet_calls.set(self.fleet_calls.get() + 1);
            let next = self.fleet.borrow_mut().pop_front();
            async move { next.expect("unexpected fleet call") }
        }

        fn fetch_history(&self, device: &DeviceId) -> impl Future<Output = HistoryResult> {
            self.history_calls.borrow_mut().push(device.to_string());
            let next = self.history.borrow_mut().pop_front();
            async move { next.expect("unexpected history call") }
        }
    }

    fn clock() -> Timestamp {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 14, 12, 0, 0)
            .unwrap()
    }

    fn controller(api: ScriptedApi) -> DashboardController<ScriptedApi> {
        DashboardController::with_clock(api, clock)
    }

    const TWO_DEVICES: &str = r#"{"status":"success","data":[
        {"deviceid":"1","air_temperature":20,"timestamp":"2025-03-14 11:58:00"},
        {"deviceid":"2","air_temperature":21,"timestamp":"2025-03-14 11:30:00"}
    ]}"#;

    #[tokio::test]
    async fn should_hide_loading_after_first_fleet_poll_even_on_failure() {
        let ctl = controller(ScriptedApi::default().fleet_err(TransportError::status(500).into()));
        assert!(ctl.snapshot().is_loading());

        assert_eq!(ctl.refresh_fleet().await, PollOutcome::Failed);

        let state = ctl.snapshot();
        assert!(!state.is_loading());
        assert!(state.table().is_empty());
    }

    #[tokio::test]
    async fn should_render_rows_and_flag_stale_ones() {
        let ctl = controller(ScriptedApi::default().fleet(TWO_DEVICES));
        assert_eq!(ctl.refresh_fleet().await, PollOutcome::Applied);

        let state = ctl.snapshot();
        let stale: Vec<bool> = state.table().rows().iter().map(|r| r.stale).collect();
        assert_eq!(stale, [false, true]);
    }

    #[tokio::test]
    async fn should_keep_previous_table_when_status_is_not_success() {
        let ctl = controller(
            ScriptedApi::default()
                .fleet(TWO_DEVICES)
                .fleet(r#"{"status":"error","message":"Database error"}"#),
        );
        ctl.refresh_fleet().await;
        let before = ctl.snapshot().table().clone();

        assert_eq!(ctl.refresh_fleet().await, PollOutcome::Failed);
        assert_eq!(ctl.snapshot().table(), &before);
        assert_eq!(ctl.api.fleet_calls.get(), 2);
    }

    #[tokio::test]
    async fn should_not_fetch_history_without_selection() {
        let api = ScriptedApi::default();
        let ctl = controller(api);
        assert_eq!(ctl.refresh_history().await, PollOutcome::Idle);
        assert!(ctl.api.history_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_move_highlight_from_a_to_b() {
        let ctl = controller(
            ScriptedApi::default()
                .fleet(TWO_DEVICES)
                .history(r#"{"time":[],"temperature":[],"humidity":[]}"#)
                .history(r#"{"time":[],"temperature":[],"humidity":[]}"#),
        );
        ctl.refresh_fleet().await;

        ctl.select_device(DeviceId::new("1")).await;
        assert_eq!(ctl.snapshot().highlighted_row(), Some(0));

        ctl.select_device(DeviceId::new("2")).await;
        let state = ctl.snapshot();
        assert_eq!(state.highlighted_row(), Some(1));
        assert_eq!(
            state.selection().chart_title().as_deref(),
            Some("Device 2 Charts")
        );
        assert_eq!(*ctl.api.history_calls.borrow(), ["1", "2"]);
    }

    #[tokio::test]
    async fn should_keep_highlight_across_fleet_refresh() {
        let ctl = controller(
            ScriptedApi::default()
                .fleet(TWO_DEVICES)
                .fleet(
                    r#"{"status":"success","data":[{"deviceid":"2"},{"deviceid":"1"}]}"#,
                )
                .history(r#"{"time":[],"temperature":[],"humidity":[]}"#),
        );
        ctl.refresh_fleet().await;
        ctl.select_device(DeviceId::new("1")).await;
        ctl.refresh_fleet().await;

        assert_eq!(ctl.snapshot().highlighted_row(), Some(1));
    }

    #[tokio::test]
    async fn should_leave_charts_untouched_when_temperature_is_missing() {
        let ctl = controller(
            ScriptedApi::default()
                .history(r#"{"time":["a"],"temperature":[1],"humidity":[2]}"#)
                .history(r#"{"time":["b"],"humidity":[3]}"#),
        );
        assert_eq!(
            ctl.select_device(DeviceId::new("5")).await,
            PollOutcome::Applied
        );
        let before = ctl.snapshot().charts().clone();

        assert_eq!(ctl.refresh_history().await, PollOutcome::Failed);
        assert_eq!(ctl.snapshot().charts(), &before);
        assert_eq!(
            ctl.snapshot().charts().get(Metric::Temperature).unwrap().revision(),
            0
        );
    }

    #[tokio::test]
    async fn should_surface_payload_error_for_malformed_history() {
        let api = ScriptedApi::default();
        api.history
            .borrow_mut()
            .push_back(Err(PayloadError::Decode("eof".to_string()).into()));
        let ctl = controller(api);

        assert_eq!(
            ctl.select_device(DeviceId::new("5")).await,
            PollOutcome::Failed
        );
        assert!(!ctl.snapshot().charts().is_created());
        assert!(ctl.snapshot().charts_visible());
    }
}
