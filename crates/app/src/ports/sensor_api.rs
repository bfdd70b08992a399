//! Sensor API port: read access to the remote sensor-data service.

use std::future::Future;

use sensorboard_domain::device::DeviceId;
use sensorboard_domain::error::SensorboardError;
use sensorboard_domain::history::HistoryPayload;
use sensorboard_domain::reading::FleetResponse;

/// Read-only client for the sensor-data API.
///
/// Implementations decode the response body but do not judge it: status
/// checks on the envelope and required-field checks on the history are done
/// by the controller. A non-2xx answer, a network failure or a timeout is a
/// [`SensorboardError::Transport`]; an undecodable body is a
/// [`SensorboardError::Payload`].
///
/// The returned futures are not required to be `Send`: the browser adapter
/// runs on a single-threaded event loop.
pub trait SensorApi {
    /// Fetch the latest reading of every device.
    fn fetch_fleet(&self) -> impl Future<Output = Result<FleetResponse, SensorboardError>>;

    /// Fetch the recent history of one device.
    fn fetch_history(
        &self,
        device: &DeviceId,
    ) -> impl Future<Output = Result<HistoryPayload, SensorboardError>>;
}
