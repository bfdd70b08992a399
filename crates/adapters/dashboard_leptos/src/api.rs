//! HTTP client wrapping `gloo-net` for calls to the sensor API.

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use sensorboard_app::config::DashboardConfig;
use sensorboard_app::ports::SensorApi;
use sensorboard_domain::device::DeviceId;
use sensorboard_domain::error::{SensorboardError, TransportError};
use sensorboard_domain::history::HistoryPayload;
use sensorboard_domain::reading::FleetResponse;

/// [`SensorApi`] implementation over the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpSensorApi {
    config: DashboardConfig,
}

impl HttpSensorApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// GET `url` and return the body, bounded by the configured timeout.
    async fn get_text(&self, url: &str) -> Result<String, SensorboardError> {
        let timeout_ms = self.config.api.request_timeout_ms;
        let request = Box::pin(fetch_text(url));
        let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(TransportError::network(format!(
                "GET {url} timed out after {timeout_ms} ms"
            ))
            .into()),
        }
    }
}

impl SensorApi for HttpSensorApi {
    async fn fetch_fleet(&self) -> Result<FleetResponse, SensorboardError> {
        let body = self.get_text(&self.config.api.fleet_url).await?;
        Ok(FleetResponse::from_json(&body)?)
    }

    async fn fetch_history(&self, device: &DeviceId) -> Result<HistoryPayload, SensorboardError> {
        let url = self.config.history_url(device);
        let body = self.get_text(&url).await?;
        Ok(HistoryPayload::from_json(&body)?)
    }
}

fn transport(err: gloo_net::Error) -> SensorboardError {
    TransportError::network(err.to_string()).into()
}

/// Check the HTTP response status and turn non-2xx into an error.
fn check_response(resp: Response) -> Result<Response, SensorboardError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(TransportError::status(resp.status()).into())
}

async fn fetch_text(url: &str) -> Result<String, SensorboardError> {
    let resp = Request::get(url).send().await.map_err(transport)?;
    let resp = check_response(resp)?;
    resp.text().await.map_err(transport)
}
