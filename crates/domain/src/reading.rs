//! Reading: the latest measurement set reported by one device, as found in
//! the fleet snapshot.

use serde::{Deserialize, Serialize};

use crate::device::DeviceId;
use crate::error::PayloadError;

/// Status value the fleet endpoint uses for a usable answer.
pub const SUCCESS_STATUS: &str = "success";

/// One row of the fleet snapshot.
///
/// Measurements are optional because the ingest side stores whatever the
/// node sent, including nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "deviceid")]
    pub device_id: DeviceId,
    #[serde(default)]
    pub air_temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub pm1: Option<f64>,
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub co2: Option<f64>,
    /// Raw server timestamp; parsed at render time.
    #[serde(default)]
    pub timestamp: String,
}

/// Envelope returned by the fleet endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetResponse {
    pub status: String,
    #[serde(default)]
    pub data: Vec<Reading>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FleetResponse {
    /// Decode a fleet envelope from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Decode`] when the body does not match the
    /// envelope shape.
    pub fn from_json(body: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Accept the envelope and hand out its readings in server order.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Rejected`] when `status` is anything but
    /// `"success"`.
    pub fn into_readings(self) -> Result<Vec<Reading>, PayloadError> {
        if self.status != SUCCESS_STATUS {
            return Err(PayloadError::Rejected {
                status: self.status,
                message: self.message.unwrap_or_default(),
            });
        }
        Ok(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_server_row_ignoring_extra_columns() {
        let body = r#"{
            "status": "success",
            "data": [{
                "id": 91, "deviceid": 3, "timestamp": "2025-03-14 09:05:00",
                "air_temperature": 21.5, "humidity": 40, "pressure": 1012,
                "altitude": 10, "pm1": 2, "pm2_5": 5, "pm10": 8, "co2": 410
            }]
        }"#;
        let readings = FleetResponse::from_json(body)
            .unwrap()
            .into_readings()
            .unwrap();

        assert_eq!(readings.len(), 1);
        let reading = &readings[0];
        assert_eq!(reading.device_id, DeviceId::new("3"));
        assert_eq!(reading.air_temperature, Some(21.5));
        assert_eq!(reading.co2, Some(410.0));
        assert_eq!(reading.timestamp, "2025-03-14 09:05:00");
    }

    #[test]
    fn should_keep_null_measurements_as_none() {
        let body = r#"{"status":"success","data":[{"deviceid":"4","pm10":null,"timestamp":"x"}]}"#;
        let readings = FleetResponse::from_json(body)
            .unwrap()
            .into_readings()
            .unwrap();
        assert_eq!(readings[0].pm10, None);
        assert_eq!(readings[0].humidity, None);
    }

    #[test]
    fn should_preserve_server_order() {
        let body = r#"{"status":"success","data":[{"deviceid":"9"},{"deviceid":"2"},{"deviceid":"5"}]}"#;
        let ids: Vec<String> = FleetResponse::from_json(body)
            .unwrap()
            .into_readings()
            .unwrap()
            .into_iter()
            .map(|r| r.device_id.to_string())
            .collect();
        assert_eq!(ids, ["9", "2", "5"]);
    }

    #[test]
    fn should_reject_envelope_when_status_is_not_success() {
        let body = r#"{"status":"error","message":"Database error"}"#;
        let err = FleetResponse::from_json(body)
            .unwrap()
            .into_readings()
            .unwrap_err();
        assert_eq!(
            err,
            PayloadError::Rejected {
                status: "error".to_string(),
                message: "Database error".to_string(),
            }
        );
    }

    #[test]
    fn should_fail_to_decode_when_status_is_missing() {
        let result = FleetResponse::from_json(r#"{"data":[]}"#);
        assert!(matches!(result, Err(PayloadError::Decode(_))));
    }
}
