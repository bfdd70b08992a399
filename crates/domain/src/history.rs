//! History: the recent time series of a single device.

use serde::Deserialize;

use crate::error::PayloadError;
use crate::metric::Metric;

/// A sample; `None` where the node reported nothing.
pub type Sample = Option<f64>;

/// Raw body of the history endpoint. Every field may be missing; the
/// required ones are checked when converting into [`HistorySeries`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryPayload {
    #[serde(default)]
    pub time: Option<Vec<String>>,
    #[serde(default)]
    pub temperature: Option<Vec<Sample>>,
    #[serde(default)]
    pub humidity: Option<Vec<Sample>>,
    #[serde(default)]
    pub pressure: Option<Vec<Sample>>,
    #[serde(default)]
    pub pm1: Option<Vec<Sample>>,
    #[serde(default)]
    pub pm2_5: Option<Vec<Sample>>,
    #[serde(default)]
    pub pm10: Option<Vec<Sample>>,
    #[serde(default)]
    pub co2: Option<Vec<Sample>>,
}

impl HistoryPayload {
    /// Decode a history body.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Decode`] when the body is not a JSON object
    /// of arrays.
    pub fn from_json(body: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Validated per-device series: one label per sample index, one value
/// sequence per metric. Sequences are kept as sent, lengths included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistorySeries {
    time: Vec<String>,
    values: [Vec<Sample>; 7],
}

impl HistorySeries {
    /// X-axis labels, oldest first.
    #[must_use]
    pub fn time(&self) -> &[String] {
        &self.time
    }

    /// Values for `metric`; empty when the server omitted the series.
    #[must_use]
    pub fn series(&self, metric: Metric) -> &[Sample] {
        &self.values[metric.index()]
    }

    /// Number of time labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

impl TryFrom<HistoryPayload> for HistorySeries {
    type Error = PayloadError;

    fn try_from(payload: HistoryPayload) -> Result<Self, Self::Error> {
        let time = payload.time.ok_or(PayloadError::MissingField("time"))?;
        let temperature = payload
            .temperature
            .ok_or(PayloadError::MissingField("temperature"))?;
        let humidity = payload
            .humidity
            .ok_or(PayloadError::MissingField("humidity"))?;

        Ok(Self {
            time,
            values: [
                temperature,
                humidity,
                payload.pressure.unwrap_or_default(),
                payload.pm1.unwrap_or_default(),
                payload.pm2_5.unwrap_or_default(),
                payload.pm10.unwrap_or_default(),
                payload.co2.unwrap_or_default(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<HistorySeries, PayloadError> {
        HistoryPayload::from_json(body)?.try_into()
    }

    #[test]
    fn should_default_optional_series_to_empty() {
        let series =
            parse(r#"{"time":["t1","t2"],"temperature":[21,22],"humidity":[40,41]}"#).unwrap();

        assert_eq!(series.time(), ["t1", "t2"]);
        assert_eq!(series.series(Metric::Temperature), [Some(21.0), Some(22.0)]);
        assert_eq!(series.series(Metric::Humidity), [Some(40.0), Some(41.0)]);
        for metric in Metric::ALL.into_iter().filter(|m| m.is_optional()) {
            assert!(series.series(metric).is_empty(), "{metric}");
        }
    }

    #[test]
    fn should_report_missing_temperature() {
        let err = parse(r#"{"time":["t1"],"humidity":[40]}"#).unwrap_err();
        assert_eq!(err, PayloadError::MissingField("temperature"));
    }

    #[test]
    fn should_treat_null_required_series_as_missing() {
        let err = parse(r#"{"time":null,"temperature":[1],"humidity":[2]}"#).unwrap_err();
        assert_eq!(err, PayloadError::MissingField("time"));
    }

    #[test]
    fn should_accept_empty_required_arrays() {
        let series = parse(r#"{"time":[],"temperature":[],"humidity":[]}"#).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn should_keep_null_samples_as_gaps() {
        let series = parse(
            r#"{"time":["a","b","c"],"temperature":[1,null,3],"humidity":[1,2,3],"co2":[400,null,null]}"#,
        )
        .unwrap();
        assert_eq!(series.series(Metric::Temperature), [Some(1.0), None, Some(3.0)]);
        assert_eq!(series.series(Metric::Co2), [Some(400.0), None, None]);
    }

    #[test]
    fn should_treat_not_found_body_as_malformed() {
        let err = parse(r#"{"error":"No data found for the given device ID"}"#).unwrap_err();
        assert_eq!(err, PayloadError::MissingField("time"));
    }
}
