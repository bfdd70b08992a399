//! The quantities a sensor node measures.

use std::fmt;

/// One charted quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
    Pm1,
    Pm2_5,
    Pm10,
    Co2,
}

impl Metric {
    /// Every metric, in display order.
    pub const ALL: [Metric; 7] = [
        Self::Temperature,
        Self::Humidity,
        Self::Pressure,
        Self::Pm1,
        Self::Pm2_5,
        Self::Pm10,
        Self::Co2,
    ];

    /// Position of this metric in [`Metric::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Temperature => 0,
            Self::Humidity => 1,
            Self::Pressure => 2,
            Self::Pm1 => 3,
            Self::Pm2_5 => 4,
            Self::Pm10 => 5,
            Self::Co2 => 6,
        }
    }

    /// Dataset label, with unit.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C)",
            Self::Humidity => "Humidity (%)",
            Self::Pressure => "Pressure (Pa)",
            Self::Pm1 => "PM1 (µg/m³)",
            Self::Pm2_5 => "PM2.5 (µg/m³)",
            Self::Pm10 => "PM10 (µg/m³)",
            Self::Co2 => "CO₂ (ppm)",
        }
    }

    /// Id of the drawing surface this metric is bound to.
    #[must_use]
    pub fn canvas_id(self) -> &'static str {
        match self {
            Self::Temperature => "tempChart",
            Self::Humidity => "humiChart",
            Self::Pressure => "pressureChart",
            Self::Pm1 => "pm1Chart",
            Self::Pm2_5 => "pm25Chart",
            Self::Pm10 => "pm10Chart",
            Self::Co2 => "co2Chart",
        }
    }

    /// Whether the history endpoint may omit this series.
    #[must_use]
    pub fn is_optional(self) -> bool {
        !matches!(self, Self::Temperature | Self::Humidity)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
