use serde::{Deserialize, Serialize};

/// A latitude/longitude pair, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// One roughly 12-hour segment of the `/forecast` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: i64,
    pub temperature_unit: String,
    pub icon: String,
}

impl ForecastPeriod {
    /// Formatted reading for this period, e.g. `61F`.
    pub fn to_temperature(&self) -> Temperature {
        Temperature {
            value: format!("{}{}", self.temperature, self.temperature_unit),
            icon: self.icon.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: String,
    pub icon: String,
}

/// All readings for one calendar day, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub when: String,
    pub temperatures: Vec<Temperature>,
}

impl DailyForecast {
    pub(crate) fn new(when: impl Into<String>, first: Temperature) -> Self {
        Self { when: when.into(), temperatures: vec![first] }
    }
}
