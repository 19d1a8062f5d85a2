use serde::Deserialize;
use tracing::instrument;

use crate::{
    Coordinate, DailyForecast, ForecastPeriod, WeatherError, daily,
    points::points_url,
    transport::{HttpResponse, HttpTransport},
};

pub const DEFAULT_POINTS_URL: &str = "https://api.weather.gov/points";

/// Resolves coordinates to a daily forecast with two sequential requests:
/// `/points` to find the forecast resource, then the resource itself.
#[derive(Debug, Clone)]
pub struct ForecastService<T> {
    transport: T,
    points_url: String,
}

impl<T: HttpTransport> ForecastService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_points_url(transport, DEFAULT_POINTS_URL)
    }

    pub fn with_points_url(transport: T, points_url: impl Into<String>) -> Self {
        Self { transport, points_url: points_url.into() }
    }

    /// URL of the `/points` lookup for `coordinate`.
    pub fn lookup_url(&self, coordinate: Coordinate) -> String {
        points_url(&self.points_url, coordinate)
    }

    /// Finds the forecast resource for `coordinate`. `Ok(None)` means the
    /// point exists but has no forecast attached.
    #[instrument(skip(self), level = "debug")]
    pub async fn locate(&self, coordinate: Coordinate) -> Result<Option<String>, WeatherError> {
        let url = self.lookup_url(coordinate);
        let res = self.transport.get(&url).await?;

        if res.status != 200 {
            return Err(upstream_error(&res)?);
        }

        let parsed: PointsResponse = serde_json::from_str(&res.body)?;
        Ok(parsed.properties.and_then(|p| p.forecast))
    }

    /// Raw periods of a forecast resource, in the order the API sent them.
    /// The status is not inspected: any JSON body without periods, error
    /// documents included, reads as an empty forecast.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_periods(
        &self,
        forecast_url: &str,
    ) -> Result<Vec<ForecastPeriod>, WeatherError> {
        let res = self.transport.get(forecast_url).await?;

        if !res.is_success() {
            tracing::warn!(status = res.status, "forecast request was not successful");
        }

        let parsed: ForecastResponse = serde_json::from_str(&res.body)?;
        Ok(parsed.properties.map(|p| p.periods).unwrap_or_default())
    }

    #[instrument(skip(self), level = "info")]
    pub async fn get_forecast(
        &self,
        coordinate: Coordinate,
    ) -> Result<Vec<DailyForecast>, WeatherError> {
        let Some(forecast_url) = self.locate(coordinate).await? else {
            tracing::warn!("no forecast resource for this point");
            return Ok(Vec::new());
        };

        let periods = self.fetch_periods(&forecast_url).await?;
        if periods.is_empty() {
            tracing::warn!(%forecast_url, "forecast has no periods");
            return Ok(Vec::new());
        }

        let days = daily::decode(&periods)?;
        tracing::debug!(periods = periods.len(), days = days.len(), "decoded forecast");
        Ok(days)
    }
}

/// Builds the error for a non-success response out of its `detail` field.
/// A body that is not JSON at all is reported as malformed instead.
fn upstream_error(res: &HttpResponse) -> Result<WeatherError, WeatherError> {
    let parsed: ErrorBody = serde_json::from_str(&res.body)?;
    let detail =
        parsed.detail.unwrap_or_else(|| format!("request failed with status {}", res.status));

    tracing::debug!(status = res.status, detail = %detail, "weather API returned an error");
    Ok(WeatherError::Upstream { status: res.status, detail })
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: Option<PointsProperties>,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    #[serde(default)]
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}
