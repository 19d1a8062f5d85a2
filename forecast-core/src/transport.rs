use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;

use crate::{Config, WeatherError};

/// Status code and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The only network capability the forecast pipeline needs. Headers,
/// redirects and connection reuse are left to the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<HttpResponse, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// api.weather.gov refuses requests without a `User-Agent`, so one is
    /// always set.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().user_agent(user_agent).timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        Self::new(&config.user_agent(), config.timeout())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, WeatherError> {
        let res = self.http.get(url).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        tracing::debug!(url, status, "weather API responded");
        Ok(HttpResponse { status, body })
    }
}
