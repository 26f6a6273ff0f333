use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::GatewayConfig,
    error::{ForecastError, UpstreamCall},
    model::{Coordinate, ForecastPeriod},
};

/// Points lookup envelope; only the field we consume is mirrored.
#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    #[serde(default)]
    periods: Vec<ForecastPeriod>,
}

/// Client for the upstream weather API.
///
/// Holds the shared HTTP client carrying the fixed timeout and
/// identification header; cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    base_url: String,
}

impl NwsClient {
    /// Build the client from gateway settings. The timeout and User-Agent
    /// apply to every request issued through it.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a coordinate pair to its forecast endpoint URL.
    ///
    /// Coordinates are formatted to 4 decimal places, matching the precision
    /// the points endpoint expects.
    pub async fn resolve_forecast_endpoint(
        &self,
        coord: &Coordinate,
    ) -> Result<String, ForecastError> {
        let call = UpstreamCall::Points;
        let url = format!("{}/points/{:.4},{:.4}", self.base_url, coord.lat, coord.lon);

        let body = self.get(call, &url).await?;

        let parsed: PointsResponse = serde_json::from_str(&body).map_err(|e| {
            ForecastError::UpstreamMalformedResponse { call, detail: e.to_string() }
        })?;

        match parsed.properties.forecast {
            Some(endpoint) if !endpoint.is_empty() => Ok(endpoint),
            _ => Err(ForecastError::UpstreamMalformedResponse {
                call,
                detail: "response did not contain a forecast endpoint URL".to_string(),
            }),
        }
    }

    /// Fetch the ordered period list from a previously resolved endpoint.
    pub async fn fetch_forecast_periods(
        &self,
        endpoint_url: &str,
    ) -> Result<Vec<ForecastPeriod>, ForecastError> {
        let call = UpstreamCall::Forecast;
        let body = self.get(call, endpoint_url).await?;

        let parsed: ForecastResponse = serde_json::from_str(&body).map_err(|e| {
            ForecastError::UpstreamMalformedResponse { call, detail: e.to_string() }
        })?;

        Ok(parsed.properties.periods)
    }

    /// Issue one GET and return the body, mapping transport and status
    /// failures to the matching error kinds for `call`.
    async fn get(&self, call: UpstreamCall, url: &str) -> Result<String, ForecastError> {
        tracing::debug!(%call, url, "requesting upstream");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ForecastError::UpstreamUnavailable { call, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ForecastError::UpstreamUnavailable { call, source })?;

        if !status.is_success() {
            return Err(ForecastError::UpstreamBadStatus {
                call,
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
