use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::WeatherError,
    model::{DayForecast, ForecastRecord},
};

use super::WeatherProvider;

/// Endpoint of the Livedoor Weather Web Service (LWWS) JSON API.
pub const DEFAULT_BASE_URL: &str = "http://weather.livedoor.com/forecast/webservice/json/v1";

/// Client for LWWS and services that mirror its JSON format.
#[derive(Debug, Clone)]
pub struct LivedoorProvider {
    base_url: String,
    http: Client,
}

impl LivedoorProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WeatherProvider for LivedoorProvider {
    async fn get_forecast(&self, region_code: &str) -> Result<ForecastRecord, WeatherError> {
        tracing::debug!(url = %self.base_url, city = region_code, "requesting forecast");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("city", region_code)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, bytes = body.len(), "forecast response received");

        if !status.is_success() {
            tracing::warn!(%status, "forecast service returned an error status");
            return Err(WeatherError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_forecast(&body)
    }
}

#[derive(Debug, Deserialize)]
struct LwDescription {
    text: String,
}

#[derive(Debug, Deserialize)]
struct LwReading {
    celsius: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LwTemperature {
    // Both keys must be present; `null` means no reading.
    #[serde(deserialize_with = "Option::deserialize")]
    min: Option<LwReading>,
    #[serde(deserialize_with = "Option::deserialize")]
    max: Option<LwReading>,
}

#[derive(Debug, Deserialize)]
struct LwForecast {
    #[serde(default)]
    date: Option<NaiveDate>,
    telop: String,
    temperature: LwTemperature,
}

#[derive(Debug, Deserialize)]
struct LwResponse {
    title: String,
    description: LwDescription,
    forecasts: Vec<LwForecast>,
}

impl From<LwForecast> for DayForecast {
    fn from(f: LwForecast) -> Self {
        DayForecast {
            date: f.date,
            weather: f.telop,
            temp_min: f.temperature.min.and_then(|r| r.celsius),
            temp_max: f.temperature.max.and_then(|r| r.celsius),
        }
    }
}

/// Parse an LWWS forecast body into a [`ForecastRecord`].
///
/// Only the first three entries of `forecasts` are kept. The place is the first
/// space-separated token of `title`, e.g. `"道央 札幌 の天気"` yields `"道央"`.
pub fn parse_forecast(body: &str) -> Result<ForecastRecord, WeatherError> {
    let parsed: LwResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

    let available = parsed.forecasts.len();
    let days: Vec<DayForecast> = parsed
        .forecasts
        .into_iter()
        .take(3)
        .map(Into::into)
        .collect();
    let forecasts: [DayForecast; 3] = days.try_into().map_err(|_| {
        WeatherError::MalformedResponse(format!("expected at least 3 forecasts, got {available}"))
    })?;

    let place = parsed
        .title
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string();

    Ok(ForecastRecord {
        place,
        description: parsed.description.text,
        forecasts,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
