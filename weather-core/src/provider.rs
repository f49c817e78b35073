use crate::{
    Config, ForecastRecord, error::WeatherError, provider::livedoor::LivedoorProvider, region,
};
use anyhow::Context;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod livedoor;

/// Source of three-day forecasts keyed by region code.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_forecast(&self, region_code: &str) -> Result<ForecastRecord, WeatherError>;
}

/// Resolve `place` through the region table and fetch its forecast.
///
/// Unknown places fail before the provider is called.
pub async fn fetch(
    provider: &dyn WeatherProvider,
    place: &str,
) -> Result<ForecastRecord, WeatherError> {
    let code = region::lookup(place)?;
    tracing::debug!(place, code, "resolved region");
    provider.get_forecast(code).await
}

/// Construct the HTTP provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = LivedoorProvider::new(config.base_url(), config.timeout())
        .context("Failed to build HTTP client for the forecast service")?;

    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayForecast;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<String>>,
    }

    fn day(weather: &str) -> DayForecast {
        DayForecast {
            date: None,
            weather: weather.to_string(),
            temp_min: None,
            temp_max: None,
        }
    }

    #[async_trait]
    impl WeatherProvider for RecordingProvider {
        async fn get_forecast(&self, region_code: &str) -> Result<ForecastRecord, WeatherError> {
            self.calls.lock().unwrap().push(region_code.to_string());
            Ok(ForecastRecord {
                place: "東京都".into(),
                description: "test".into(),
                forecasts: [day("晴れ"), day("曇り"), day("雨")],
            })
        }
    }

    #[tokio::test]
    async fn unknown_place_never_reaches_provider() {
        let provider = RecordingProvider::default();

        let err = fetch(&provider, "California").await.unwrap_err();

        assert!(matches!(err, WeatherError::UnknownPlace(ref p) if p == "California"));
        assert!(provider.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn known_place_passes_region_code() {
        let provider = RecordingProvider::default();

        let record = fetch(&provider, "Tokyo").await.expect("stub succeeds");

        assert_eq!(record.place, "東京都");
        assert_eq!(*provider.calls.lock().unwrap(), vec!["130010".to_string()]);
    }

    #[test]
    fn provider_from_default_config_builds() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }
}
