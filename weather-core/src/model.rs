use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forecast for one day. Temperatures stay as the strings the service sends;
/// `None` means the service has no reading for that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: Option<NaiveDate>,
    pub weather: String,
    pub temp_min: Option<String>,
    pub temp_max: Option<String>,
}

/// Three-day report for one place: today, tomorrow, the day after, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub place: String,
    pub description: String,
    pub forecasts: [DayForecast; 3],
}

impl ForecastRecord {
    pub fn today(&self) -> &DayForecast {
        &self.forecasts[0]
    }

    pub fn tomorrow(&self) -> &DayForecast {
        &self.forecasts[1]
    }

    pub fn day_after_tomorrow(&self) -> &DayForecast {
        &self.forecasts[2]
    }
}
