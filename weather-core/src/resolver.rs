use chrono::Utc;

use crate::{
    client::NwsClient,
    error::ForecastError,
    model::{Coordinate, ForecastPeriod, ForecastReport, TempCategory},
};

/// Orchestrates the two upstream calls and shapes the outbound report.
#[derive(Debug, Clone)]
pub struct ForecastResolver {
    client: NwsClient,
}

impl ForecastResolver {
    pub fn new(client: NwsClient) -> Self {
        Self { client }
    }

    /// Resolve a validated coordinate pair to a forecast report.
    ///
    /// The second upstream call depends on the first one's result, so the
    /// two are strictly sequential. Client failures propagate unchanged.
    pub async fn resolve(&self, coord: Coordinate) -> Result<ForecastReport, ForecastError> {
        let endpoint = self.client.resolve_forecast_endpoint(&coord).await?;
        let periods = self.client.fetch_forecast_periods(&endpoint).await?;

        let period = select_period(&periods).ok_or(ForecastError::NoForecastAvailable)?;
        let temp_f = fahrenheit_of(period);

        Ok(ForecastReport {
            location: coord,
            forecast: period.short_forecast.clone(),
            temp_f,
            temp_type: TempCategory::from_fahrenheit(f64::from(temp_f)),
            details: period.detailed_forecast.clone(),
            last_updated: Utc::now(),
        })
    }
}

/// Pick the period to report from the upstream-ordered list.
///
/// A period named "today" (case-insensitive) wins outright and ends the
/// scan. A daytime period seen before any "today" match is kept as a
/// fallback candidate but does not stop the scan; the first list entry is
/// the last resort. Empty list yields `None`.
fn select_period(periods: &[ForecastPeriod]) -> Option<&ForecastPeriod> {
    let mut daytime: Option<&ForecastPeriod> = None;

    for period in periods {
        if period.name.to_lowercase().contains("today") {
            return Some(period);
        }
        if daytime.is_none() && period.is_daytime {
            daytime = Some(period);
        }
    }

    daytime.or_else(|| periods.first())
}

/// Normalize a period's temperature to Fahrenheit.
///
/// The upstream API is documented to return Fahrenheit already; Celsius is
/// the fallback path, converted and rounded to the nearest integer.
fn fahrenheit_of(period: &ForecastPeriod) -> i32 {
    if period.temperature_unit == "C" {
        (f64::from(period.temperature) * 9.0 / 5.0 + 32.0).round() as i32
    } else {
        period.temperature
    }
}
