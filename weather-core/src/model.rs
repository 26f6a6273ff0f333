use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated geographic coordinate pair.
///
/// Construction through [`Coordinate::new`] is the validation gate: once a
/// value exists it is known to be finite and in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    #[serde(rename = "lng")]
    pub lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self { lat, lon })
    }
}

/// One entry of the upstream period list.
///
/// Field names follow the upstream camelCase payload; only the fields we
/// actually consume are mirrored here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    pub is_daytime: bool,
    pub temperature: i32,
    pub temperature_unit: String,
    #[serde(default)]
    pub short_forecast: String,
    #[serde(default)]
    pub detailed_forecast: String,
}

/// Temperature band derived from the Fahrenheit forecast value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TempCategory {
    Cold,
    Moderate,
    Hot,
}

impl TempCategory {
    /// Bucket a Fahrenheit temperature. Boundaries are inclusive on the
    /// warmer side: 89.5 is hot, 60.8 is moderate.
    pub fn from_fahrenheit(temp_f: f64) -> Self {
        if temp_f >= 89.5 {
            TempCategory::Hot
        } else if temp_f >= 60.8 {
            TempCategory::Moderate
        } else {
            TempCategory::Cold
        }
    }
}

/// The externally visible forecast for one coordinate pair.
///
/// Built fresh per request and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub location: Coordinate,
    pub forecast: String,
    pub temp_f: i32,
    pub temp_type: TempCategory,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub details: String,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(TempCategory::from_fahrenheit(89.5), TempCategory::Hot);
        assert_eq!(TempCategory::from_fahrenheit(89.4999), TempCategory::Moderate);
        assert_eq!(TempCategory::from_fahrenheit(60.8), TempCategory::Moderate);
        assert_eq!(TempCategory::from_fahrenheit(60.7999), TempCategory::Cold);
    }

    #[test]
    fn classify_extremes() {
        assert_eq!(TempCategory::from_fahrenheit(150.0), TempCategory::Hot);
        assert_eq!(TempCategory::from_fahrenheit(0.0), TempCategory::Cold);
        assert_eq!(TempCategory::from_fahrenheit(-40.0), TempCategory::Cold);
    }

    #[test]
    fn coordinate_accepts_range_limits() {
        assert!(Coordinate::new(90.0, 180.0).is_some());
        assert!(Coordinate::new(-90.0, -180.0).is_some());
        assert!(Coordinate::new(0.0, 0.0).is_some());
    }

    #[test]
    fn coordinate_rejects_out_of_range() {
        assert!(Coordinate::new(90.0001, 0.0).is_none());
        assert!(Coordinate::new(-90.0001, 0.0).is_none());
        assert!(Coordinate::new(0.0, 180.0001).is_none());
        assert!(Coordinate::new(0.0, -180.0001).is_none());
    }

    #[test]
    fn coordinate_rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_none());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn report_serializes_to_wire_shape() {
        let report = ForecastReport {
            location: Coordinate { lat: 40.7128, lon: -74.006 },
            forecast: "Sunny".to_string(),
            temp_f: 72,
            temp_type: TempCategory::Moderate,
            details: "Sunny, with a high near 72.".to_string(),
            last_updated: Utc::now(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["location"]["lat"], 40.7128);
        assert_eq!(json["location"]["lng"], -74.006);
        assert_eq!(json["temp_f"], 72);
        assert_eq!(json["temp_type"], "moderate");
        assert_eq!(json["details"], "Sunny, with a high near 72.");
        assert!(json["last_updated"].is_string());
    }

    #[test]
    fn report_omits_empty_details() {
        let report = ForecastReport {
            location: Coordinate { lat: 0.0, lon: 0.0 },
            forecast: "Clear".to_string(),
            temp_f: 50,
            temp_type: TempCategory::Cold,
            details: String::new(),
            last_updated: Utc::now(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn period_parses_upstream_payload() {
        let raw = r#"{
            "name": "Today",
            "isDaytime": true,
            "temperature": 75,
            "temperatureUnit": "F",
            "shortForecast": "Partly Cloudy",
            "detailedForecast": "Partly cloudy, with a high near 75."
        }"#;

        let period: ForecastPeriod = serde_json::from_str(raw).unwrap();
        assert_eq!(period.name, "Today");
        assert!(period.is_daytime);
        assert_eq!(period.temperature, 75);
        assert_eq!(period.temperature_unit, "F");
        assert_eq!(period.short_forecast, "Partly Cloudy");
    }
}
