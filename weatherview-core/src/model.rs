use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::imagery::ImageRef;

/// Current conditions as delivered by the data source.
///
/// Numeric fields are passed through verbatim; ranges (percentages, units)
/// are conventions of the endpoint and are not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: f64,
    pub feels_like: f64,
    /// Lookup key for background imagery, e.g. "Sunny".
    pub condition: String,
    pub precipitation_probability: f64,
    /// km/hr
    pub wind_speed: f64,
    /// mm
    pub atm_pressure: f64,
    pub humidity: f64,
    pub risk_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub city: String,
}

/// Wire shape of the data source response body.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    pub weather: WeatherRecord,
    pub location: LocationRecord,
}

/// One fully populated successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub weather: WeatherRecord,
    pub location: LocationRecord,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn new(weather: WeatherRecord, location: LocationRecord) -> Self {
        Self { weather, location, fetched_at: Utc::now() }
    }
}

impl From<WeatherPayload> for WeatherSnapshot {
    fn from(payload: WeatherPayload) -> Self {
        Self::new(payload.weather, payload.location)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedPlace {
    pub name: &'static str,
    /// Display string, e.g. "15 KM".
    pub distance: &'static str,
    pub description: &'static str,
    pub image: ImageRef,
}

/// One day of the decorative rain-chance chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RainChanceSample {
    pub day: &'static str,
    pub level: &'static str,
    pub height: f64,
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_into_snapshot() {
        let body = r#"{
            "weather": {
                "temperature": 21, "feels_like": 19.5, "condition": "Sunny",
                "precipitation_probability": 10, "wind_speed": 12,
                "atm_pressure": 760, "humidity": 45, "risk_factor": 5
            },
            "location": { "city": "Kathmandu" },
            "source": "ignored"
        }"#;

        let payload: WeatherPayload = serde_json::from_str(body).expect("payload should parse");
        let snapshot = WeatherSnapshot::from(payload);

        assert_eq!(snapshot.weather.temperature, 21.0);
        assert_eq!(snapshot.weather.feels_like, 19.5);
        assert_eq!(snapshot.weather.condition, "Sunny");
        assert_eq!(snapshot.location.city, "Kathmandu");
    }

    #[test]
    fn payload_missing_field_is_rejected() {
        let body = r#"{
            "weather": {
                "temperature": 21, "feels_like": 19, "condition": "Sunny",
                "precipitation_probability": 10, "wind_speed": 12,
                "atm_pressure": 760, "humidity": 45
            },
            "location": { "city": "Kathmandu" }
        }"#;

        let err = serde_json::from_str::<WeatherPayload>(body).unwrap_err();
        assert!(err.to_string().contains("risk_factor"));
    }

    #[test]
    fn payload_with_wrong_type_is_rejected() {
        let body = r#"{
            "weather": {
                "temperature": "warm", "feels_like": 19, "condition": "Sunny",
                "precipitation_probability": 10, "wind_speed": 12,
                "atm_pressure": 760, "humidity": 45, "risk_factor": 1
            },
            "location": { "city": "Kathmandu" }
        }"#;

        assert!(serde_json::from_str::<WeatherPayload>(body).is_err());
    }
}
