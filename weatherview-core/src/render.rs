//! Presentation of a resolved [`ViewState`].
//!
//! [`present`] turns state into a [`Screen`], the exact content to show.
//! [`Screen::to_text`] lays that content out for a terminal; the same
//! value serializes to JSON for other front ends.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::{
    advisory::{AdvisoryLevel, derive_advisory},
    catalog::{rain_chance_samples, recommended_places},
    chart::{Bar, layout_bars, render_text},
    imagery::{ImageRef, select_background_image},
    model::{RecommendedPlace, WeatherSnapshot},
    view::ViewState,
};

pub const LOADING_CAPTION: &str = "Loading Weather Data...";
pub const FAILURE_MESSAGE: &str = "Failed to load weather data. Please try again later.";

/// Height units per text row when the chart is drawn in a terminal.
const TEXT_ROW_UNIT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Screen {
    Loading { caption: &'static str },
    Failed { message: &'static str },
    Ready(Box<Presentation>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub background: ImageRef,
    pub header: Header,
    pub details: Details,
    pub advisory: Advisory,
    pub places: &'static [RecommendedPlace],
    pub rain_chart: Vec<Bar>,
    /// When the snapshot behind this screen was fetched.
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub temperature: String,
    pub condition: String,
    pub city: String,
    pub feels_like: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Details {
    pub precipitation: String,
    pub wind: String,
    pub pressure: String,
    pub humidity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub message: &'static str,
}

pub fn present(state: &ViewState) -> Screen {
    match state {
        ViewState::Loading => Screen::Loading { caption: LOADING_CAPTION },
        ViewState::Failed => Screen::Failed { message: FAILURE_MESSAGE },
        ViewState::Ready(snapshot) => Screen::Ready(Box::new(Presentation::from(snapshot))),
    }
}

impl From<&WeatherSnapshot> for Presentation {
    fn from(snapshot: &WeatherSnapshot) -> Self {
        let w = &snapshot.weather;
        let level = derive_advisory(w.risk_factor);

        Self {
            background: ImageRef::SCREEN_BACKGROUND,
            header: Header {
                temperature: format!("{}°C", w.temperature),
                condition: w.condition.clone(),
                city: snapshot.location.city.clone(),
                feels_like: format!("Feels Like {}°C", w.feels_like),
                image: select_background_image(&w.condition),
            },
            details: Details {
                precipitation: format!("{}% Precipitation", w.precipitation_probability),
                wind: format!("{} km/hr Wind", w.wind_speed),
                pressure: format!("{} mm Atm Pressure", w.atm_pressure),
                humidity: format!("{}% Humidity", w.humidity),
            },
            advisory: Advisory { level, message: level.message() },
            places: recommended_places(),
            rain_chart: layout_bars(rain_chance_samples()),
            fetched_at: snapshot.fetched_at,
        }
    }
}

impl Screen {
    pub fn is_ready(&self) -> bool {
        matches!(self, Screen::Ready(_))
    }

    /// Terminal layout. Image references resolve against `asset_dir` when given.
    pub fn to_text(&self, asset_dir: Option<&Path>) -> String {
        match self {
            Screen::Loading { caption } => format!("... {caption}\n"),
            Screen::Failed { message } => format!("{message}\n"),
            Screen::Ready(p) => p.to_text(asset_dir),
        }
    }
}

impl Presentation {
    fn to_text(&self, asset_dir: Option<&Path>) -> String {
        let rule = "=".repeat(40);
        let h = &self.header;
        let d = &self.details;

        let mut lines = vec![
            format!("[background: {}]", self.background.resolve(asset_dir).display()),
            rule.clone(),
            format!("  {}", h.temperature),
            format!("  {}", h.condition),
            format!("  {}", h.city),
            format!("  {}", h.feels_like),
            format!("  [image: {}]", h.image.resolve(asset_dir).display()),
            rule,
            format!("  {:<24}{}", d.precipitation, d.wind),
            format!("  {:<24}{}", d.pressure, d.humidity),
            String::new(),
            format!("  {}", self.advisory.message),
            String::new(),
            "Recommended Places".to_string(),
        ];

        lines.extend(self.places.iter().map(|place| {
            format!(
                "  - {} ({})  {}  [image: {}]",
                place.name,
                place.distance,
                place.description,
                place.image.resolve(asset_dir).display()
            )
        }));
        lines.push(String::new());
        lines.push("Chances of Rain".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out.push_str(&render_text(&self.rain_chart, TEXT_ROW_UNIT));
        out
    }
}
