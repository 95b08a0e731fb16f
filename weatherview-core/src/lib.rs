//! Core library for the `weatherview` screen.
//!
//! This crate defines:
//! - The screen's view-model and its load lifecycle
//! - The weather data source abstraction and its HTTP implementation
//! - Derived display values (advisory tier, background image)
//! - Static reference data and the rain-chance chart layout
//! - Configuration handling
//!
//! It is used by `weatherview-cli`, but can also back other front ends.

pub mod advisory;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod imagery;
pub mod model;
pub mod render;
pub mod source;
pub mod view;

pub use advisory::{AdvisoryLevel, derive_advisory};
pub use config::Config;
pub use imagery::{ImageRef, select_background_image};
pub use model::{LocationRecord, RainChanceSample, RecommendedPlace, WeatherRecord, WeatherSnapshot};
pub use render::Screen;
pub use source::{FetchError, HttpWeatherSource, WeatherDataSource, source_from_config};
pub use view::{PendingFetch, ViewState, WeatherView};
