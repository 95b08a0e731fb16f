//! The weather screen's view-model.
//!
//! A [`WeatherView`] lives exactly as long as the screen it backs: create it
//! with [`WeatherView::mount`], drop it (or call [`WeatherView::unmount`])
//! when the screen goes away. It starts in [`ViewState::Loading`] and is
//! resolved once, by the single fetch issued at first display.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::{
    model::WeatherSnapshot,
    render::{Screen, present},
    source::{FetchError, WeatherDataSource},
};

/// Lifecycle of the screen. "Loading with a snapshot" has no variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Failed,
    Ready(WeatherSnapshot),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            ViewState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// Handle to the in-flight fetch task.
///
/// Dropping it detaches the task; its result is then never delivered.
#[derive(Debug)]
pub struct PendingFetch {
    handle: JoinHandle<Result<WeatherSnapshot, FetchError>>,
}

impl PendingFetch {
    pub fn spawn(source: Arc<dyn WeatherDataSource>) -> Self {
        let handle = tokio::spawn(async move { source.fetch().await });
        Self { handle }
    }

    /// Wait for the fetch to finish.
    pub async fn resolve(self) -> Result<WeatherSnapshot, FetchError> {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(join_err) => Err(FetchError::Interrupted(join_err.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct WeatherView {
    state: ViewState,
    load_started: bool,
    mounted: bool,
}

impl WeatherView {
    pub fn mount() -> Self {
        debug!("weather view mounted");
        Self { state: ViewState::Loading, load_started: false, mounted: true }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.state.snapshot()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Content to draw for the current state.
    pub fn screen(&self) -> Screen {
        present(&self.state)
    }

    /// Kick off the one fetch for this screen.
    ///
    /// Returns `None` if a load was already started or the view is gone.
    pub fn start_load(&mut self, source: Arc<dyn WeatherDataSource>) -> Option<PendingFetch> {
        if !self.claim_load() {
            return None;
        }
        Some(PendingFetch::spawn(source))
    }

    /// Fetch in place and resolve the view. Later calls do nothing.
    pub async fn load_weather<S>(&mut self, source: &S)
    where
        S: WeatherDataSource + ?Sized,
    {
        if !self.claim_load() {
            return;
        }
        let outcome = source.fetch().await;
        self.complete(outcome);
    }

    /// Deliver the fetch outcome. Returns whether it was applied.
    ///
    /// Every error resolves to [`ViewState::Failed`]; the cause only goes to the log.
    pub fn complete(&mut self, outcome: Result<WeatherSnapshot, FetchError>) -> bool {
        if !self.mounted {
            debug!(ok = outcome.is_ok(), "weather view already unmounted, discarding fetch result");
            return false;
        }

        self.state = match outcome {
            Ok(snapshot) => {
                debug!(
                    city = %snapshot.location.city,
                    fetched_at = %snapshot.fetched_at,
                    "weather loaded"
                );
                ViewState::Ready(snapshot)
            }
            Err(err) => {
                error!(kind = err.kind(), error = %err, "Failed to fetch weather data");
                ViewState::Failed
            }
        };
        true
    }

    pub fn unmount(&mut self) {
        if self.mounted {
            debug!(loading = self.is_loading(), "weather view unmounted");
        }
        self.mounted = false;
    }

    fn claim_load(&mut self) -> bool {
        if !self.mounted {
            debug!("load requested on unmounted weather view");
            return false;
        }
        if self.load_started {
            debug!("weather load already started, ignoring");
            return false;
        }
        self.load_started = true;
        true
    }
}
