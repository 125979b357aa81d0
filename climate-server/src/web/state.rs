//! Application state for the web layer.

use crate::store::{ClimateStore, ReportingWindow, StoreError};

/// Shared application state.
///
/// Built once at startup and cloned into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Climate database handle
    pub store: ClimateStore,

    /// The "last 12 months" window, absent for an empty dataset
    pub window: Option<ReportingWindow>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: ClimateStore, window: Option<ReportingWindow>) -> Self {
        Self { store, window }
    }

    /// Build the state by deriving the reporting window from the store.
    pub async fn load(store: ClimateStore) -> Result<Self, StoreError> {
        let window = ReportingWindow::load(&store).await?;
        Ok(Self::new(store, window))
    }

    /// Exclusive lower date bound for the "last 12 months" routes.
    pub fn threshold_key(&self) -> Option<String> {
        self.window.as_ref().map(ReportingWindow::threshold_key)
    }
}
