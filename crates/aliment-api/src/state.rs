//! Application state shared across all handlers.

use std::sync::Arc;

use aliment_core::config::AppConfig;
use aliment_database::AlimentRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. The repository is
/// held behind the abstract contract so any backend satisfying it can be
/// swapped in without touching handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Aliment repository.
    pub repo: Arc<dyn AlimentRepository>,
}
