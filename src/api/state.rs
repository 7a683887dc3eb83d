//! Application state for the tool rental API.

use std::sync::Arc;

use crate::config::Catalog;

/// Shared application state.
///
/// Holds the catalog, which is loaded once at startup and only read after.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates a new application state around a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns the shared catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
