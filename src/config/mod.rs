//! Catalog configuration for the tool rental engine.
//!
//! This module provides the lookup traits the checkout depends on, an
//! in-memory catalog implementing them, and a loader that fills the catalog
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::ConfigLoader;
//!
//! let catalog = ConfigLoader::load("./config/catalog").unwrap().into_catalog();
//! println!("Loaded {} tools", catalog.tool_count());
//! ```

mod catalog;
mod loader;
mod types;

pub use catalog::{Catalog, PolicyCatalog, ToolCatalog};
pub use loader::{ConfigLoader, DEFAULT_CATALOG_DIR};
pub use types::{PoliciesConfig, ToolsConfig};
