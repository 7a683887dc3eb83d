//! Catalog loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tool and
//! charge policy catalog from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::calculation::CURRENCY_DECIMAL_PLACES;
use crate::error::{RentalError, RentalResult};

use super::catalog::Catalog;
use super::types::{PoliciesConfig, ToolsConfig};

/// Default catalog directory, relative to the working directory.
pub const DEFAULT_CATALOG_DIR: &str = "./config/catalog";

/// Loads the rental catalog from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/catalog/
/// ├── tools.yaml      # Rentable tools (code, type, brand)
/// └── policies.yaml   # One charge policy per tool type
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::{ConfigLoader, ToolCatalog};
///
/// let loader = ConfigLoader::load("./config/catalog")?;
/// let ladder = loader.catalog().tool_by_code("LADW");
/// println!("Ladder: {:?}", ladder);
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: Catalog,
}

impl ConfigLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// Returns an error if either file is missing, is not valid YAML, lists
    /// the same tool code or tool type twice, or prices a policy in fractions
    /// of a cent. Tools whose type has no
    /// policy are loaded with a warning; checking them out fails later with
    /// [`RentalError::InvalidToolCode`].
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let path = path.as_ref();

        let tools_path = path.join("tools.yaml");
        let tools_config = Self::load_yaml::<ToolsConfig>(&tools_path)?;

        let policies_path = path.join("policies.yaml");
        let policies_config = Self::load_yaml::<PoliciesConfig>(&policies_path)?;

        Self::ensure_unique(
            &tools_path,
            "tool code",
            tools_config.tools.iter().map(|t| t.code.as_str()),
        )?;
        Self::ensure_unique(
            &policies_path,
            "tool type",
            policies_config.policies.iter().map(|p| p.tool_type.as_str()),
        )?;

        Self::ensure_whole_cents(&policies_path, &policies_config)?;

        let mut catalog = Catalog::new();
        for tool in tools_config.tools {
            catalog.add_tool(tool);
        }
        for policy in policies_config.policies {
            catalog.add_policy(policy);
        }

        for code in catalog.tools_without_policy() {
            warn!(tool_code = %code, "Tool type has no charge policy");
        }

        info!(
            path = %path.display(),
            tools = catalog.tool_count(),
            policies = catalog.policy_count(),
            "Loaded rental catalog"
        );

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RentalResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RentalError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn ensure_unique<'a>(
        path: &Path,
        what: &str,
        keys: impl Iterator<Item = &'a str>,
    ) -> RentalResult<()> {
        let mut seen = HashSet::new();
        for key in keys {
            if !seen.insert(key) {
                return Err(RentalError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate {} '{}'", what, key),
                });
            }
        }
        Ok(())
    }

    fn ensure_whole_cents(path: &Path, policies: &PoliciesConfig) -> RentalResult<()> {
        for policy in &policies.policies {
            if policy.daily_rate.normalize().scale() > CURRENCY_DECIMAL_PLACES {
                return Err(RentalError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "daily rate {} for tool type '{}' is not a whole number of cents",
                        policy.daily_rate, policy.tool_type
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consumes the loader, returning the catalog.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
