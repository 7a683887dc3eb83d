//! Catalog file types.
//!
//! These are the structures deserialized from the YAML files of a catalog
//! directory.

use serde::Deserialize;

use crate::models::{ChargePolicy, Tool};

/// Structure of `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// Every rentable tool.
    pub tools: Vec<Tool>,
}

/// Structure of `policies.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliciesConfig {
    /// One charge policy per tool type.
    pub policies: Vec<ChargePolicy>,
}
