//! Tool and charge policy lookup.
//!
//! The checkout only needs to find a tool by code and a policy by tool type.
//! Those two capabilities are the [`ToolCatalog`] and [`PolicyCatalog`]
//! traits; [`Catalog`] is the in-memory implementation of both.

use std::collections::HashMap;

use crate::models::{ChargePolicy, Tool};

/// Looks up tools by their catalog code.
pub trait ToolCatalog {
    /// Returns the tool with the given code, if any.
    fn tool_by_code(&self, code: &str) -> Option<&Tool>;
}

/// Looks up charge policies by tool type.
pub trait PolicyCatalog {
    /// Returns the policy for the given tool type, if any.
    fn policy_for_type(&self, tool_type: &str) -> Option<&ChargePolicy>;
}

/// In-memory tool and policy catalog.
///
/// Populated once, then only read.
///
/// # Example
///
/// ```
/// use tool_rental::config::{Catalog, PolicyCatalog, ToolCatalog};
/// use tool_rental::models::{ChargePolicy, Tool};
/// use rust_decimal::Decimal;
///
/// let catalog = Catalog::new()
///     .with_tool(Tool::new("LADW", "Ladder", "Werner"))
///     .with_policy(ChargePolicy {
///         tool_type: "Ladder".to_string(),
///         daily_rate: Decimal::new(199, 2),
///         weekday_billable: true,
///         weekend_billable: true,
///         holiday_billable: false,
///     });
///
/// let tool = catalog.tool_by_code("LADW").unwrap();
/// assert!(catalog.policy_for_type(&tool.tool_type).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: HashMap<String, Tool>,
    policies: HashMap<String, ChargePolicy>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool, replacing any tool with the same code.
    pub fn add_tool(&mut self, tool: Tool) {
        self.tools.insert(tool.code.clone(), tool);
    }

    /// Adds a policy, replacing any policy for the same tool type.
    pub fn add_policy(&mut self, policy: ChargePolicy) {
        self.policies.insert(policy.tool_type.clone(), policy);
    }

    /// Builder form of [`Catalog::add_tool`].
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.add_tool(tool);
        self
    }

    /// Builder form of [`Catalog::add_policy`].
    pub fn with_policy(mut self, policy: ChargePolicy) -> Self {
        self.add_policy(policy);
        self
    }

    /// All tools, sorted by code.
    pub fn tools(&self) -> Vec<&Tool> {
        let mut tools: Vec<&Tool> = self.tools.values().collect();
        tools.sort_by(|a, b| a.code.cmp(&b.code));
        tools
    }

    /// Number of tools in the catalog.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Number of policies in the catalog.
    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    /// Codes of tools whose type has no policy, sorted.
    pub fn tools_without_policy(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .tools
            .values()
            .filter(|tool| !self.policies.contains_key(&tool.tool_type))
            .map(|tool| tool.code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }
}

impl ToolCatalog for Catalog {
    fn tool_by_code(&self, code: &str) -> Option<&Tool> {
        self.tools.get(code)
    }
}

impl PolicyCatalog for Catalog {
    fn policy_for_type(&self, tool_type: &str) -> Option<&ChargePolicy> {
        self.policies.get(tool_type)
    }
}
