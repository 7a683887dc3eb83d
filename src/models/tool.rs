//! Tool model.
//!
//! A [`Tool`] is a single rentable item. Its `tool_type` is the key used to
//! look up the [`ChargePolicy`](super::ChargePolicy) that bills it.

use serde::{Deserialize, Serialize};

/// Represents a rentable tool from the catalog.
///
/// # Example
///
/// ```
/// use tool_rental::models::Tool;
///
/// let ladder = Tool::new("LADW", "Ladder", "Werner");
/// assert_eq!(ladder.code, "LADW");
/// assert_eq!(ladder.tool_type, "Ladder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique catalog code (e.g., "LADW").
    pub code: String,
    /// The tool type, which selects the charge policy (e.g., "Ladder").
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Brand name, for display only.
    pub brand: String,
}

impl Tool {
    /// Creates a new tool.
    pub fn new(
        code: impl Into<String>,
        tool_type: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            tool_type: tool_type.into(),
            brand: brand.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_serializes_type_field() {
        let tool = Tool::new("CHNS", "Chainsaw", "Stihl");
        let json = serde_json::to_string(&tool).unwrap();
        assert!(json.contains("\"type\":\"Chainsaw\""));
        assert!(!json.contains("tool_type"));
    }

    #[test]
    fn test_tool_deserializes_from_yaml() {
        let yaml = "code: JAKR\ntype: Jackhammer\nbrand: Ridgid\n";
        let tool: Tool = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tool, Tool::new("JAKR", "Jackhammer", "Ridgid"));
    }
}
