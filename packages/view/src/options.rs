use crate::errors::ViewResult;
use serde::{Deserialize, Serialize};

/// How children operations treat indices past the end of a container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangePolicy {
    /// Clamp insertion indices to the child count and clip removal runs
    #[default]
    Clip,

    /// Reject out-of-range insertion indices and removal runs
    Strict,
}

/// Configuration options for a view document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewOptions {
    /// Out-of-range handling for `insert_children` and `remove_children`
    pub range_policy: RangePolicy,
}

impl ViewOptions {
    /// Create a new options instance that rejects out-of-range children operations
    pub fn strict() -> Self {
        Self {
            range_policy: RangePolicy::Strict,
        }
    }

    /// Parse options from a JSON object, missing fields take their defaults
    pub fn from_json(source: &str) -> ViewResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(ViewOptions::default().range_policy, RangePolicy::Clip);
    }

    #[test]
    fn test_from_json() {
        let options = ViewOptions::from_json(r#"{ "rangePolicy": "strict" }"#).unwrap();
        assert_eq!(options, ViewOptions::strict());

        let options = ViewOptions::from_json("{}").unwrap();
        assert_eq!(options, ViewOptions::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        let result = ViewOptions::from_json(r#"{ "rangePolicy": "lenient" }"#);
        assert!(result.is_err());
    }
}
