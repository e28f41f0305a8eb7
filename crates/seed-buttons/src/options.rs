//! Extraction options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Component name that marks a candidate instance.
pub const DEFAULT_COMPONENT_NAME: &str = "Button";

/// Options for button extraction.
///
/// The defaults reproduce the stock heuristics exactly; options only widen
/// what is recognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Exact instance name that marks a button candidate.
    pub component_name: String,
    /// Extra icon aliases, applied over the built-in table.
    ///
    /// A `None` target marks the token as a placeholder that resolves to
    /// no icon.
    pub icon_aliases: IndexMap<String, Option<String>>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            icon_aliases: IndexMap::new(),
        }
    }
}

impl ExtractOptions {
    /// Create default extraction options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match candidates by a different component name.
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    /// Map an icon token to a canonical identifier, or to no icon.
    pub fn with_icon_alias(mut self, token: impl Into<String>, canonical: Option<&str>) -> Self {
        self.icon_aliases
            .insert(token.into(), canonical.map(str::to_string));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExtractOptions::new();
        assert_eq!(options.component_name, "Button");
        assert!(options.icon_aliases.is_empty());
    }

    #[test]
    fn test_builders() {
        let options = ExtractOptions::new()
            .with_component_name("Primary Button")
            .with_icon_alias("Bin", Some("Trash2"))
            .with_icon_alias("Dot", None);

        assert_eq!(options.component_name, "Primary Button");
        assert_eq!(options.icon_aliases.get("Bin"), Some(&Some("Trash2".to_string())));
        assert_eq!(options.icon_aliases.get("Dot"), Some(&None));
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ExtractOptions =
            serde_json::from_str(r#"{ "icon_aliases": { "Bin": "Trash2" } }"#).unwrap();
        assert_eq!(options.component_name, "Button");
        assert_eq!(options.icon_aliases.len(), 1);
    }
}
