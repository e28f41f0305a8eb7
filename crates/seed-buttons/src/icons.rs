//! Icon name resolution.
//!
//! Icon instances are named `Icon / <Token>` by the design system. The token
//! usually matches the icon library's identifier already; the alias table
//! covers the cases where it does not, and the placeholder tokens that stand
//! for "no icon".

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// Design-tool icon tokens that differ from their icon-library identifier.
///
/// `None` marks placeholders: recognized, but intentionally no icon.
const BUILTIN_ALIASES: &[(&str, Option<&str>)] = &[
    // Placeholders
    ("Circle", None),
    ("Placeholder", None),
    ("Empty", None),
    ("None", None),
    // Renamed icons
    ("Close", Some("X")),
    ("Cross", Some("X")),
    ("Add", Some("Plus")),
    ("Trash", Some("Trash2")),
    ("Delete", Some("Trash2")),
    ("Edit", Some("Pencil")),
    ("Gear", Some("Settings")),
    ("Magnifier", Some("Search")),
    ("Email", Some("Mail")),
    ("Person", Some("User")),
    ("Hamburger", Some("Menu")),
    ("Warning", Some("AlertTriangle")),
    ("Error", Some("AlertCircle")),
    ("Spinner", Some("Loader2")),
    ("Loading", Some("Loader2")),
    ("Arrow", Some("ArrowRight")),
    ("Chevron", Some("ChevronRight")),
    ("Caret", Some("ChevronDown")),
];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Icon\s*/\s*([A-Za-z0-9_]+)").expect("icon token pattern is valid")
    })
}

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^Icon\s*/").expect("icon marker pattern is valid"))
}

/// Whether a layer name marks an icon instance (`Icon /...`).
pub fn is_icon_name(name: &str) -> bool {
    marker_pattern().is_match(name)
}

/// Extract the raw token from an icon layer name.
///
/// `"Icon / Send"` yields `"Send"`; names without the `Icon /` pattern
/// yield `None`.
pub fn icon_token(raw: &str) -> Option<&str> {
    token_pattern()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolve an icon layer name with the built-in alias table.
pub fn resolve_icon_name(raw: &str) -> Option<String> {
    default_resolver().resolve(raw)
}

fn default_resolver() -> &'static IconResolver {
    static RESOLVER: OnceLock<IconResolver> = OnceLock::new();
    RESOLVER.get_or_init(IconResolver::new)
}

/// Maps icon layer names to canonical icon-library identifiers.
#[derive(Debug, Clone)]
pub struct IconResolver {
    aliases: IndexMap<String, Option<String>>,
}

impl IconResolver {
    /// Create a resolver with the built-in alias table.
    pub fn new() -> Self {
        let aliases = BUILTIN_ALIASES
            .iter()
            .map(|(token, canonical)| (token.to_string(), canonical.map(str::to_string)))
            .collect();
        Self { aliases }
    }

    /// Create a resolver with extra aliases layered over the built-in table.
    pub fn with_aliases(extra: &IndexMap<String, Option<String>>) -> Self {
        let mut resolver = Self::new();
        for (token, canonical) in extra {
            resolver.aliases.insert(token.clone(), canonical.clone());
        }
        resolver
    }

    /// Resolve a raw icon layer name.
    ///
    /// Unknown tokens pass through unchanged; placeholder tokens and names
    /// without the icon pattern resolve to `None`.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let token = icon_token(raw)?;
        let resolved = match self.aliases.get(token) {
            Some(canonical) => canonical.clone(),
            None => Some(token.to_string()),
        };
        trace!(raw, token, ?resolved, "resolved icon name");
        resolved
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new()
    }
}
