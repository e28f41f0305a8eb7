//! Per-button property extraction.
//!
//! One candidate instance goes in, one [`ButtonProperties`] comes out. Each
//! property has its own extractor; none of them sees another's result except
//! the variant extractor, which reads the label text as its primary signal.

mod icons;
mod size;
mod state;
mod strategy;
mod text;
mod variant;

pub use icons::{extract_icons, SHOW_LEFT_ICON, SHOW_RIGHT_ICON};
pub use size::extract_size;
pub use state::extract_state;
pub use strategy::{first_match, Strategy};
pub use text::{extract_text, DEFAULT_TEXT, TEXT_PROPERTY};
pub use variant::{extract_variant, VariantSignals};

use crate::icons::IconResolver;
use crate::model::ButtonProperties;
use crate::options::ExtractOptions;
use seed_figma::{ComponentProperties, Node};
use std::sync::OnceLock;
use tracing::debug;

/// A candidate node together with its component properties.
#[derive(Debug, Clone, Copy)]
pub struct ButtonContext<'a> {
    pub node: &'a Node,
    pub properties: &'a ComponentProperties,
}

/// Extracts button descriptors from export nodes.
#[derive(Debug, Clone)]
pub struct ButtonExtractor {
    options: ExtractOptions,
    icons: IconResolver,
}

impl ButtonExtractor {
    /// Create an extractor with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        let icons = IconResolver::with_aliases(&options.icon_aliases);
        Self { options, icons }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Whether the walker should hand `node` to [`Self::extract_node`].
    pub fn is_candidate(&self, node: &Node) -> bool {
        node.is_instance() && node.name == self.options.component_name
    }

    /// Extract a descriptor from one node.
    ///
    /// Returns `None` when the node is absent or not an instance; any
    /// instance yields a descriptor.
    pub fn extract_node<'a>(&self, node: Option<&'a Node>) -> Option<ButtonProperties<'a>> {
        let node = node.filter(|node| node.is_instance())?;

        let empty = ComponentProperties::new();
        let properties = node.component_properties.as_ref().unwrap_or(&empty);
        let ctx = ButtonContext { node, properties };

        let text = extract_text(&ctx);
        let icons = extract_icons(&ctx, &self.icons);
        let variant = extract_variant(node, &text);
        let size = extract_size(node);
        let state = extract_state(node);

        debug!(
            name = %node.name,
            %text,
            %variant,
            %size,
            %state,
            "extracted button"
        );

        Some(ButtonProperties {
            text,
            variant,
            size,
            state,
            left_icon: icons.left_icon,
            right_icon: icons.right_icon,
            show_left_icon: icons.show_left_icon,
            show_right_icon: icons.show_right_icon,
            raw_node: node,
        })
    }
}

impl Default for ButtonExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

pub(crate) fn default_extractor() -> &'static ButtonExtractor {
    static EXTRACTOR: OnceLock<ButtonExtractor> = OnceLock::new();
    EXTRACTOR.get_or_init(ButtonExtractor::default)
}

/// Extract a descriptor from one node with the default options.
pub fn extract_button_properties(node: Option<&Node>) -> Option<ButtonProperties<'_>> {
    default_extractor().extract_node(node)
}
