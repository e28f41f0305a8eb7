//! Icon configuration extraction.

use super::ButtonContext;
use crate::icons::{is_icon_name, IconResolver};
use crate::model::IconConfig;
use seed_figma::{ComponentProperties, Node};

/// Property key prefix for the leading icon toggle.
pub const SHOW_LEFT_ICON: &str = "Show Left Icon";
/// Property key prefix for the trailing icon toggle.
pub const SHOW_RIGHT_ICON: &str = "Show Right Icon";

/// Extract leading/trailing icon identifiers and their visibility.
///
/// With a single icon child, that child is the candidate for both sides;
/// only the visibility flags decide where it surfaces.
pub fn extract_icons(ctx: &ButtonContext<'_>, resolver: &IconResolver) -> IconConfig {
    let show_left_icon = visibility_flag(ctx.properties, SHOW_LEFT_ICON);
    let show_right_icon = visibility_flag(ctx.properties, SHOW_RIGHT_ICON);

    let icon_children: Vec<&Node> = ctx
        .node
        .children()
        .iter()
        .filter(|child| child.is_instance() && is_icon_name(&child.name))
        .collect();

    let left = icon_children.first();
    let right = if icon_children.len() >= 2 {
        icon_children.last()
    } else {
        left
    };

    IconConfig {
        left_icon: left
            .filter(|_| show_left_icon)
            .and_then(|icon| resolver.resolve(&icon.name)),
        right_icon: right
            .filter(|_| show_right_icon)
            .and_then(|icon| resolver.resolve(&icon.name)),
        show_left_icon,
        show_right_icon,
    }
}

/// The last matching key decides; no matching key means hidden.
fn visibility_flag(properties: &ComponentProperties, prefix: &str) -> bool {
    properties
        .prefixed(prefix)
        .last()
        .map(|(_, prop)| prop.is_true())
        .unwrap_or(false)
}
