//! Variant inference.
//!
//! The export does not carry the variant as a structured property. Demo and
//! placeholder exports encode it through the visible label instead, so the
//! label is checked first and paints are the fallback.

use super::strategy::{first_match, Strategy};
use crate::model::Variant;
use seed_figma::Node;

/// Fills at or below this opacity, or without one, do not count as a
/// background.
const BACKGROUND_OPACITY_THRESHOLD: f64 = 0.1;

/// Signals the variant is inferred from.
#[derive(Debug, Clone, Copy)]
pub struct VariantSignals<'a> {
    pub node: &'a Node,
    /// Already extracted label text.
    pub text: &'a str,
}

/// Infer the variant from the label, then from paints.
pub fn extract_variant(node: &Node, text: &str) -> Variant {
    let chain = [
        from_label as Strategy<VariantSignals<'_>, Variant>,
        from_paint as Strategy<VariantSignals<'_>, Variant>,
    ];
    first_match(&chain, &VariantSignals { node, text }).unwrap_or_default()
}

/// Exact, case-insensitive label match.
fn from_label(signals: &VariantSignals<'_>) -> Option<Variant> {
    match signals.text.to_lowercase().as_str() {
        "button" | "default" | "" => Some(Variant::Default),
        "outline" => Some(Variant::Outline),
        "ghost" => Some(Variant::Ghost),
        "link" => Some(Variant::Link),
        "destructive" => Some(Variant::Destructive),
        "secondary" => Some(Variant::Secondary),
        _ => None,
    }
}

/// Link, destructive and secondary cannot be told apart by paint alone, so
/// this never yields them.
fn from_paint(signals: &VariantSignals<'_>) -> Option<Variant> {
    let node = signals.node;
    let has_background = node
        .fills
        .iter()
        .any(|fill| {
            fill.is_visible()
                && fill
                    .opacity
                    .is_some_and(|opacity| opacity > BACKGROUND_OPACITY_THRESHOLD)
        });
    let has_stroke = node.strokes.iter().any(|stroke| stroke.is_visible());

    Some(match (has_background, has_stroke) {
        (false, true) => Variant::Outline,
        (false, false) => Variant::Ghost,
        (true, _) => Variant::Default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_figma::Paint;

    #[test]
    fn test_label_match_is_case_insensitive() {
        let node = Node::instance("Button");
        assert_eq!(extract_variant(&node, "Secondary"), Variant::Secondary);
        assert_eq!(extract_variant(&node, "DESTRUCTIVE"), Variant::Destructive);
        assert_eq!(extract_variant(&node, "link"), Variant::Link);
        assert_eq!(extract_variant(&node, "Outline"), Variant::Outline);
        assert_eq!(extract_variant(&node, "Ghost"), Variant::Ghost);
        assert_eq!(extract_variant(&node, "Button"), Variant::Default);
        assert_eq!(extract_variant(&node, ""), Variant::Default);
    }

    #[test]
    fn test_label_match_is_exact() {
        // No paints at all: anything that misses the label table is ghost.
        let node = Node::instance("Button");
        assert_eq!(extract_variant(&node, "Secondary action"), Variant::Ghost);
        assert_eq!(extract_variant(&node, " link"), Variant::Ghost);
    }

    #[test]
    fn test_paint_fallback() {
        let filled = Node::instance("Button").with_fill(Paint::solid(1.0));
        assert_eq!(extract_variant(&filled, "Save"), Variant::Default);

        let filled_and_stroked = filled.clone().with_stroke(Paint::solid(1.0));
        assert_eq!(extract_variant(&filled_and_stroked, "Save"), Variant::Default);

        let stroked = Node::instance("Button").with_stroke(Paint::solid(1.0));
        assert_eq!(extract_variant(&stroked, "Save"), Variant::Outline);

        let bare = Node::instance("Button");
        assert_eq!(extract_variant(&bare, "Save"), Variant::Ghost);
    }

    #[test]
    fn test_faint_or_hidden_fill_is_not_background() {
        let faint = Node::instance("Button").with_fill(Paint::solid(0.1));
        assert_eq!(extract_variant(&faint, "Save"), Variant::Ghost);

        let hidden = Node::instance("Button")
            .with_fill(Paint::solid(1.0).with_visible(false))
            .with_stroke(Paint::solid(1.0));
        assert_eq!(extract_variant(&hidden, "Save"), Variant::Outline);

        let hidden_stroke = Node::instance("Button").with_stroke(Paint::solid(1.0).with_visible(false));
        assert_eq!(extract_variant(&hidden_stroke, "Save"), Variant::Ghost);
    }

    #[test]
    fn test_fill_without_opacity_is_not_background() {
        let node: Node = serde_json::from_value(serde_json::json!({
            "type": "INSTANCE",
            "fills": [{ "type": "SOLID", "visible": true }]
        }))
        .unwrap();
        assert_eq!(extract_variant(&node, "Save"), Variant::Ghost);

        let stroked = node.with_stroke(Paint::solid(1.0));
        assert_eq!(extract_variant(&stroked, "Save"), Variant::Outline);
    }

    #[test]
    fn test_label_beats_paint() {
        let filled = Node::instance("Button").with_fill(Paint::solid(1.0));
        assert_eq!(extract_variant(&filled, "Outline"), Variant::Outline);
    }
}
