//! Label text extraction.

use super::strategy::{first_match, Strategy};
use super::ButtonContext;

/// Property key prefix carrying the label text.
pub const TEXT_PROPERTY: &str = "Button Text";

/// Label used when nothing else is found.
pub const DEFAULT_TEXT: &str = "Button";

/// Extract the label text.
///
/// An explicit component property outranks a text child, which outranks
/// the default label.
pub fn extract_text(ctx: &ButtonContext<'_>) -> String {
    let chain = [
        from_property as Strategy<ButtonContext<'_>, String>,
        from_text_child as Strategy<ButtonContext<'_>, String>,
    ];
    first_match(&chain, ctx).unwrap_or_else(|| DEFAULT_TEXT.to_string())
}

/// Only the first `Button Text*` entry is consulted.
fn from_property(ctx: &ButtonContext<'_>) -> Option<String> {
    ctx.properties
        .find_prefixed(TEXT_PROPERTY)
        .and_then(|prop| prop.as_text())
}

fn from_text_child(ctx: &ButtonContext<'_>) -> Option<String> {
    ctx.node
        .children()
        .iter()
        .filter(|child| child.is_text())
        .find_map(|child| child.characters())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_figma::{ComponentProperties, Node};

    fn text_of(node: &Node) -> String {
        let empty = ComponentProperties::new();
        let properties = node.component_properties.as_ref().unwrap_or(&empty);
        extract_text(&ButtonContext { node, properties })
    }

    #[test]
    fn test_property_wins_over_child() {
        let node = Node::instance("Button")
            .with_property("Button Text#12:0", "Submit")
            .with_child(Node::text("Child label"));
        assert_eq!(text_of(&node), "Submit");
    }

    #[test]
    fn test_child_wins_over_default() {
        let node = Node::instance("Button")
            .with_child(Node::instance("Icon / Send"))
            .with_child(Node::text(""))
            .with_child(Node::text("Send"));
        assert_eq!(text_of(&node), "Send");
    }

    #[test]
    fn test_default_text() {
        assert_eq!(text_of(&Node::instance("Button")), "Button");
    }

    #[test]
    fn test_falsy_property_falls_through() {
        let node = Node::instance("Button")
            .with_property("Button Text", "")
            .with_child(Node::text("From child"));
        assert_eq!(text_of(&node), "From child");
    }

    #[test]
    fn test_only_first_prefixed_entry_counts() {
        let node = Node::instance("Button")
            .with_property("Button Text#1", false)
            .with_property("Button Text#2", "Second");
        assert_eq!(text_of(&node), "Button");
    }

    #[test]
    fn test_nested_text_is_ignored() {
        let node = Node::instance("Button")
            .with_child(Node::new(seed_figma::NodeType::Frame, "Content").with_child(Node::text("Deep")));
        assert_eq!(text_of(&node), "Button");
    }
}
