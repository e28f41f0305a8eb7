//! Interaction state inference.

use super::strategy::{first_match, Strategy};
use crate::model::State;
use seed_figma::Node;

/// Name keywords in priority order.
const STATE_KEYWORDS: &[(&[&str], State)] = &[
    (&["hover"], State::Hover),
    (&["focus"], State::Focus),
    (&["active", "pressed"], State::Active),
    (&["disabled"], State::Disabled),
    (&["loading"], State::Loading),
];

/// Nodes fainter than this are drawn disabled.
const DISABLED_MAX_OPACITY: f64 = 0.6;

/// Infer the state; explicit naming outranks opacity.
pub fn extract_state(node: &Node) -> State {
    let chain: [Strategy<Node, State>; 2] = [from_name, from_opacity];
    first_match(&chain, node).unwrap_or_default()
}

fn from_name(node: &Node) -> Option<State> {
    let name = node.name.to_lowercase();
    STATE_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(_, state)| *state)
}

fn from_opacity(node: &Node) -> Option<State> {
    (node.opacity() < DISABLED_MAX_OPACITY).then_some(State::Disabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_keywords() {
        assert_eq!(extract_state(&Node::instance("Button/Hover")), State::Hover);
        assert_eq!(extract_state(&Node::instance("button focus ring")), State::Focus);
        assert_eq!(extract_state(&Node::instance("Pressed")), State::Active);
        assert_eq!(extract_state(&Node::instance("ACTIVE")), State::Active);
        assert_eq!(extract_state(&Node::instance("Disabled")), State::Disabled);
        assert_eq!(extract_state(&Node::instance("Loading…")), State::Loading);
        assert_eq!(extract_state(&Node::instance("Button")), State::Default);
    }

    #[test]
    fn test_keyword_priority() {
        assert_eq!(extract_state(&Node::instance("hover disabled")), State::Hover);
        assert_eq!(extract_state(&Node::instance("loading, focus")), State::Focus);
    }

    #[test]
    fn test_opacity_fallback() {
        assert_eq!(extract_state(&Node::instance("Button").with_opacity(0.5)), State::Disabled);
        assert_eq!(extract_state(&Node::instance("Button").with_opacity(0.6)), State::Default);
    }

    #[test]
    fn test_name_beats_opacity() {
        let node = Node::instance("Hover").with_opacity(0.3);
        assert_eq!(extract_state(&node), State::Hover);
    }
}
