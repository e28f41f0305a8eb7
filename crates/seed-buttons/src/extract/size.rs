//! Size class inference from dimensions.

use super::strategy::{first_match, Strategy};
use crate::model::Size;
use seed_figma::Node;

/// Heights at or below this are small.
const SMALL_MAX_HEIGHT: f64 = 36.0;
/// Heights at or above this are large.
const LARGE_MIN_HEIGHT: f64 = 44.0;
/// Width and height closer than this count as square.
const SQUARE_TOLERANCE: f64 = 5.0;
/// Icon-only buttons are narrower than this.
const ICON_MAX_WIDTH: f64 = 50.0;

/// Infer the size class.
pub fn extract_size(node: &Node) -> Size {
    let chain: [Strategy<Node, Size>; 2] = [from_height, icon_only];
    first_match(&chain, node).unwrap_or_default()
}

fn from_height(node: &Node) -> Option<Size> {
    let height = node.height();
    if height <= SMALL_MAX_HEIGHT {
        Some(Size::Sm)
    } else if height >= LARGE_MIN_HEIGHT {
        Some(Size::Lg)
    } else {
        None
    }
}

fn icon_only(node: &Node) -> Option<Size> {
    let (width, height) = (node.width(), node.height());
    ((width - height).abs() < SQUARE_TOLERANCE && width < ICON_MAX_WIDTH).then_some(Size::Icon)
}
