//! Whole-tree button discovery.

use crate::extract::{default_extractor, ButtonExtractor};
use crate::model::ButtonProperties;
use seed_figma::{ExportPayload, Node};
use tracing::{debug, trace};

impl ButtonExtractor {
    /// Extract every button in an export, in document order.
    pub fn extract_all<'a>(&self, payload: &'a ExportPayload) -> Vec<ButtonProperties<'a>> {
        self.extract_tree(payload.root())
    }

    /// Extract every button under `root`, in depth-first pre-order.
    ///
    /// Candidates are walked into as well, so buttons nested inside other
    /// buttons are reported after their parent.
    pub fn extract_tree<'a>(&self, root: &'a Node) -> Vec<ButtonProperties<'a>> {
        let mut buttons = Vec::new();
        self.walk(root, &mut buttons);
        debug!(root = %root.name, count = buttons.len(), "extracted buttons");
        buttons
    }

    fn walk<'a>(&self, node: &'a Node, buttons: &mut Vec<ButtonProperties<'a>>) {
        if self.is_candidate(node) {
            trace!(id = ?node.id, "found button candidate");
            if let Some(button) = self.extract_node(Some(node)) {
                buttons.push(button);
            }
        }

        for child in node.children() {
            self.walk(child, buttons);
        }
    }
}

/// Extract every button in an export with the default options.
pub fn extract_all_buttons(payload: &ExportPayload) -> Vec<ButtonProperties<'_>> {
    default_extractor().extract_all(payload)
}
