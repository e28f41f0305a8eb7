//! seed-figma: read-only node model for design-tool exports.
//!
//! Seed consumes exported design trees (frames, component instances, text
//! leaves, paints) to infer component descriptors. This crate only models
//! the data and loads it; it never mutates or validates the tree.
//!
//! # Quick Start
//!
//! ```ignore
//! use seed_figma::ExportPayload;
//!
//! let payload = ExportPayload::from_slice(&file_bytes)?;
//! for child in payload.root().children() {
//!     println!("{}", child.name);
//! }
//! ```

pub mod error;
pub mod export;
pub mod node;

pub use error::{FigmaError, Result};
pub use export::ExportPayload;
pub use node::{
    ComponentProperties, ComponentProperty, ComponentPropertyType, Node, NodeType, Paint, Vector2,
};
