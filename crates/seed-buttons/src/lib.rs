//! Button component inference from design-tool exports.
//!
//! Exported design trees do not carry button semantics as first-class
//! fields. This crate walks an export, picks out `Button` instances, and
//! infers each one's label, variant, size, state and icons from component
//! properties, child layers, paints, dimensions and layer names.
//!
//! # Example
//!
//! ```ignore
//! use seed_buttons::{extract_all_buttons, to_json};
//! use seed_figma::ExportPayload;
//!
//! let payload = ExportPayload::from_slice(&file_bytes)?;
//! let buttons = extract_all_buttons(&payload);
//! println!("{}", to_json(&buttons)?);
//! ```
//!
//! Extraction never fails: every property degrades to a documented default.
//! Only the JSON wrappers return errors.

pub mod error;
pub mod extract;
pub mod icons;
pub mod model;
pub mod options;
pub mod walker;

pub use error::{ExtractError, Result};
pub use extract::{extract_button_properties, ButtonContext, ButtonExtractor};
pub use icons::{resolve_icon_name, IconResolver};
pub use model::{ButtonProperties, IconConfig, Size, State, Variant};
pub use options::ExtractOptions;
pub use walker::extract_all_buttons;

use seed_figma::ExportPayload;

/// Serialize descriptors as pretty-printed JSON.
pub fn to_json(buttons: &[ButtonProperties<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(buttons)?)
}

/// Load an export from JSON, extract its buttons, and serialize them.
pub fn extract_json(json: &str, options: &ExtractOptions) -> Result<String> {
    let payload = ExportPayload::from_json_str(json)?;
    let extractor = ButtonExtractor::new(options.clone());
    to_json(&extractor.extract_all(&payload))
}
