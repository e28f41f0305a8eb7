//! Read-only node model for design-tool exports.
//!
//! The export format is loosely typed: almost every field may be missing,
//! and attribute bags such as `componentProperties` carry free-text keys.
//! The types here give those bags a typed view with a defined default for
//! every field, so consumers never touch raw JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Kind of a node in the export tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Vector,
    Rectangle,
    Ellipse,
    Line,
    BooleanOperation,
    /// Any tag this model does not distinguish, including a missing one.
    #[default]
    #[serde(other)]
    Other,
}

/// A node in the export tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Node identifier assigned by the design tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Node kind.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub node_type: NodeType,
    /// Free-text layer name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Child nodes in document order. `None` marks a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    /// Text content of text leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    /// Component properties of instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_properties: Option<ComponentProperties>,
    /// Fill paints, bottom to top.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    /// Stroke paints, bottom to top.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    /// Overall node opacity (0-1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Nested dimensions, used when `width`/`height` are absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vector2>,
}

impl Node {
    /// Create a node of the given kind.
    pub fn new(node_type: NodeType, name: impl Into<String>) -> Self {
        Self {
            node_type,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an instance node.
    pub fn instance(name: impl Into<String>) -> Self {
        Self::new(NodeType::Instance, name)
    }

    /// Create a text leaf with the given content.
    pub fn text(characters: impl Into<String>) -> Self {
        let characters = characters.into();
        Self {
            characters: Some(characters.clone()),
            ..Self::new(NodeType::Text, characters)
        }
    }

    /// Add a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Add a component property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.component_properties
            .get_or_insert_with(ComponentProperties::default)
            .insert(key, ComponentProperty::new(value));
        self
    }

    /// Add a fill paint.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    /// Add a stroke paint.
    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.strokes.push(paint);
        self
    }

    /// Set width and height.
    pub fn with_dimensions(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set overall opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn is_instance(&self) -> bool {
        self.node_type == NodeType::Instance
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Children in document order, empty for leaves.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Height, falling back to `size.y`, then 0.
    pub fn height(&self) -> f64 {
        self.height.or(self.size.map(|s| s.y)).unwrap_or(0.0)
    }

    /// Width, falling back to `size.x`, then 0.
    pub fn width(&self) -> f64 {
        self.width.or(self.size.map(|s| s.x)).unwrap_or(0.0)
    }

    /// Overall opacity, fully opaque when absent.
    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// Non-empty text content, if any.
    pub fn characters(&self) -> Option<&str> {
        self.characters.as_deref().filter(|c| !c.is_empty())
    }
}

/// A 2D vector as exported by the design tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: f64,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Paint kind, e.g. `SOLID` or `IMAGE`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub paint_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Paint {
    /// A visible solid paint with the given opacity.
    pub fn solid(opacity: f64) -> Self {
        Self {
            paint_type: Some("SOLID".to_string()),
            visible: Some(true),
            opacity: Some(opacity),
        }
    }

    /// Set visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Visible unless explicitly hidden.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Kind of a component property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentPropertyType {
    Boolean,
    Text,
    InstanceSwap,
    Variant,
    #[serde(other)]
    Other,
}

/// A single component property record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentProperty {
    /// Raw property value; usually a string or a boolean.
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<ComponentPropertyType>,
}

impl ComponentProperty {
    /// Create a property with the given value.
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self {
            value: value.into(),
            property_type: None,
        }
    }

    /// The value as display text, if it is truthy.
    ///
    /// Non-empty strings are returned as is, `true` and non-zero numbers
    /// are rendered. Everything else counts as absent.
    pub fn as_text(&self) -> Option<String> {
        match &self.value {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Bool(true) => Some("true".to_string()),
            serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Whether the value is boolean `true` or the string `"true"`.
    pub fn is_true(&self) -> bool {
        match &self.value {
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::String(s) => s == "true",
            _ => false,
        }
    }
}

/// Component properties keyed by free-text names.
///
/// The export tool appends suffixes such as `#123:0` to keys, so lookups
/// match by prefix. Entry order follows the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentProperties(IndexMap<String, ComponentProperty>);

impl ComponentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing any entry with the same key.
    pub fn insert(&mut self, key: impl Into<String>, property: ComponentProperty) {
        self.0.insert(key.into(), property);
    }

    /// First property whose key starts with `prefix`.
    pub fn find_prefixed(&self, prefix: &str) -> Option<&ComponentProperty> {
        self.0
            .iter()
            .find(|(key, _)| key.starts_with(prefix))
            .map(|(_, prop)| prop)
    }

    /// All properties whose key starts with `prefix`, in document order.
    pub fn prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a ComponentProperty)> + 'a {
        self.iter().filter(move |(key, _)| key.starts_with(prefix))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentProperty)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
