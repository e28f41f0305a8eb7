//! Button descriptors produced by extraction.

use seed_figma::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual style category of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Outline,
    Ghost,
    Link,
    Destructive,
    Secondary,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Self::Default,
        Self::Outline,
        Self::Ghost,
        Self::Link,
        Self::Destructive,
        Self::Secondary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::Destructive => "destructive",
            Self::Secondary => "secondary",
        }
    }
}

/// Size class of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Default,
    Lg,
    /// Square icon-only button.
    Icon,
}

impl Size {
    pub const ALL: [Size; 4] = [Self::Sm, Self::Default, Self::Lg, Self::Icon];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

/// Interaction state a button is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Default,
    Hover,
    Focus,
    Active,
    Disabled,
    Loading,
}

impl State {
    pub const ALL: [State; 6] = [
        Self::Default,
        Self::Hover,
        Self::Focus,
        Self::Active,
        Self::Disabled,
        Self::Loading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Focus => "focus",
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Loading => "loading",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(Variant, Size, State);

/// Leading and trailing icon configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconConfig {
    /// Canonical identifier of the leading icon, when shown and resolvable.
    pub left_icon: Option<String>,
    /// Canonical identifier of the trailing icon, when shown and resolvable.
    pub right_icon: Option<String>,
    pub show_left_icon: bool,
    pub show_right_icon: bool,
}

/// Semantic description of one button instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProperties<'a> {
    /// Label text, never empty.
    pub text: String,
    pub variant: Variant,
    pub size: Size,
    pub state: State,
    pub left_icon: Option<String>,
    pub right_icon: Option<String>,
    pub show_left_icon: bool,
    pub show_right_icon: bool,
    /// Source node, kept for tracing a descriptor back to the export.
    ///
    /// Informational only; it is not serialized.
    #[serde(skip)]
    pub raw_node: &'a Node,
}
