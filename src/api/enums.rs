//! Public enumerations
//!
//! The coarser vocabularies exposed to API consumers. Every enumeration here
//! carries one extra [`Unspecified`](LineType::Unspecified) sentinel meaning
//! "no opinion", which is also its `Default`. The sentinel never appears in
//! the schema vocabulary and is never serialized; writing a sentinel value
//! back into an element clears the underlying presence flag instead.

use serde::{Deserialize, Serialize};

/// Public line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineType {
    /// No opinion; the attribute stays unwritten
    #[default]
    Unspecified,
    /// A solid line
    Solid,
    /// A dashed line
    Dashed,
    /// A dotted line
    Dotted,
    /// A wavy line
    Wavy,
}

/// Public line-end hook shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineHook {
    /// No opinion; the attribute stays unwritten
    #[default]
    Unspecified,
    /// Hook turned downward
    Down,
    /// Hook turned upward
    Up,
    /// Hooks on both sides
    Both,
    /// Arrow head
    Arrow,
    /// Explicitly no hook
    None,
}

/// Public horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlignment {
    /// No opinion; the attribute stays unwritten
    #[default]
    Unspecified,
    /// Left-aligned
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
}

/// Public vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlignment {
    /// No opinion; the attribute stays unwritten
    #[default]
    Unspecified,
    /// Aligned to the top
    Top,
    /// Aligned to the middle
    Middle,
    /// Aligned to the bottom
    Bottom,
    /// Aligned to the text baseline
    Baseline,
}

/// Public placement relative to the staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// No opinion; the attribute stays unwritten
    #[default]
    Unspecified,
    /// Above the staff
    Above,
    /// Below the staff
    Below,
}
