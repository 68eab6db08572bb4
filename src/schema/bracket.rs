//! The bracket direction element
//!
//! `<bracket>` spans a horizontal line with optional downward or upward
//! hooks over a passage. It carries the full line-styling attribute group
//! and the position group, and never has contents.

use std::fmt;

use crate::api::{LineAttributes, PositionAttributes};
use crate::node::{write_attribute, Element};
use crate::optional::Optional;
use crate::schema::enums::{LineEnd, LineType, StartStop};

/// The attribute slots of `<bracket>`, in schema order
#[derive(Debug, Clone, PartialEq)]
pub struct BracketAttributes {
    /// The required `type` attribute: start or stop
    pub type_: StartStop,
    /// Distinguishes overlapping brackets
    pub number: Optional<i64>,
    /// The required `line-end` attribute: hook shape at this end
    pub line_end: LineEnd,
    /// Length of the hook
    pub end_length: Optional<f64>,
    /// Line style
    pub line_type: Optional<LineType>,
    /// Length of the dashes
    pub dash_length: Optional<f64>,
    /// Length of the space between dashes
    pub space_length: Optional<f64>,
    /// Absolute horizontal position
    pub default_x: Optional<f64>,
    /// Absolute vertical position
    pub default_y: Optional<f64>,
    /// Horizontal offset
    pub relative_x: Optional<f64>,
    /// Vertical offset
    pub relative_y: Optional<f64>,
}

impl Default for BracketAttributes {
    fn default() -> Self {
        Self {
            type_: StartStop::Start,
            number: Optional::new(1),
            line_end: LineEnd::None,
            end_length: Optional::default(),
            line_type: Optional::default(),
            dash_length: Optional::default(),
            space_length: Optional::default(),
            default_x: Optional::default(),
            default_y: Optional::default(),
            relative_x: Optional::default(),
            relative_y: Optional::default(),
        }
    }
}

impl LineAttributes for BracketAttributes {
    fn line_type(&self) -> Option<LineType> {
        self.line_type.as_option()
    }
    fn set_line_type(&mut self, value: Option<LineType>) {
        self.line_type.set_or_clear(value);
    }
    // `line-end` is required: always present, and a clearing write-back is
    // ignored.
    fn line_end(&self) -> Option<LineEnd> {
        Some(self.line_end)
    }
    fn set_line_end(&mut self, value: Option<LineEnd>) {
        if let Some(value) = value {
            self.line_end = value;
        }
    }
    fn dash_length(&self) -> Option<f64> {
        self.dash_length.as_option()
    }
    fn set_dash_length(&mut self, value: Option<f64>) {
        self.dash_length.set_or_clear(value);
    }
    fn space_length(&self) -> Option<f64> {
        self.space_length.as_option()
    }
    fn set_space_length(&mut self, value: Option<f64>) {
        self.space_length.set_or_clear(value);
    }
    fn end_length(&self) -> Option<f64> {
        self.end_length.as_option()
    }
    fn set_end_length(&mut self, value: Option<f64>) {
        self.end_length.set_or_clear(value);
    }
}

impl PositionAttributes for BracketAttributes {
    fn default_x(&self) -> Option<f64> {
        self.default_x.as_option()
    }
    fn set_default_x(&mut self, value: Option<f64>) {
        self.default_x.set_or_clear(value);
    }
    fn default_y(&self) -> Option<f64> {
        self.default_y.as_option()
    }
    fn set_default_y(&mut self, value: Option<f64>) {
        self.default_y.set_or_clear(value);
    }
    fn relative_x(&self) -> Option<f64> {
        self.relative_x.as_option()
    }
    fn set_relative_x(&mut self, value: Option<f64>) {
        self.relative_x.set_or_clear(value);
    }
    fn relative_y(&self) -> Option<f64> {
        self.relative_y.as_option()
    }
    fn set_relative_y(&mut self, value: Option<f64>) {
        self.relative_y.set_or_clear(value);
    }
}

/// The `<bracket>` element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bracket {
    /// Attribute slots
    pub attributes: BracketAttributes,
}

impl Bracket {
    /// A bracket with the given required attributes and everything else at
    /// its defaults
    pub fn new(type_: StartStop, line_end: LineEnd) -> Self {
        Self {
            attributes: BracketAttributes {
                type_,
                line_end,
                ..BracketAttributes::default()
            },
        }
    }
}

impl Element for Bracket {
    fn name(&self) -> &str {
        "bracket"
    }

    fn has_attributes(&self) -> bool {
        // `type` and `line-end` are required
        true
    }

    fn has_contents(&self) -> bool {
        false
    }

    fn write_attributes(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        let a = &self.attributes;
        write_attribute(w, "type", &a.type_)?;
        if let Some(v) = a.number.as_option() {
            write_attribute(w, "number", &v)?;
        }
        write_attribute(w, "line-end", &a.line_end)?;
        if let Some(v) = a.end_length.as_option() {
            write_attribute(w, "end-length", &v)?;
        }
        if let Some(v) = a.line_type.as_option() {
            write_attribute(w, "line-type", &v)?;
        }
        if let Some(v) = a.dash_length.as_option() {
            write_attribute(w, "dash-length", &v)?;
        }
        if let Some(v) = a.space_length.as_option() {
            write_attribute(w, "space-length", &v)?;
        }
        if let Some(v) = a.default_x.as_option() {
            write_attribute(w, "default-x", &v)?;
        }
        if let Some(v) = a.default_y.as_option() {
            write_attribute(w, "default-y", &v)?;
        }
        if let Some(v) = a.relative_x.as_option() {
            write_attribute(w, "relative-x", &v)?;
        }
        if let Some(v) = a.relative_y.as_option() {
            write_attribute(w, "relative-y", &v)?;
        }
        Ok(())
    }

    fn write_contents(&self, _w: &mut dyn fmt::Write, _indent: usize) -> fmt::Result {
        Ok(())
    }
}
