//! Line-style attribute group
//!
//! Several unrelated elements (brackets, dashes, glissandi, extensions)
//! carry the same bundle of line-styling attributes. [`LineData`] collects
//! them into one flat public value, read from and written back to any
//! element that exposes the underlying slots through [`LineAttributes`].

use serde::{Deserialize, Serialize};

use crate::api;
use crate::convert::Convert;
use crate::schema;

/// Access to the line-styling attribute slots of one element kind.
///
/// Elements implement the accessors for the attributes their schema
/// declares; the rest keep the defaults, which report absent and ignore
/// writes. Setters receive `None` to clear presence; an implementation
/// backing a *required* attribute ignores `None`, since a required
/// attribute has no presence flag to clear.
pub trait LineAttributes {
    /// The `line-type` attribute, if present
    fn line_type(&self) -> Option<schema::LineType> {
        None
    }

    /// Set or clear the `line-type` attribute
    fn set_line_type(&mut self, _value: Option<schema::LineType>) {}

    /// The `line-end` attribute, if present
    fn line_end(&self) -> Option<schema::LineEnd> {
        None
    }

    /// Set or clear the `line-end` attribute
    fn set_line_end(&mut self, _value: Option<schema::LineEnd>) {}

    /// The `dash-length` attribute, if present
    fn dash_length(&self) -> Option<f64> {
        None
    }

    /// Set or clear the `dash-length` attribute
    fn set_dash_length(&mut self, _value: Option<f64>) {}

    /// The `space-length` attribute, if present
    fn space_length(&self) -> Option<f64> {
        None
    }

    /// Set or clear the `space-length` attribute
    fn set_space_length(&mut self, _value: Option<f64>) {}

    /// The `end-length` attribute, if present
    fn end_length(&self) -> Option<f64> {
        None
    }

    /// Set or clear the `end-length` attribute
    fn set_end_length(&mut self, _value: Option<f64>) {}
}

/// The public line-style value group
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LineData {
    /// Line style, or the sentinel when unwritten
    pub line_type: api::LineType,
    /// End hook shape, or the sentinel when unwritten
    pub line_end: api::LineHook,
    /// Length of the end hook, when specified
    pub end_length: Option<f64>,
    /// Length of the dashes, when specified
    pub dash_length: Option<f64>,
    /// Length of the space between dashes, when specified
    pub space_length: Option<f64>,
}

impl LineData {
    /// True iff the group says anything meaningful about the line.
    ///
    /// An end hook or end length alone does not count: those only matter in
    /// conjunction with an actual line style or dash geometry.
    pub fn is_specified(&self) -> bool {
        self.line_type != api::LineType::Unspecified
            || self.dash_length.is_some()
            || self.space_length.is_some()
    }

    /// Read the group out of an element's attribute slots. Absent
    /// enumerations become the sentinel; absent lengths become `None`.
    pub fn from_attributes<A: LineAttributes + ?Sized>(attributes: &A) -> Self {
        LineData {
            line_type: attributes
                .line_type()
                .map(|v| v.to_api())
                .unwrap_or_default(),
            line_end: attributes
                .line_end()
                .map(|v| v.to_api())
                .unwrap_or_default(),
            end_length: attributes.end_length(),
            dash_length: attributes.dash_length(),
            space_length: attributes.space_length(),
        }
    }

    /// Write the group back into an element's attribute slots.
    ///
    /// Presence for each slot is computed from this group's own state; the
    /// sentinel clears the corresponding flag. The slots are applied in the
    /// fixed order dash length, space length, line end, line type, end
    /// length.
    pub fn apply_to<A: LineAttributes + ?Sized>(&self, attributes: &mut A) {
        attributes.set_dash_length(self.dash_length);
        attributes.set_space_length(self.space_length);
        attributes.set_line_end(schema::LineEnd::to_schema(self.line_end));
        attributes.set_line_type(schema::LineType::to_schema(self.line_type));
        attributes.set_end_length(self.end_length);
    }
}
