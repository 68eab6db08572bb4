//! Position and alignment attribute group
//!
//! The position attributes (`default-x`, `default-y`, `relative-x`,
//! `relative-y`) and the alignment attributes (`halign`, `valign`,
//! `placement`) recur across most printable elements. [`PositionData`]
//! bundles them, mirroring [`super::LineData`] for line styling.

use serde::{Deserialize, Serialize};

use crate::api;
use crate::convert::Convert;
use crate::schema;

/// Access to the position and alignment attribute slots of one element
/// kind.
///
/// As with [`super::LineAttributes`], elements implement the accessors for
/// the attributes their schema declares and leave the rest at the
/// absent/ignore defaults.
pub trait PositionAttributes {
    /// The `default-x` attribute, if present
    fn default_x(&self) -> Option<f64> {
        None
    }

    /// Set or clear the `default-x` attribute
    fn set_default_x(&mut self, _value: Option<f64>) {}

    /// The `default-y` attribute, if present
    fn default_y(&self) -> Option<f64> {
        None
    }

    /// Set or clear the `default-y` attribute
    fn set_default_y(&mut self, _value: Option<f64>) {}

    /// The `relative-x` attribute, if present
    fn relative_x(&self) -> Option<f64> {
        None
    }

    /// Set or clear the `relative-x` attribute
    fn set_relative_x(&mut self, _value: Option<f64>) {}

    /// The `relative-y` attribute, if present
    fn relative_y(&self) -> Option<f64> {
        None
    }

    /// Set or clear the `relative-y` attribute
    fn set_relative_y(&mut self, _value: Option<f64>) {}

    /// The `halign` attribute, if present
    fn halign(&self) -> Option<schema::LeftCenterRight> {
        None
    }

    /// Set or clear the `halign` attribute
    fn set_halign(&mut self, _value: Option<schema::LeftCenterRight>) {}

    /// The `valign` attribute, if present
    fn valign(&self) -> Option<schema::Valign> {
        None
    }

    /// Set or clear the `valign` attribute
    fn set_valign(&mut self, _value: Option<schema::Valign>) {}

    /// The `placement` attribute, if present
    fn placement(&self) -> Option<schema::AboveBelow> {
        None
    }

    /// Set or clear the `placement` attribute
    fn set_placement(&mut self, _value: Option<schema::AboveBelow>) {}
}

/// The public position/alignment value group.
///
/// The four offsets are in tenths of staff space. Each field keeps its own
/// presence semantics: `Option` for the offsets, the sentinel for the
/// alignments.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PositionData {
    /// Absolute horizontal position, when specified
    pub default_x: Option<f64>,
    /// Absolute vertical position, when specified
    pub default_y: Option<f64>,
    /// Horizontal offset, when specified
    pub relative_x: Option<f64>,
    /// Vertical offset, when specified
    pub relative_y: Option<f64>,
    /// Horizontal alignment, or the sentinel when unwritten
    pub halign: api::HorizontalAlignment,
    /// Vertical alignment, or the sentinel when unwritten
    pub valign: api::VerticalAlignment,
    /// Placement above or below the staff, or the sentinel when unwritten
    pub placement: api::Placement,
}

impl PositionData {
    /// True iff any field of the group is specified
    pub fn is_specified(&self) -> bool {
        self.default_x.is_some()
            || self.default_y.is_some()
            || self.relative_x.is_some()
            || self.relative_y.is_some()
            || self.halign != api::HorizontalAlignment::Unspecified
            || self.valign != api::VerticalAlignment::Unspecified
            || self.placement != api::Placement::Unspecified
    }

    /// Read the group out of an element's attribute slots
    pub fn from_attributes<A: PositionAttributes + ?Sized>(attributes: &A) -> Self {
        PositionData {
            default_x: attributes.default_x(),
            default_y: attributes.default_y(),
            relative_x: attributes.relative_x(),
            relative_y: attributes.relative_y(),
            halign: attributes.halign().map(|v| v.to_api()).unwrap_or_default(),
            valign: attributes.valign().map(|v| v.to_api()).unwrap_or_default(),
            placement: attributes
                .placement()
                .map(|v| v.to_api())
                .unwrap_or_default(),
        }
    }

    /// Write the group back into an element's attribute slots. Each offset
    /// sets presence and value independently; for each alignment the
    /// sentinel clears presence and a concrete value converts and writes.
    pub fn apply_to<A: PositionAttributes + ?Sized>(&self, attributes: &mut A) {
        attributes.set_default_x(self.default_x);
        attributes.set_default_y(self.default_y);
        attributes.set_relative_x(self.relative_x);
        attributes.set_relative_y(self.relative_y);
        attributes.set_halign(schema::LeftCenterRight::to_schema(self.halign));
        attributes.set_valign(schema::Valign::to_schema(self.valign));
        attributes.set_placement(schema::AboveBelow::to_schema(self.placement));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::Optional;

    #[derive(Default)]
    struct FakeAttributes {
        default_x: Optional<f64>,
        default_y: Optional<f64>,
        placement: Optional<schema::AboveBelow>,
    }

    // Only the attributes this fake element declares; halign/valign keep
    // the absent defaults.
    impl PositionAttributes for FakeAttributes {
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
        fn placement(&self) -> Option<schema::AboveBelow> {
            self.placement.as_option()
        }
        fn set_placement(&mut self, value: Option<schema::AboveBelow>) {
            self.placement.set_or_clear(value);
        }
    }

    #[test]
    fn test_unspecified_by_default() {
        let data = PositionData::default();
        assert!(!data.is_specified());
    }

    #[test]
    fn test_any_field_makes_it_specified() {
        let data = PositionData {
            relative_y: Some(-10.0),
            ..PositionData::default()
        };
        assert!(data.is_specified());

        let data = PositionData {
            valign: api::VerticalAlignment::Top,
            ..PositionData::default()
        };
        assert!(data.is_specified());
    }

    #[test]
    fn test_extraction() {
        let mut attributes = FakeAttributes::default();
        attributes.default_x.set(12.5);
        attributes.placement.set(schema::AboveBelow::Below);

        let data = PositionData::from_attributes(&attributes);
        assert_eq!(data.default_x, Some(12.5));
        assert_eq!(data.default_y, None);
        assert_eq!(data.placement, api::Placement::Below);
        assert_eq!(data.halign, api::HorizontalAlignment::Unspecified);
    }

    #[test]
    fn test_write_back_round_trips_declared_fields() {
        let data = PositionData {
            default_x: Some(1.0),
            default_y: Some(-2.5),
            placement: api::Placement::Above,
            ..PositionData::default()
        };

        let mut attributes = FakeAttributes::default();
        data.apply_to(&mut attributes);
        assert_eq!(PositionData::from_attributes(&attributes), data);
    }

    #[test]
    fn test_write_back_to_undeclared_fields_is_ignored() {
        let data = PositionData {
            halign: api::HorizontalAlignment::Center,
            relative_x: Some(3.0),
            ..PositionData::default()
        };

        let mut attributes = FakeAttributes::default();
        data.apply_to(&mut attributes);
        let read_back = PositionData::from_attributes(&attributes);
        assert_eq!(read_back.halign, api::HorizontalAlignment::Unspecified);
        assert_eq!(read_back.relative_x, None);
    }

    #[test]
    fn test_sentinel_clears_placement() {
        let mut attributes = FakeAttributes::default();
        attributes.placement.set(schema::AboveBelow::Above);

        PositionData::default().apply_to(&mut attributes);
        assert!(!attributes.placement.is_present());
        // The slot still answers with its documented default.
        assert_eq!(attributes.placement.value(), schema::AboveBelow::Above);
    }
}
