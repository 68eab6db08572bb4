//! The tuplet notation element and its sub-elements
//!
//! `<tuplet>` marks the start or stop of a tuplet bracket on a note. Its
//! optional `<tuplet-actual>` and `<tuplet-normal>` children spell out the
//! two sides of the time ratio when they differ from what the sounding
//! durations imply.

use std::fmt;

use crate::api::PositionAttributes;
use crate::node::{write_attribute, Element};
use crate::optional::Optional;
use crate::schema::enums::{AboveBelow, LineShape, NoteTypeValue, ShowTuplet, StartStop, YesNo};

/// The attribute slots of `<tuplet>`, in schema order
#[derive(Debug, Clone, PartialEq)]
pub struct TupletAttributes {
    /// The required `type` attribute: start or stop
    pub type_: StartStop,
    /// Distinguishes nested tuplets
    pub number: Optional<i64>,
    /// Whether to display a bracket
    pub bracket: Optional<YesNo>,
    /// Which ratio numbers to display
    pub show_number: Optional<ShowTuplet>,
    /// Which note types to display
    pub show_type: Optional<ShowTuplet>,
    /// Straight or curved bracket line
    pub line_shape: Optional<LineShape>,
    /// Absolute horizontal position
    pub default_x: Optional<f64>,
    /// Absolute vertical position
    pub default_y: Optional<f64>,
    /// Horizontal offset
    pub relative_x: Optional<f64>,
    /// Vertical offset
    pub relative_y: Optional<f64>,
    /// Placement above or below the staff
    pub placement: Optional<AboveBelow>,
}

impl Default for TupletAttributes {
    fn default() -> Self {
        Self {
            type_: StartStop::Start,
            number: Optional::new(1),
            bracket: Optional::default(),
            show_number: Optional::new(ShowTuplet::Actual),
            show_type: Optional::new(ShowTuplet::None),
            line_shape: Optional::default(),
            default_x: Optional::default(),
            default_y: Optional::default(),
            relative_x: Optional::default(),
            relative_y: Optional::default(),
            placement: Optional::default(),
        }
    }
}

impl TupletAttributes {
    fn write(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        write_attribute(w, "type", &self.type_)?;
        if let Some(v) = self.number.as_option() {
            write_attribute(w, "number", &v)?;
        }
        if let Some(v) = self.bracket.as_option() {
            write_attribute(w, "bracket", &v)?;
        }
        if let Some(v) = self.show_number.as_option() {
            write_attribute(w, "show-number", &v)?;
        }
        if let Some(v) = self.show_type.as_option() {
            write_attribute(w, "show-type", &v)?;
        }
        if let Some(v) = self.line_shape.as_option() {
            write_attribute(w, "line-shape", &v)?;
        }
        if let Some(v) = self.default_x.as_option() {
            write_attribute(w, "default-x", &v)?;
        }
        if let Some(v) = self.default_y.as_option() {
            write_attribute(w, "default-y", &v)?;
        }
        if let Some(v) = self.relative_x.as_option() {
            write_attribute(w, "relative-x", &v)?;
        }
        if let Some(v) = self.relative_y.as_option() {
            write_attribute(w, "relative-y", &v)?;
        }
        if let Some(v) = self.placement.as_option() {
            write_attribute(w, "placement", &v)?;
        }
        Ok(())
    }
}

impl PositionAttributes for TupletAttributes {
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
    fn placement(&self) -> Option<AboveBelow> {
        self.placement.as_option()
    }
    fn set_placement(&mut self, value: Option<AboveBelow>) {
        self.placement.set_or_clear(value);
    }
}

/// The `<tuplet>` element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tuplet {
    /// Attribute slots
    pub attributes: TupletAttributes,
    /// The optional `<tuplet-actual>` child
    pub actual: Optional<TupletActual>,
    /// The optional `<tuplet-normal>` child
    pub normal: Optional<TupletNormal>,
}

impl Tuplet {
    /// A tuplet with the given required `type` and everything else at its
    /// defaults
    pub fn new(type_: StartStop) -> Self {
        Self {
            attributes: TupletAttributes {
                type_,
                ..TupletAttributes::default()
            },
            ..Self::default()
        }
    }
}

impl Element for Tuplet {
    fn name(&self) -> &str {
        "tuplet"
    }

    fn has_attributes(&self) -> bool {
        // `type` is required
        true
    }

    fn has_contents(&self) -> bool {
        self.actual.is_present() || self.normal.is_present()
    }

    fn write_attributes(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        self.attributes.write(w)
    }

    fn write_contents(&self, w: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        if self.actual.is_present() {
            writeln!(w)?;
            self.actual.get().render(w, indent)?;
        }
        if self.normal.is_present() {
            writeln!(w)?;
            self.normal.get().render(w, indent)?;
        }
        Ok(())
    }
}

/// The `<tuplet-actual>` element: the sounding side of the ratio
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TupletActual {
    /// The optional `<tuplet-number>` child
    pub number: Optional<TupletNumber>,
    /// The optional `<tuplet-type>` child
    pub tuplet_type: Optional<TupletType>,
    /// `<tuplet-dot>` children, one per augmentation dot
    pub dots: Vec<TupletDot>,
}

/// The `<tuplet-normal>` element: the displayed side of the ratio
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TupletNormal {
    /// The optional `<tuplet-number>` child
    pub number: Optional<TupletNumber>,
    /// The optional `<tuplet-type>` child
    pub tuplet_type: Optional<TupletType>,
    /// `<tuplet-dot>` children, one per augmentation dot
    pub dots: Vec<TupletDot>,
}

fn portion_has_contents(
    number: &Optional<TupletNumber>,
    tuplet_type: &Optional<TupletType>,
    dots: &[TupletDot],
) -> bool {
    number.is_present() || tuplet_type.is_present() || !dots.is_empty()
}

fn write_portion_contents(
    w: &mut dyn fmt::Write,
    indent: usize,
    number: &Optional<TupletNumber>,
    tuplet_type: &Optional<TupletType>,
    dots: &[TupletDot],
) -> fmt::Result {
    if number.is_present() {
        writeln!(w)?;
        number.get().render(w, indent)?;
    }
    if tuplet_type.is_present() {
        writeln!(w)?;
        tuplet_type.get().render(w, indent)?;
    }
    for dot in dots {
        writeln!(w)?;
        dot.render(w, indent)?;
    }
    Ok(())
}

impl Element for TupletActual {
    fn name(&self) -> &str {
        "tuplet-actual"
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn has_contents(&self) -> bool {
        portion_has_contents(&self.number, &self.tuplet_type, &self.dots)
    }

    fn write_attributes(&self, _w: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }

    fn write_contents(&self, w: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_portion_contents(w, indent, &self.number, &self.tuplet_type, &self.dots)
    }
}

impl Element for TupletNormal {
    fn name(&self) -> &str {
        "tuplet-normal"
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn has_contents(&self) -> bool {
        portion_has_contents(&self.number, &self.tuplet_type, &self.dots)
    }

    fn write_attributes(&self, _w: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }

    fn write_contents(&self, w: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_portion_contents(w, indent, &self.number, &self.tuplet_type, &self.dots)
    }
}

/// The `<tuplet-number>` element: one side's ratio count
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TupletNumber {
    /// The nonnegative count
    pub value: u32,
}

impl TupletNumber {
    /// A tuplet number with the given count
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl Element for TupletNumber {
    fn name(&self) -> &str {
        "tuplet-number"
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn has_contents(&self) -> bool {
        true
    }

    fn is_inline(&self) -> bool {
        true
    }

    fn write_attributes(&self, _w: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }

    fn write_contents(&self, w: &mut dyn fmt::Write, _indent: usize) -> fmt::Result {
        write!(w, "{}", self.value)
    }
}

/// The `<tuplet-type>` element: one side's graphic note type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TupletType {
    /// The note type
    pub value: NoteTypeValue,
}

impl TupletType {
    /// A tuplet type with the given note type
    pub fn new(value: NoteTypeValue) -> Self {
        Self { value }
    }
}

impl Element for TupletType {
    fn name(&self) -> &str {
        "tuplet-type"
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn has_contents(&self) -> bool {
        true
    }

    fn is_inline(&self) -> bool {
        true
    }

    fn write_attributes(&self, _w: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }

    fn write_contents(&self, w: &mut dyn fmt::Write, _indent: usize) -> fmt::Result {
        write!(w, "{}", self.value)
    }
}

/// The `<tuplet-dot>` element, one augmentation dot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TupletDot;

impl Element for TupletDot {
    fn name(&self) -> &str {
        "tuplet-dot"
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn has_contents(&self) -> bool {
        false
    }

    fn write_attributes(&self, _w: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }

    fn write_contents(&self, _w: &mut dyn fmt::Write, _indent: usize) -> fmt::Result {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::render_to_string;

    #[test]
    fn test_fresh_tuplet_has_no_contents() {
        let tuplet = Tuplet::default();
        assert!(tuplet.has_attributes());
        assert!(!tuplet.has_contents());
    }

    #[test]
    fn test_child_slots_follow_the_optional_protocol() {
        let mut tuplet = Tuplet::default();
        assert!(!tuplet.actual.is_present());

        let mut actual = TupletActual::default();
        actual.number.set(TupletNumber::new(3));
        tuplet.actual.set(actual);

        assert!(tuplet.actual.is_present());
        assert!(tuplet.has_contents());

        tuplet.actual.clear();
        assert!(!tuplet.has_contents());
        // Reading the cleared slot yields the documented default.
        assert_eq!(*tuplet.actual.get(), TupletActual::default());
    }

    #[test]
    fn test_tuplet_number_renders_inline() {
        let number = TupletNumber::new(3);
        assert_eq!(render_to_string(&number, 0), "<tuplet-number>3</tuplet-number>");
    }

    #[test]
    fn test_tuplet_type_renders_inline() {
        let tuplet_type = TupletType::new(NoteTypeValue::Quarter);
        assert_eq!(
            render_to_string(&tuplet_type, 1),
            "  <tuplet-type>quarter</tuplet-type>"
        );
    }

    #[test]
    fn test_tuplet_dot_self_closes() {
        assert_eq!(render_to_string(&TupletDot, 0), "<tuplet-dot/>");
    }

    #[test]
    fn test_portion_renders_children_in_schema_order() {
        let mut portion = TupletActual::default();
        portion.tuplet_type.set(TupletType::new(NoteTypeValue::Eighth));
        portion.number.set(TupletNumber::new(3));
        portion.dots.push(TupletDot);

        assert_eq!(
            render_to_string(&portion, 0),
            "<tuplet-actual>\n  <tuplet-number>3</tuplet-number>\n  \
             <tuplet-type>eighth</tuplet-type>\n  <tuplet-dot/>\n</tuplet-actual>"
        );
    }

    #[test]
    fn test_empty_portion_self_closes() {
        assert_eq!(render_to_string(&TupletNormal::default(), 0), "<tuplet-normal/>");
    }
}
