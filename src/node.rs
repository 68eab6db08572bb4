//! Element tree and serialization engine
//!
//! This module provides the capability interface every schema element
//! implements ([`Element`]), the canonical rendering algorithm, the scalar
//! [`Value`] type with the exact textual forms of the wire format, and a
//! generic dynamic node ([`XmlElement`]) for trees built outside the typed
//! element catalog.
//!
//! The textual output is the wire contract: attributes in fixed schema
//! order, `/>` for childless elements, two-space indentation per nesting
//! level, `yes`/`no` for boolean tokens, and the shortest decimal text that
//! round-trips for numbers. Text content is written verbatim.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::names;

/// One unit of indentation in rendered output
pub const INDENT: &str = "  ";

/// Write `level` units of indentation
pub fn write_indent(w: &mut dyn fmt::Write, level: usize) -> fmt::Result {
    for _ in 0..level {
        w.write_str(INDENT)?;
    }
    Ok(())
}

/// Write one attribute as ` name="value"`
pub fn write_attribute(
    w: &mut dyn fmt::Write,
    name: &str,
    value: &dyn fmt::Display,
) -> fmt::Result {
    write!(w, " {}=\"{}\"", name, value)
}

/// Write an indented single-line element with text content,
/// `<name>value</name>`
pub fn write_text_element(
    w: &mut dyn fmt::Write,
    indent: usize,
    name: &str,
    value: &dyn fmt::Display,
) -> fmt::Result {
    write_indent(w, indent)?;
    write!(w, "<{}>{}</{}>", name, value, name)
}

/// Capability interface of one schema element instance.
///
/// Concrete elements implement the queries and the two `write_*` hooks; the
/// provided [`Element::render`] is the single canonical serialization
/// algorithm shared by every element kind.
pub trait Element {
    /// The element's tag name
    fn name(&self) -> &str;

    /// True iff any attribute slot (required, or optional and present)
    /// carries a value to emit
    fn has_attributes(&self) -> bool;

    /// True iff the contents list is non-empty.
    ///
    /// The self-closing form in rendered text is driven strictly by this
    /// query, not by the element's declared content model.
    fn has_contents(&self) -> bool;

    /// Write every required-or-present attribute, in fixed schema order
    fn write_attributes(&self, w: &mut dyn fmt::Write) -> fmt::Result;

    /// Write the contents.
    ///
    /// Block layout (the default): emit each content item preceded by a
    /// newline, rendered at `indent`. Inline layout: emit the value text
    /// with no surrounding whitespace.
    fn write_contents(&self, w: &mut dyn fmt::Write, indent: usize) -> fmt::Result;

    /// True for value-content elements that render as
    /// `<name>value</name>` on a single line
    fn is_inline(&self) -> bool {
        false
    }

    /// Render this element at the given nesting depth.
    ///
    /// No trailing newline is emitted; a parent separates sibling content
    /// items itself.
    fn render(&self, w: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        write_indent(w, indent)?;
        write!(w, "<{}", self.name())?;
        self.write_attributes(w)?;
        if !self.has_contents() {
            return w.write_str("/>");
        }
        w.write_str(">")?;
        if self.is_inline() {
            self.write_contents(w, indent)?;
        } else {
            self.write_contents(w, indent + 1)?;
            writeln!(w)?;
            write_indent(w, indent)?;
        }
        write!(w, "</{}>", self.name())
    }
}

/// Render an element into a fresh string
pub fn render_to_string(element: &dyn Element, indent: usize) -> String {
    let mut out = String::new();
    element
        .render(&mut out, indent)
        .expect("writing to a String does not fail");
    out
}

/// An attribute or content scalar with its exact textual form
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Verbatim text
    Text(String),
    /// Integer value
    Int(i64),
    /// Decimal value; renders as the shortest text that parses back to the
    /// same number
    Number(f64),
    /// Boolean token; renders as the literal `yes` or `no`
    YesNo(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            // f64's Display is the shortest round-tripping decimal text
            Value::Number(n) => write!(f, "{}", n),
            Value::YesNo(true) => f.write_str("yes"),
            Value::YesNo(false) => f.write_str("no"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::YesNo(b)
    }
}

/// Parse the text of a decimal attribute value.
///
/// The numeric counterpart of the enumerations' `from_token`: the way
/// tokenized input from an outer parsing layer enters the model.
pub fn parse_number(text: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| Error::Value(format!("invalid decimal value: '{}'", text)))
}

/// One content item of an element: a nested node or literal text
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// A nested element, owned exclusively by its parent
    Node(XmlElement),
    /// Literal text, rendered verbatim
    Text(String),
}

/// A generic element node: a tag name, ordered attributes, and an ordered
/// contents list.
///
/// The typed elements in [`crate::schema`] fix their attribute order by
/// declaration; here the order is the insertion order. Children are owned
/// exclusively; cloning a node deep-copies its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: IndexMap<String, Value>,
    contents: Vec<Content>,
}

impl XmlElement {
    /// Create an empty element.
    ///
    /// The name must be a valid XML name; use [`XmlElement::try_new`] for
    /// caller-supplied names.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(names::is_valid_name(&name), "invalid element name");
        Self {
            name,
            attributes: IndexMap::new(),
            contents: Vec::new(),
        }
    }

    /// Create an empty element, validating the name
    pub fn try_new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        names::validate_name(&name)?;
        Ok(Self {
            name,
            attributes: IndexMap::new(),
            contents: Vec::new(),
        })
    }

    /// Set an attribute value; a repeated set keeps the original position
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Append a child element
    pub fn push_element(&mut self, child: XmlElement) {
        self.contents.push(Content::Node(child));
    }

    /// Append literal text content
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.contents.push(Content::Text(text.into()));
    }

    /// The ordered contents list
    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    /// Builder-style [`XmlElement::set_attribute`]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style [`XmlElement::push_element`]
    pub fn with_element(mut self, child: XmlElement) -> Self {
        self.push_element(child);
        self
    }

    /// Builder-style [`XmlElement::push_text`]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }
}

impl Element for XmlElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    fn has_contents(&self) -> bool {
        !self.contents.is_empty()
    }

    fn is_inline(&self) -> bool {
        !self.contents.is_empty()
            && self.contents.iter().all(|c| matches!(c, Content::Text(_)))
    }

    fn write_attributes(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        for (name, value) in &self.attributes {
            write_attribute(w, name, value)?;
        }
        Ok(())
    }

    fn write_contents(&self, w: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        if self.is_inline() {
            for content in &self.contents {
                if let Content::Text(text) = content {
                    w.write_str(text)?;
                }
            }
            return Ok(());
        }
        for content in &self.contents {
            writeln!(w)?;
            match content {
                Content::Node(child) => child.render(w, indent)?,
                Content::Text(text) => {
                    write_indent(w, indent)?;
                    w.write_str(text)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Text("curved".into()).to_string(), "curved");
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::YesNo(true).to_string(), "yes");
        assert_eq!(Value::YesNo(false).to_string(), "no");
    }

    #[test]
    fn test_number_display_is_shortest_round_trip() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(-5.5).to_string(), "-5.5");
        assert_eq!(Value::Number(0.1).to_string(), "0.1");
    }

    #[test]
    fn test_empty_element_self_closes() {
        let el = XmlElement::new("tuplet-dot");
        assert!(!el.has_attributes());
        assert!(!el.has_contents());
        assert_eq!(render_to_string(&el, 0), "<tuplet-dot/>");
    }

    #[test]
    fn test_attributes_render_in_insertion_order() {
        let el = XmlElement::new("tuplet")
            .with_attribute("type", "start")
            .with_attribute("bracket", true)
            .with_attribute("line-shape", "curved");
        assert_eq!(
            render_to_string(&el, 0),
            r#"<tuplet type="start" bracket="yes" line-shape="curved"/>"#
        );
    }

    #[test]
    fn test_reset_attribute_keeps_position() {
        let mut el = XmlElement::new("bracket")
            .with_attribute("type", "start")
            .with_attribute("number", 1i64);
        el.set_attribute("type", "stop");
        assert_eq!(
            render_to_string(&el, 0),
            r#"<bracket type="stop" number="1"/>"#
        );
    }

    #[test]
    fn test_text_content_renders_inline() {
        let el = XmlElement::new("beats").with_text("3");
        assert_eq!(render_to_string(&el, 0), "<beats>3</beats>");
    }

    #[test]
    fn test_nested_elements_render_indented() {
        let el = XmlElement::new("time")
            .with_element(XmlElement::new("beats").with_text("6"))
            .with_element(XmlElement::new("beat-type").with_text("8"));
        assert_eq!(
            render_to_string(&el, 0),
            "<time>\n  <beats>6</beats>\n  <beat-type>8</beat-type>\n</time>"
        );
    }

    #[test]
    fn test_render_at_depth() {
        let el = XmlElement::new("tuplet-dot");
        assert_eq!(render_to_string(&el, 2), "    <tuplet-dot/>");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3.5").unwrap(), 3.5);
        assert_eq!(parse_number(" -7 ").unwrap(), -7.0);
        assert!(matches!(parse_number("wide"), Err(Error::Value(_))));
    }

    #[test]
    fn test_try_new_rejects_bad_name() {
        assert!(XmlElement::try_new("not a name").is_err());
        assert!(XmlElement::try_new("tuplet-normal").is_ok());
    }

    #[test]
    fn test_has_contents_drives_closing_form() {
        let mut el = XmlElement::new("time");
        assert_eq!(render_to_string(&el, 0), "<time/>");
        el.push_element(XmlElement::new("senza-misura"));
        assert_eq!(
            render_to_string(&el, 0),
            "<time>\n  <senza-misura/>\n</time>"
        );
    }
}
