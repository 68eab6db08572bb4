//! The time signature element
//!
//! `<time>` holds either one or more beats/beat-type pairs or a single
//! `<senza-misura>` marker. The two content forms are mutually exclusive in
//! the schema, so the content is a closed sum here and the mutators refuse
//! to mix them.

use std::fmt;

use crate::error::{Error, Result};
use crate::node::{write_attribute, write_indent, write_text_element, Element};
use crate::optional::Optional;
use crate::schema::enums::TimeSymbol;

/// The attribute slots of `<time>`, in schema order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeAttributes {
    /// Staff number this signature applies to
    pub number: Optional<i64>,
    /// How the signature is displayed
    pub symbol: Optional<TimeSymbol>,
}

/// One beats/beat-type pair
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSignature {
    /// The `<beats>` text, e.g. `3` or `3+2`
    pub beats: String,
    /// The `<beat-type>` text, e.g. `4`
    pub beat_type: String,
}

impl TimeSignature {
    /// A beats/beat-type pair
    pub fn new(beats: impl Into<String>, beat_type: impl Into<String>) -> Self {
        Self {
            beats: beats.into(),
            beat_type: beat_type.into(),
        }
    }
}

/// The two mutually exclusive content forms of `<time>`
#[derive(Debug, Clone, PartialEq)]
pub enum TimeContent {
    /// Measured time: beats/beat-type pairs, possibly none yet
    Signatures(Vec<TimeSignature>),
    /// Unmeasured time: a single `<senza-misura>` child
    SenzaMisura,
}

/// The `<time>` element
#[derive(Debug, Clone, PartialEq)]
pub struct Time {
    /// Attribute slots
    pub attributes: TimeAttributes,
    content: TimeContent,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// An empty measured time signature
    pub fn new() -> Self {
        Self {
            attributes: TimeAttributes::default(),
            content: TimeContent::Signatures(Vec::new()),
        }
    }

    /// The current content form
    pub fn content(&self) -> &TimeContent {
        &self.content
    }

    /// Append a beats/beat-type pair.
    ///
    /// Fails with [`Error::InvalidState`] when the element holds
    /// `<senza-misura>`; the schema forbids mixing the two forms.
    pub fn push_signature(&mut self, signature: TimeSignature) -> Result<()> {
        match &mut self.content {
            TimeContent::Signatures(signatures) => {
                signatures.push(signature);
                Ok(())
            }
            TimeContent::SenzaMisura => Err(Error::InvalidState(
                "cannot add a time signature while senza-misura is set".to_string(),
            )),
        }
    }

    /// Switch to the `<senza-misura>` form.
    ///
    /// Fails with [`Error::InvalidState`] when beats/beat-type pairs are
    /// already present; clear them first by constructing anew.
    pub fn set_senza_misura(&mut self) -> Result<()> {
        if let TimeContent::Signatures(signatures) = &self.content {
            if !signatures.is_empty() {
                return Err(Error::InvalidState(
                    "cannot set senza-misura while time signatures are present".to_string(),
                ));
            }
        }
        self.content = TimeContent::SenzaMisura;
        Ok(())
    }
}

impl Element for Time {
    fn name(&self) -> &str {
        "time"
    }

    fn has_attributes(&self) -> bool {
        self.attributes.number.is_present() || self.attributes.symbol.is_present()
    }

    fn has_contents(&self) -> bool {
        match &self.content {
            TimeContent::Signatures(signatures) => !signatures.is_empty(),
            TimeContent::SenzaMisura => true,
        }
    }

    fn write_attributes(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        if let Some(v) = self.attributes.number.as_option() {
            write_attribute(w, "number", &v)?;
        }
        if let Some(v) = self.attributes.symbol.as_option() {
            write_attribute(w, "symbol", &v)?;
        }
        Ok(())
    }

    fn write_contents(&self, w: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        match &self.content {
            TimeContent::Signatures(signatures) => {
                for signature in signatures {
                    writeln!(w)?;
                    write_text_element(w, indent, "beats", &signature.beats)?;
                    writeln!(w)?;
                    write_text_element(w, indent, "beat-type", &signature.beat_type)?;
                }
            }
            TimeContent::SenzaMisura => {
                writeln!(w)?;
                write_indent(w, indent)?;
                w.write_str("<senza-misura/>")?;
            }
        }
        Ok(())
    }
}
