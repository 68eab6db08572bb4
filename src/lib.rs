//! # muxml
//!
//! An in-memory object model for MusicXML documents with exact textual
//! serialization.
//!
//! The crate is built from four load-bearing pieces:
//!
//! - the element tree and serialization engine ([`node`]),
//! - the optional-field protocol every schema-optional attribute and child
//!   element follows ([`optional`]),
//! - the bidirectional converter between schema and public vocabularies
//!   ([`convert`]),
//! - the shared attribute-group aggregates ([`api`]).
//!
//! The concrete elements in [`schema`] are mechanical instantiations of
//! those pieces; the ones included here (the tuplet family, `<bracket>`,
//! `<time>`) are representative of the full catalog.
//!
//! Parsing is out of scope: the model consumes already-tokenized values
//! through the `from_token` constructors and produces exact text through
//! [`Element::render`].
//!
//! ## Example
//!
//! ```rust
//! use muxml::render_to_string;
//! use muxml::schema::{StartStop, Tuplet};
//!
//! let tuplet = Tuplet::new(StartStop::Start);
//! assert_eq!(render_to_string(&tuplet, 0), r#"<tuplet type="start"/>"#);
//! ```
//!
//! The model is synchronous and free of interior mutability; trees are
//! exclusively owned, so a tree may move between threads but must be
//! confined to one thread while it is being mutated.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod names;

// Core protocol and engine
pub mod convert;
pub mod node;
pub mod optional;

// Vocabulary and elements
pub mod api;
pub mod schema;

// Re-exports for convenience
pub use convert::Convert;
pub use error::{Error, Result};
pub use node::{render_to_string, Content, Element, Value, XmlElement, INDENT};
pub use optional::Optional;

/// Version of the muxml library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The MusicXML version this model targets
pub const MUSICXML_VERSION: &str = "3.0";
