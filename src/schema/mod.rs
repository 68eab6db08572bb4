//! Schema-level vocabulary and concrete elements
//!
//! Everything in this module speaks the document format's own language:
//! fine-grained enumerations with exact tokens, and element types whose
//! attribute order and content structure mirror the schema declarations.
//! The friendlier public layer lives in [`crate::api`].

pub mod bracket;
pub mod enums;
pub mod time;
pub mod tuplet;

pub use bracket::{Bracket, BracketAttributes};
pub use enums::{
    AboveBelow, LeftCenterRight, LineEnd, LineShape, LineType, NoteTypeValue, ShowTuplet,
    StartStop, TimeSymbol, Valign, YesNo,
};
pub use time::{Time, TimeAttributes, TimeContent, TimeSignature};
pub use tuplet::{
    Tuplet, TupletActual, TupletAttributes, TupletDot, TupletNormal, TupletNumber, TupletType,
};
