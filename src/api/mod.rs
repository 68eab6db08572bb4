//! Public value layer
//!
//! Coarser, flatter value types for API consumers: enumerations that carry
//! an explicit `Unspecified` sentinel instead of a separate presence flag,
//! and the attribute-group aggregates shared by many element kinds.

pub mod enums;
pub mod line;
pub mod position;

pub use enums::{HorizontalAlignment, LineHook, LineType, Placement, VerticalAlignment};
pub use line::{LineAttributes, LineData};
pub use position::{PositionAttributes, PositionData};
