//! Schema/public vocabulary conversion
//!
//! Stateless, bidirectional mappings between the fine-grained schema
//! enumerations and the public enumerations of the API layer, one field
//! family at a time. The schema-to-public direction is total; the reverse
//! direction returns `None` exactly for the public `Unspecified` sentinel,
//! which a caller translates into clearing the presence flag rather than
//! writing anything.
//!
//! Every `match` below is exhaustive, so an enumerator added to either side
//! without a mapping is a compile error, not a runtime defect.

use crate::api;
use crate::schema;

/// Bidirectional mapping between one schema vocabulary and its public
/// counterpart.
pub trait Convert: Copy {
    /// The public counterpart of this schema vocabulary
    type Api: Copy + PartialEq;

    /// Map a schema value into the public vocabulary. Total; never yields
    /// the public sentinel.
    fn to_api(self) -> Self::Api;

    /// Map a public value back into the schema vocabulary. `None` for the
    /// sentinel, which has no schema representation.
    fn to_schema(api: Self::Api) -> Option<Self>;
}

impl Convert for schema::LineType {
    type Api = api::LineType;

    fn to_api(self) -> api::LineType {
        match self {
            schema::LineType::Solid => api::LineType::Solid,
            schema::LineType::Dashed => api::LineType::Dashed,
            schema::LineType::Dotted => api::LineType::Dotted,
            schema::LineType::Wavy => api::LineType::Wavy,
        }
    }

    fn to_schema(value: api::LineType) -> Option<Self> {
        match value {
            api::LineType::Unspecified => None,
            api::LineType::Solid => Some(schema::LineType::Solid),
            api::LineType::Dashed => Some(schema::LineType::Dashed),
            api::LineType::Dotted => Some(schema::LineType::Dotted),
            api::LineType::Wavy => Some(schema::LineType::Wavy),
        }
    }
}

impl Convert for schema::LineEnd {
    type Api = api::LineHook;

    fn to_api(self) -> api::LineHook {
        match self {
            schema::LineEnd::Up => api::LineHook::Up,
            schema::LineEnd::Down => api::LineHook::Down,
            schema::LineEnd::Both => api::LineHook::Both,
            schema::LineEnd::Arrow => api::LineHook::Arrow,
            schema::LineEnd::None => api::LineHook::None,
        }
    }

    fn to_schema(value: api::LineHook) -> Option<Self> {
        match value {
            api::LineHook::Unspecified => None,
            api::LineHook::Up => Some(schema::LineEnd::Up),
            api::LineHook::Down => Some(schema::LineEnd::Down),
            api::LineHook::Both => Some(schema::LineEnd::Both),
            api::LineHook::Arrow => Some(schema::LineEnd::Arrow),
            api::LineHook::None => Some(schema::LineEnd::None),
        }
    }
}

impl Convert for schema::LeftCenterRight {
    type Api = api::HorizontalAlignment;

    fn to_api(self) -> api::HorizontalAlignment {
        match self {
            schema::LeftCenterRight::Left => api::HorizontalAlignment::Left,
            schema::LeftCenterRight::Center => api::HorizontalAlignment::Center,
            schema::LeftCenterRight::Right => api::HorizontalAlignment::Right,
        }
    }

    fn to_schema(value: api::HorizontalAlignment) -> Option<Self> {
        match value {
            api::HorizontalAlignment::Unspecified => None,
            api::HorizontalAlignment::Left => Some(schema::LeftCenterRight::Left),
            api::HorizontalAlignment::Center => Some(schema::LeftCenterRight::Center),
            api::HorizontalAlignment::Right => Some(schema::LeftCenterRight::Right),
        }
    }
}

impl Convert for schema::Valign {
    type Api = api::VerticalAlignment;

    fn to_api(self) -> api::VerticalAlignment {
        match self {
            schema::Valign::Top => api::VerticalAlignment::Top,
            schema::Valign::Middle => api::VerticalAlignment::Middle,
            schema::Valign::Bottom => api::VerticalAlignment::Bottom,
            schema::Valign::Baseline => api::VerticalAlignment::Baseline,
        }
    }

    fn to_schema(value: api::VerticalAlignment) -> Option<Self> {
        match value {
            api::VerticalAlignment::Unspecified => None,
            api::VerticalAlignment::Top => Some(schema::Valign::Top),
            api::VerticalAlignment::Middle => Some(schema::Valign::Middle),
            api::VerticalAlignment::Bottom => Some(schema::Valign::Bottom),
            api::VerticalAlignment::Baseline => Some(schema::Valign::Baseline),
        }
    }
}

impl Convert for schema::AboveBelow {
    type Api = api::Placement;

    fn to_api(self) -> api::Placement {
        match self {
            schema::AboveBelow::Above => api::Placement::Above,
            schema::AboveBelow::Below => api::Placement::Below,
        }
    }

    fn to_schema(value: api::Placement) -> Option<Self> {
        match value {
            api::Placement::Unspecified => None,
            api::Placement::Above => Some(schema::AboveBelow::Above),
            api::Placement::Below => Some(schema::AboveBelow::Below),
        }
    }
}

/// The yes-no family converts to native booleans by identity. The public
/// side has no sentinel here, so the reverse direction is total as well; it
/// still goes through the same two functions for uniformity.
impl Convert for schema::YesNo {
    type Api = bool;

    fn to_api(self) -> bool {
        match self {
            schema::YesNo::Yes => true,
            schema::YesNo::No => false,
        }
    }

    fn to_schema(value: bool) -> Option<Self> {
        if value {
            Some(schema::YesNo::Yes)
        } else {
            Some(schema::YesNo::No)
        }
    }
}
