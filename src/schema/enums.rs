//! Schema enumerations
//!
//! The fine-grained value sets the document format defines for individual
//! attributes and value elements. None of these carries an "absent" member;
//! absence always lives in the owning [`crate::Optional`] slot. Each
//! vocabulary parses from and prints to its exact schema tokens, following
//! the same `as_token`/`from_token` pairing throughout.

use std::fmt;

use crate::error::{Error, Result};

/// The yes-no vocabulary used by boolean-like attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    /// `yes`
    Yes,
    /// `no`
    No,
}

impl YesNo {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "yes" => Ok(YesNo::Yes),
            "no" => Ok(YesNo::No),
            _ => Err(Error::token(token, "yes-no")),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for YesNo {
    fn default() -> Self {
        YesNo::No
    }
}

/// Start or stop of a spanning notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartStop {
    /// `start`
    Start,
    /// `stop`
    Stop,
}

impl StartStop {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            StartStop::Start => "start",
            StartStop::Stop => "stop",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "start" => Ok(StartStop::Start),
            "stop" => Ok(StartStop::Stop),
            _ => Err(Error::token(token, "start-stop")),
        }
    }
}

impl fmt::Display for StartStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for StartStop {
    fn default() -> Self {
        StartStop::Start
    }
}

/// Straight or curved bracket line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// `straight`
    Straight,
    /// `curved`
    Curved,
}

impl LineShape {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            LineShape::Straight => "straight",
            LineShape::Curved => "curved",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "straight" => Ok(LineShape::Straight),
            "curved" => Ok(LineShape::Curved),
            _ => Err(Error::token(token, "line-shape")),
        }
    }
}

impl fmt::Display for LineShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for LineShape {
    fn default() -> Self {
        LineShape::Straight
    }
}

/// Which part of a tuplet ratio to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTuplet {
    /// `actual`
    Actual,
    /// `both`
    Both,
    /// `none`
    None,
}

impl ShowTuplet {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            ShowTuplet::Actual => "actual",
            ShowTuplet::Both => "both",
            ShowTuplet::None => "none",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "actual" => Ok(ShowTuplet::Actual),
            "both" => Ok(ShowTuplet::Both),
            "none" => Ok(ShowTuplet::None),
            _ => Err(Error::token(token, "show-tuplet")),
        }
    }
}

impl fmt::Display for ShowTuplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for ShowTuplet {
    fn default() -> Self {
        ShowTuplet::Actual
    }
}

/// Graphic note type, from longest to shortest duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTypeValue {
    /// `maxima`
    Maxima,
    /// `long`
    Long,
    /// `breve`
    Breve,
    /// `whole`
    Whole,
    /// `half`
    Half,
    /// `quarter`
    Quarter,
    /// `eighth`
    Eighth,
    /// `16th`
    N16th,
    /// `32nd`
    N32nd,
    /// `64th`
    N64th,
    /// `128th`
    N128th,
    /// `256th`
    N256th,
    /// `512th`
    N512th,
    /// `1024th`
    N1024th,
}

impl NoteTypeValue {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            NoteTypeValue::Maxima => "maxima",
            NoteTypeValue::Long => "long",
            NoteTypeValue::Breve => "breve",
            NoteTypeValue::Whole => "whole",
            NoteTypeValue::Half => "half",
            NoteTypeValue::Quarter => "quarter",
            NoteTypeValue::Eighth => "eighth",
            NoteTypeValue::N16th => "16th",
            NoteTypeValue::N32nd => "32nd",
            NoteTypeValue::N64th => "64th",
            NoteTypeValue::N128th => "128th",
            NoteTypeValue::N256th => "256th",
            NoteTypeValue::N512th => "512th",
            NoteTypeValue::N1024th => "1024th",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "maxima" => Ok(NoteTypeValue::Maxima),
            "long" => Ok(NoteTypeValue::Long),
            "breve" => Ok(NoteTypeValue::Breve),
            "whole" => Ok(NoteTypeValue::Whole),
            "half" => Ok(NoteTypeValue::Half),
            "quarter" => Ok(NoteTypeValue::Quarter),
            "eighth" => Ok(NoteTypeValue::Eighth),
            "16th" => Ok(NoteTypeValue::N16th),
            "32nd" => Ok(NoteTypeValue::N32nd),
            "64th" => Ok(NoteTypeValue::N64th),
            "128th" => Ok(NoteTypeValue::N128th),
            "256th" => Ok(NoteTypeValue::N256th),
            "512th" => Ok(NoteTypeValue::N512th),
            "1024th" => Ok(NoteTypeValue::N1024th),
            _ => Err(Error::token(token, "note-type-value")),
        }
    }
}

impl fmt::Display for NoteTypeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for NoteTypeValue {
    fn default() -> Self {
        NoteTypeValue::Eighth
    }
}

/// Line style of a spanning line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// `solid`
    Solid,
    /// `dashed`
    Dashed,
    /// `dotted`
    Dotted,
    /// `wavy`
    Wavy,
}

impl LineType {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            LineType::Solid => "solid",
            LineType::Dashed => "dashed",
            LineType::Dotted => "dotted",
            LineType::Wavy => "wavy",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "solid" => Ok(LineType::Solid),
            "dashed" => Ok(LineType::Dashed),
            "dotted" => Ok(LineType::Dotted),
            "wavy" => Ok(LineType::Wavy),
            _ => Err(Error::token(token, "line-type")),
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for LineType {
    fn default() -> Self {
        LineType::Solid
    }
}

/// Hook shape at the end of a spanning line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// `up`
    Up,
    /// `down`
    Down,
    /// `both`
    Both,
    /// `arrow`
    Arrow,
    /// `none`
    None,
}

impl LineEnd {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            LineEnd::Up => "up",
            LineEnd::Down => "down",
            LineEnd::Both => "both",
            LineEnd::Arrow => "arrow",
            LineEnd::None => "none",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "up" => Ok(LineEnd::Up),
            "down" => Ok(LineEnd::Down),
            "both" => Ok(LineEnd::Both),
            "arrow" => Ok(LineEnd::Arrow),
            "none" => Ok(LineEnd::None),
            _ => Err(Error::token(token, "line-end")),
        }
    }
}

impl fmt::Display for LineEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for LineEnd {
    fn default() -> Self {
        LineEnd::None
    }
}

/// Horizontal alignment of a text or notation element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftCenterRight {
    /// `left`
    Left,
    /// `center`
    Center,
    /// `right`
    Right,
}

impl LeftCenterRight {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            LeftCenterRight::Left => "left",
            LeftCenterRight::Center => "center",
            LeftCenterRight::Right => "right",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "left" => Ok(LeftCenterRight::Left),
            "center" => Ok(LeftCenterRight::Center),
            "right" => Ok(LeftCenterRight::Right),
            _ => Err(Error::token(token, "left-center-right")),
        }
    }
}

impl fmt::Display for LeftCenterRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for LeftCenterRight {
    fn default() -> Self {
        LeftCenterRight::Left
    }
}

/// Vertical alignment of a text or notation element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valign {
    /// `top`
    Top,
    /// `middle`
    Middle,
    /// `bottom`
    Bottom,
    /// `baseline`
    Baseline,
}

impl Valign {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            Valign::Top => "top",
            Valign::Middle => "middle",
            Valign::Bottom => "bottom",
            Valign::Baseline => "baseline",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "top" => Ok(Valign::Top),
            "middle" => Ok(Valign::Middle),
            "bottom" => Ok(Valign::Bottom),
            "baseline" => Ok(Valign::Baseline),
            _ => Err(Error::token(token, "valign")),
        }
    }
}

impl fmt::Display for Valign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for Valign {
    fn default() -> Self {
        Valign::Baseline
    }
}

/// Placement relative to the staff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboveBelow {
    /// `above`
    Above,
    /// `below`
    Below,
}

impl AboveBelow {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            AboveBelow::Above => "above",
            AboveBelow::Below => "below",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "above" => Ok(AboveBelow::Above),
            "below" => Ok(AboveBelow::Below),
            _ => Err(Error::token(token, "above-below")),
        }
    }
}

impl fmt::Display for AboveBelow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for AboveBelow {
    fn default() -> Self {
        AboveBelow::Above
    }
}

/// How a time signature is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSymbol {
    /// `common`
    Common,
    /// `cut`
    Cut,
    /// `single-number`
    SingleNumber,
    /// `note`
    Note,
    /// `dotted-note`
    DottedNote,
    /// `normal`
    Normal,
}

impl TimeSymbol {
    /// The schema token for this value
    pub fn as_token(self) -> &'static str {
        match self {
            TimeSymbol::Common => "common",
            TimeSymbol::Cut => "cut",
            TimeSymbol::SingleNumber => "single-number",
            TimeSymbol::Note => "note",
            TimeSymbol::DottedNote => "dotted-note",
            TimeSymbol::Normal => "normal",
        }
    }

    /// Parse a schema token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "common" => Ok(TimeSymbol::Common),
            "cut" => Ok(TimeSymbol::Cut),
            "single-number" => Ok(TimeSymbol::SingleNumber),
            "note" => Ok(TimeSymbol::Note),
            "dotted-note" => Ok(TimeSymbol::DottedNote),
            "normal" => Ok(TimeSymbol::Normal),
            _ => Err(Error::token(token, "time-symbol")),
        }
    }
}

impl fmt::Display for TimeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl Default for TimeSymbol {
    fn default() -> Self {
        TimeSymbol::Normal
    }
}
