//! Public value layer integration tests
//!
//! Aggregator extraction and write-back against real catalog elements, and
//! serde interchange of the api types.

use pretty_assertions::assert_eq;

use muxml::api::{
    HorizontalAlignment, LineData, LineHook, LineType, Placement, PositionData,
    VerticalAlignment,
};
use muxml::schema::{self, Bracket, LineEnd, StartStop, Tuplet};
use muxml::render_to_string;

#[test]
fn line_data_round_trips_through_a_bracket() {
    let data = LineData {
        line_type: LineType::Dashed,
        line_end: LineHook::Arrow,
        end_length: Some(6.0),
        dash_length: Some(4.0),
        space_length: Some(2.0),
    };

    let mut bracket = Bracket::new(StartStop::Start, LineEnd::None);
    data.apply_to(&mut bracket.attributes);
    assert_eq!(LineData::from_attributes(&bracket.attributes), data);

    assert_eq!(
        render_to_string(&bracket, 0),
        r#"<bracket type="start" line-end="arrow" end-length="6" line-type="dashed" dash-length="4" space-length="2"/>"#
    );
}

#[test]
fn unspecified_line_data_writes_nothing_optional() {
    let mut bracket = Bracket::new(StartStop::Stop, LineEnd::Up);
    LineData::default().apply_to(&mut bracket.attributes);

    assert_eq!(
        render_to_string(&bracket, 0),
        r#"<bracket type="stop" line-end="up"/>"#
    );
}

#[test]
fn position_data_round_trips_through_a_tuplet() {
    let data = PositionData {
        default_x: Some(10.0),
        relative_y: Some(-20.5),
        placement: Placement::Below,
        ..PositionData::default()
    };

    let mut tuplet = Tuplet::new(StartStop::Start);
    data.apply_to(&mut tuplet.attributes);
    assert_eq!(PositionData::from_attributes(&tuplet.attributes), data);

    assert_eq!(
        render_to_string(&tuplet, 0),
        r#"<tuplet type="start" default-x="10" relative-y="-20.5" placement="below"/>"#
    );
}

#[test]
fn tuplet_ignores_alignment_write_backs_it_does_not_declare() {
    let data = PositionData {
        halign: HorizontalAlignment::Center,
        valign: VerticalAlignment::Top,
        ..PositionData::default()
    };

    let mut tuplet = Tuplet::new(StartStop::Start);
    data.apply_to(&mut tuplet.attributes);

    let read_back = PositionData::from_attributes(&tuplet.attributes);
    assert!(!read_back.is_specified());
    assert_eq!(render_to_string(&tuplet, 0), r#"<tuplet type="start"/>"#);
}

#[test]
fn extraction_defaults_enumerations_to_the_sentinel() {
    let bracket = Bracket::default();
    let data = LineData::from_attributes(&bracket.attributes);

    // The required line-end is visible, everything optional is absent.
    assert_eq!(data.line_end, LineHook::None);
    assert_eq!(data.line_type, LineType::Unspecified);
    assert!(!data.is_specified());
}

#[test]
fn yes_no_conversion_drives_the_bracket_flag() {
    use muxml::Convert;

    let mut tuplet = Tuplet::new(StartStop::Start);
    let show_bracket = true;
    tuplet
        .attributes
        .bracket
        .set_or_clear(schema::YesNo::to_schema(show_bracket));

    assert_eq!(
        render_to_string(&tuplet, 0),
        r#"<tuplet type="start" bracket="yes"/>"#
    );
    assert!(tuplet.attributes.bracket.value().to_api());
}

#[test]
fn line_data_serializes_to_json_and_back() {
    let data = LineData {
        line_type: LineType::Dotted,
        dash_length: Some(1.5),
        ..LineData::default()
    };

    let json = serde_json::to_string(&data).unwrap();
    let back: LineData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn position_data_serializes_with_kebab_case_sentinels() {
    let json = serde_json::to_value(PositionData::default()).unwrap();
    assert_eq!(json["halign"], "unspecified");
    assert_eq!(json["placement"], "unspecified");
    assert_eq!(json["default-x"], serde_json::Value::Null);
}
