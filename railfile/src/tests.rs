use crate::input::railway_file::{self, ParseError, TrailingLines};
use crate::railway::*;

use std::path::Path;

fn minimal_file() -> &'static str {
    "1.2.3\n\
     10\n\
     20\n\
     1\n\
     **Active elements**\n\
     5\n\
     30\n\
     40\n\
     15\n\
     -1\n\
     60\n\
     -1\n\
     Platform1\n\
     SignalA\n"
}

#[test]
fn location_equality_is_structural() {
    assert_eq!(Location::new(3, 4), Location::new(3, 4));
    assert_ne!(Location::new(3, 4), Location::new(4, 3));
    assert_eq!(Location::new(-2, 7).to_string(), "-2-7");
}

#[test]
fn decorated_locations_share_the_underlying_location() {
    let location = Location::new(3, 4);
    let exit = RailwayExitLocation::new(location, "east");
    let start = RailwayStartLocation::new(location, "west");
    assert_eq!(exit.location(), start.location());
    assert_eq!(exit.label(), "east(3-4)");
    assert_eq!(start.label(), "west(3-4)");
    assert_eq!(exit.name(), "east");
}

#[test]
fn registries_keep_insertion_order_without_dedup() {
    let mut railway = Railway::new();
    railway.add_station("Alpha");
    railway.add_station("Beta");
    railway.add_station("Alpha");
    assert_eq!(railway.get_stations(), ["Alpha", "Beta", "Alpha"]);

    railway.add_exit(Location::new(1, 2), "east");
    railway.add_exit(Location::new(3, 4), "east");
    railway.add_start(Location::new(5, 6), "west");
    assert_eq!(railway.get_exits(), ["east", "east"]);
    assert_eq!(railway.get_starts(), ["west"]);

    // name lookup resolves to the most recent registration
    let exit = railway.get_exit_from_string("east").unwrap();
    assert_eq!(exit.location(), Location::new(3, 4));
}

#[test]
fn lookups_on_unregistered_labels_return_none() {
    let railway = Railway::new();
    assert!(railway.get_exit_from_string("nowhere").is_none());
    assert!(railway.get_start_from_string("nowhere").is_none());
    assert!(railway.get_location_from_string("nowhere").is_none());
}

#[test]
fn add_element_registers_named_locations() {
    let mut railway = Railway::new();
    railway.add_element(Element::named(Location::new(5, 6), "Platform1"));
    assert_eq!(
        railway.get_location_from_string("Platform1"),
        Some(Location::new(5, 6))
    );
    assert_eq!(railway.elements().len(), 1);
    assert_eq!(railway.elements()[0].element_type(), ElementType::Named);
}

#[test]
fn element_at_finds_by_coordinate() {
    let mut railway = Railway::new();
    railway.add_element(Element::named(Location::new(1, 1), "A"));
    railway.add_element(Element::named(Location::new(2, 2), "B"));
    assert_eq!(
        railway.element_at(Location::new(2, 2)).and_then(|e| e.name()),
        Some("B")
    );
    assert!(railway.element_at(Location::new(9, 9)).is_none());
}

#[test]
fn named_element_names_are_distinct_in_insertion_order() {
    let mut railway = Railway::new();
    railway.add_element(Element::named(Location::new(1, 1), "B"));
    railway.add_element(Element::named(Location::new(2, 2), "A"));
    railway.add_element(Element::named(Location::new(3, 3), "B"));
    assert_eq!(railway.named_element_names(), ["B", "A"]);
}

#[test]
fn minimal_file_parses_one_active_element() {
    let railway = railway_file::parse_str(minimal_file(), TrailingLines::Flush).unwrap();

    assert_eq!(railway.program_version, "1.2.3");
    assert_eq!(railway.home_location, Location::new(10, 20));
    assert_eq!(railway.active_element_count, 1);
    assert_eq!(railway.elements().len(), 1);

    let element = &railway.elements()[0];
    assert_eq!(element.element_type(), ElementType::Active);
    assert_eq!(element.speed_tag, Some(5));
    assert_eq!(element.location, Location::new(30, 40));
    assert_eq!(element.name(), Some("Platform1"));

    let active = element.active_data().unwrap();
    assert_eq!(active.length_main, 15);
    assert_eq!(active.length_side, None);
    assert_eq!(active.speed_main, 60);
    assert_eq!(active.speed_side, None);
    assert_eq!(active.active_name, "SignalA");
}

#[test]
fn sentinel_applies_only_to_optional_fields() {
    let input = "1.2.3\n10\n20\n1\n\
                 **Active elements**\n\
                 5\n30\n40\n15\n7\n60\n25\nPlatform1\nSignalA\n";
    let railway = railway_file::parse_str(input, TrailingLines::Flush).unwrap();
    let active = railway.elements()[0].active_data().unwrap();
    assert_eq!(active.length_side, Some(7));
    assert_eq!(active.speed_side, Some(25));
}

#[test]
fn empty_name_line_means_unnamed() {
    let input = "1.2.3\n10\n20\n1\n\
                 **Active elements**\n\
                 5\n30\n40\n15\n-1\n60\n-1\n\nSignalA\n";
    let railway = railway_file::parse_str(input, TrailingLines::Flush).unwrap();
    let element = &railway.elements()[0];
    assert_eq!(element.name(), None);
    assert_eq!(element.active_data().unwrap().active_name, "SignalA");
}

#[test]
fn reserved_sections_accept_garbage() {
    let input = "1.2.3\n10\n20\n1\n\
                 **Active elements**\n\
                 5\n30\n40\n15\n-1\n60\n-1\nPlatform1\nSignalA\n\
                 **Inactive elements**\n\
                 not a number\n\
                 ?? {\n\
                 ***\n\
                 free text, anything goes\n\
                 12 34 56\n";
    let railway = railway_file::parse_str(input, TrailingLines::Flush).unwrap();
    assert_eq!(railway.elements().len(), 1);
}

#[test]
fn text_section_is_terminal() {
    // a marker line inside the text section is ordinary content
    let input = "1.2.3\n10\n20\n1\n\
                 ***\n\
                 **Active elements**\n\
                 5\n30\n40\n15\n-1\n60\n-1\nPlatform1\nSignalA\n";
    let railway = railway_file::parse_str(input, TrailingLines::Flush).unwrap();
    assert_eq!(railway.elements().len(), 0);
}

#[test]
fn non_numeric_required_field_aborts_the_parse() {
    let input = "1.2.3\n10\n20\n1\n\
                 **Active elements**\n\
                 abc\n30\n40\n15\n-1\n60\n-1\nPlatform1\nSignalA\n";
    let err = railway_file::parse_str(input, TrailingLines::Flush).unwrap_err();
    match err {
        ParseError::ExpectedInteger { ref line, .. } => assert_eq!(line, "abc"),
        other => panic!("expected ExpectedInteger, got {:?}", other),
    }
    assert!(err.to_string().contains("active elements"));
}

#[test]
fn short_active_record_is_a_format_error() {
    let input = "1.2.3\n10\n20\n1\n\
                 **Active elements**\n\
                 5\n30\n40\n";
    let err = railway_file::parse_str(input, TrailingLines::Flush).unwrap_err();
    match err {
        ParseError::MissingLine { offset, .. } => assert_eq!(offset, 3),
        other => panic!("expected MissingLine, got {:?}", other),
    }
}

#[test]
fn non_numeric_metadata_count_aborts_the_parse() {
    let input = "1.2.3\n10\n20\nmany\n**Active elements**\n";
    let err = railway_file::parse_str(input, TrailingLines::Flush).unwrap_err();
    assert!(err.to_string().contains("metadata"));
}

#[test]
fn trailing_lines_policy_is_explicit() {
    let flushed = railway_file::parse_str(minimal_file(), TrailingLines::Flush).unwrap();
    assert_eq!(flushed.elements().len(), 1);

    // the record sits after the last marker, so dropping trailing lines
    // loses it
    let dropped = railway_file::parse_str(minimal_file(), TrailingLines::Drop).unwrap();
    assert_eq!(dropped.elements().len(), 0);
    assert_eq!(dropped.program_version, "1.2.3");
}

#[test]
fn file_ending_at_a_marker_is_fine() {
    let input = "1.2.3\n10\n20\n0\n**Active elements**\n";
    let railway = railway_file::parse_str(input, TrailingLines::Flush).unwrap();
    assert_eq!(railway.elements().len(), 0);
    assert_eq!(railway.active_element_count, 0);
}

#[test]
fn missing_file_is_not_found() {
    let err = railway_file::parse(Path::new("no_such_file.rly")).unwrap_err();
    match err {
        ParseError::NotFound(_) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn parse_reads_from_disk() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.rly");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", minimal_file()).unwrap();
    drop(file);

    let railway = railway_file::parse(&path).unwrap();
    assert_eq!(railway.elements().len(), 1);

    let dropped = railway_file::parse_with(&path, TrailingLines::Drop).unwrap();
    assert_eq!(dropped.elements().len(), 0);

    let railway = crate::get_railway(&path).unwrap();
    assert_eq!(railway.program_version, "1.2.3");
}

#[test]
fn in_memory_entry_point_uses_the_default_policy() {
    let railway = crate::get_railway_string(minimal_file()).unwrap();
    assert_eq!(railway.elements().len(), 1);
}
