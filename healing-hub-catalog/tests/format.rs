use healing_hub_catalog::*;

fn delimited(raw: &str) -> Vec<DelimitedLine> {
    match detect_format(raw).unwrap() {
        DetectedBatch::Delimited(lines) => lines,
        other => panic!("expected delimited batch, got {other:?}"),
    }
}

#[test]
fn json_array_is_detected() {
    let batch = detect_format(r#"[{"term": "Reiki"}, {"term": "Prana"}]"#).unwrap();
    assert_eq!(batch.format_name(), "json");
    assert_eq!(batch.len(), 2);
}

#[test]
fn single_json_object_is_one_record() {
    let batch = detect_format(r#"  {"name": "Chakra", "category": "Energy"}  "#).unwrap();
    let DetectedBatch::Json(items) = batch else {
        panic!("expected JSON batch");
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].term.as_deref(), Some("Chakra"));
}

#[test]
fn malformed_json_is_a_hard_error() {
    let err = detect_format(r#"[{"term": "Reiki",}]"#).unwrap_err();
    assert!(matches!(err, FormatError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid JSON:"));
}

#[test]
fn json_looking_text_never_falls_back_to_lines() {
    let err = detect_format("[Reiki|Energy healing").unwrap_err();
    assert!(matches!(err, FormatError::Parse(_)));
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(detect_format("").unwrap_err(), FormatError::Empty));
    assert!(matches!(detect_format("  \n\t\n").unwrap_err(), FormatError::Empty));
    assert!(matches!(detect_format("[]").unwrap_err(), FormatError::Empty));
}

#[test]
fn header_only_input_is_empty() {
    let err = detect_format("Term|Category|Short|Definition\n").unwrap_err();
    assert!(matches!(err, FormatError::Empty));
}

#[test]
fn header_line_is_discarded() {
    let lines = delimited("term | category | short | long\nGinger|Spices|Warming root\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].fields[0], "Ginger");
    assert_eq!(lines[0].line_number, 2);
}

#[test]
fn header_detected_by_definition_word() {
    let lines = delimited("Term\tDefinition\nPrana\tLife force\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].delimiter, Delimiter::Tab);
}

#[test]
fn first_data_line_is_not_mistaken_for_header() {
    let lines = delimited("Ginger|Spices\nPrana|Energy\n");
    assert_eq!(lines.len(), 2);
}

#[test]
fn words_containing_term_are_data_not_header() {
    for first in [
        "Intermittent fasting|Diet|Eating window",
        "Determination|Mindset",
        "Thermal Terminology|Sauna",
        "Terminal care\tHospice definition",
    ] {
        let raw = format!("{first}\nPrana|Energy\n");
        let lines = delimited(&raw);
        assert_eq!(lines.len(), 2, "first line dropped: {first}");
        assert_eq!(lines[0].line_number, 1);
    }
}

#[test]
fn plural_header_words_are_recognized() {
    let lines = delimited("Terms | Definitions\nPrana|Life force\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].fields[0], "Prana");
}

#[test]
fn delimiter_priority_per_line() {
    let lines = delimited("A|B#C\nD#E\tF\nG\tH\n");
    assert_eq!(lines[0].delimiter, Delimiter::Pipe);
    assert_eq!(lines[0].fields, vec!["A", "B#C"]);
    assert_eq!(lines[1].delimiter, Delimiter::Hash);
    assert_eq!(lines[1].fields, vec!["D", "E\tF"]);
    assert_eq!(lines[2].delimiter, Delimiter::Tab);
}

#[test]
fn blank_lines_are_skipped_but_counted() {
    let lines = delimited("\nGinger|Spices\n\n\nPrana|Energy\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].line_number, 2);
    assert_eq!(lines[1].line_number, 5);
}

#[test]
fn fields_are_trimmed_and_blank_positions_kept() {
    let lines = delimited("  Ginger  | |Warming root | \n");
    assert_eq!(lines[0].fields, vec!["Ginger", "", "Warming root", ""]);
    assert_eq!(lines[0].field(1), None);
    assert_eq!(lines[0].field(2), Some("Warming root"));
    assert_eq!(lines[0].field(9), None);
}

#[test]
fn crlf_input_is_accepted() {
    let lines = delimited("Ginger|Spices\r\nPrana|Energy\r\n");
    assert_eq!(lines[1].fields, vec!["Prana", "Energy"]);
}

#[test]
fn single_field_line_reports_line_and_delimiter() {
    let err = detect_format("Ginger|Spices\nPrana\nChakra|Energy").unwrap_err();
    match err {
        FormatError::LineFormat { line, delimiter } => {
            assert_eq!(line, 2);
            assert_eq!(delimiter, Delimiter::Pipe);
        }
        other => panic!("expected line error, got {other:?}"),
    }
}

#[test]
fn line_with_only_one_filled_field_is_rejected() {
    let err = detect_format("Ginger|Spices\nPrana#  #\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Line 2: expected at least 2 fields separated by '#'"
    );
}
