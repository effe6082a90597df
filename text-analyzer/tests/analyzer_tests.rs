use analysis_model::{
    AnalysisResult, ContentType, HeadingKind, JsonStructureInfo, ListKind, OutputFormat,
};
use text_analyzer::{analyze, AnalyzerLimits, TextAnalyzer};

fn assert_suggestions_sorted(result: &AnalysisResult) {
    for pair in result.suggestions.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "suggestions out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}

fn assert_table_invariant(result: &AnalysisResult) {
    let table = &result.structure.table_data;
    if table.is_table {
        assert_eq!(table.num_columns, table.header.len());
        assert_eq!(table.num_rows, table.rows.len());
        for row in &table.rows {
            assert_eq!(row.len(), table.num_columns, "row diverges from column count");
        }
    }
}

#[test]
fn csv_input_classifies_as_tabular() {
    let result = analyze("Name,Age,City\nAlice,30,NYC\nBob,25,LA");

    assert_eq!(result.content_type, ContentType::Tabular);
    let table = &result.structure.table_data;
    assert!(table.is_table);
    assert_eq!(table.separator, ",");
    assert_eq!(table.header, vec!["Name", "Age", "City"]);
    assert_eq!(table.num_rows, 2);
    assert_eq!(table.rows[0], vec!["Alice", "30", "NYC"]);
    assert_table_invariant(&result);
    assert_suggestions_sorted(&result);
    assert_eq!(result.suggestions[0].format, OutputFormat::Excel);
}

#[test]
fn markdown_headings_are_detected_in_document_order() {
    let result = analyze("# Title\nSome text.\n## Section\nMore text.");

    let headings = &result.structure.headings;
    assert_eq!(headings.len(), 2);
    assert_eq!(headings[0].text, "Title");
    assert_eq!(headings[0].level, 1);
    assert_eq!(headings[0].line_number, 0);
    assert_eq!(headings[1].text, "Section");
    assert_eq!(headings[1].level, 2);
    assert_eq!(headings[1].line_number, 2);
    assert!(headings.iter().all(|h| h.kind == HeadingKind::Markdown));
    assert_eq!(result.content_type, ContentType::StructuredDocument);
}

#[test]
fn bullet_lines_form_one_list_group() {
    let result = analyze("- item one\n- item two\n- item three");

    let lists = &result.structure.lists;
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].kind, ListKind::Bullet);
    assert_eq!(lists[0].items, vec!["item one", "item two", "item three"]);
    assert_eq!(lists[0].start_line, 0);
    assert!(!result.structure.table_data.is_table);
}

#[test]
fn valid_json_short_circuits_all_other_detectors() {
    let result = analyze(r#"{"a": 1, "b": [1, 2, 3]}"#);

    assert_eq!(result.content_type, ContentType::JsonData);
    assert_eq!(result.confidence, 95.0);
    let signal = &result.structure.json_data;
    assert!(signal.is_json);
    match signal.info.as_ref().expect("structure summary present") {
        JsonStructureInfo::Object { keys, nested_objects, total_fields } => {
            assert_eq!(keys, &vec!["a".to_string(), "b".to_string()]);
            assert_eq!(*nested_objects, 1);
            assert_eq!(*total_fields, 2);
        }
        other => panic!("expected object summary, got {other:?}"),
    }
    assert_eq!(result.suggestions[0].format, OutputFormat::Json);
    assert_eq!(result.suggestions[0].score, 98);
    // The other detectors never ran.
    assert!(!result.structure.table_data.is_table);
    assert!(result.structure.headings.is_empty());
}

#[test]
fn json_that_resembles_a_table_is_still_json() {
    // Comma-separated numbers would read as a table; the JSON parse wins.
    let result = analyze("[1, 2, 3]\n");
    assert_eq!(result.content_type, ContentType::JsonData);
    assert_eq!(result.confidence, 95.0);
}

#[test]
fn empty_and_blank_input_yield_the_empty_result() {
    for input in ["", "   ", "\n\n\t\n"] {
        let result = analyze(input);
        assert_eq!(result.content_type, ContentType::Empty);
        assert_eq!(result.confidence, 0.0);
        assert!(result.suggestions.is_empty());
        assert!(!result.structure.table_data.is_table);
        assert!(!result.structure.json_data.is_json);
        assert!(result.structure.headings.is_empty());
        assert!(result.structure.lists.is_empty());
    }
}

#[test]
fn divergent_rows_never_break_the_column_invariant() {
    let result = analyze("a,b,c\n1,2,3\nbad,row\n4,5,6\n7,8,9");
    assert_eq!(result.content_type, ContentType::Tabular);
    assert_table_invariant(&result);
    assert_eq!(result.structure.table_data.num_columns, 3);
    assert_eq!(result.structure.table_data.num_rows, 3);
}

#[test]
fn analysis_is_idempotent() {
    let inputs = [
        "Name,Age\nAlice,30\nBob,25",
        "# Doc\nbody text\n- a\n- b",
        r#"{"k": [true, null]}"#,
        "plain prose with nothing special going on here at all",
    ];
    for input in inputs {
        let first = analyze(input);
        let second = analyze(input);
        assert_eq!(first, second, "repeated analysis diverged for {input:?}");
    }
}

#[test]
fn analysis_is_total_over_odd_inputs() {
    let inputs = [
        "\u{0}\u{1}\u{2}",
        "....",
        "| | | | |",
        ":::::",
        "日本語のテキスト、表ではない。",
        "a\tb\tc",
    ];
    for input in inputs {
        let result = analyze(input);
        assert!(result.confidence >= 0.0 && result.confidence <= 100.0);
        assert_table_invariant(&result);
        assert_suggestions_sorted(&result);
    }
}

#[test]
fn oversized_input_is_clamped_not_rejected() {
    let huge = "The quick brown fox jumps over the lazy dog. ".repeat(60_000);
    assert!(huge.len() > 2_000_000);

    let result = analyze(&huge);
    assert!(result.confidence >= 0.0 && result.confidence <= 100.0);
    assert_suggestions_sorted(&result);

    // A tighter custom limit still yields a well-formed result.
    let tight = TextAnalyzer::with_limits(AnalyzerLimits { max_bytes: 512, max_lines: 10 });
    let clamped = tight.analyze(&huge);
    assert!(clamped.confidence >= 0.0 && clamped.confidence <= 100.0);
}

#[test]
fn analysis_result_round_trips_through_serde() {
    let result = analyze("Name,Age\nAlice,30\nBob,25");
    let json = serde_json::to_string(&result).expect("result serializes");
    let back: AnalysisResult = serde_json::from_str(&json).expect("result deserializes");
    assert_eq!(result, back);
    // The closed format set appears verbatim on the wire.
    assert!(json.contains("\"Excel (.xlsx)\""));
    assert!(json.contains("\"content_type\":\"tabular\""));
}
