use analysis_model::{
    ContentType, FormatSuggestion, Heading, ListGroup, OutputFormat, TableSignal,
};

/// Ordered classification rules; the first match wins, so earlier rules take
/// precedence even when several could apply.
pub fn classify_content_type(
    table: &TableSignal,
    headings: &[Heading],
    lists: &[ListGroup],
    lines: &[&str],
) -> ContentType {
    let non_empty_lines = lines.iter().filter(|line| !line.trim().is_empty()).count();
    let table_lines = if table.is_table { table.num_rows + 1 } else { 0 };
    let table_ratio = if non_empty_lines > 0 {
        table_lines as f64 / non_empty_lines as f64
    } else {
        0.0
    };

    let total_list_items: usize = lists.iter().map(|group| group.items.len()).sum();
    // Headings weigh double; long lines count as body text.
    let text_weight = headings.len() * 2
        + total_list_items
        + lines.iter().filter(|line| line.trim().chars().count() > 50).count();

    if headings.len() >= 3 || (headings.len() >= 2 && text_weight > table_lines * 3) {
        ContentType::StructuredDocument
    } else if table.is_table
        && table.confidence > 0.8
        && table_ratio > 0.6
        && headings.len() <= 1
    {
        ContentType::Tabular
    } else if table.is_table
        && table.confidence > 0.7
        && table_ratio > 0.4
        && headings.len() <= 2
    {
        ContentType::MixedTabular
    } else if lists.len() >= 2 || total_list_items > 8 {
        ContentType::ListDocument
    } else if headings.len() == 1 || non_empty_lines <= 10 {
        ContentType::SimpleDocument
    } else {
        ContentType::NarrativeDocument
    }
}

/// Average of the applicable per-signal factors, capped at 95.
pub fn calculate_confidence(
    table: &TableSignal,
    headings: &[Heading],
    lists: &[ListGroup],
) -> f64 {
    let mut factors: Vec<f64> = Vec::new();
    if table.is_table {
        factors.push(table.confidence * 100.0);
    }
    if !headings.is_empty() {
        factors.push(((headings.len() * 20) as f64).min(80.0));
    }
    if !lists.is_empty() {
        factors.push(((lists.len() * 15) as f64).min(60.0));
    }
    if factors.is_empty() {
        factors.push(50.0);
    }
    (factors.iter().sum::<f64>() / factors.len() as f64).min(95.0)
}

/// Fixed suggestion table per content type, sorted descending by score.
/// Only the `mixed_tabular` Excel score is computed, rewarding higher table
/// confidence within the 75–90 band.
pub fn format_suggestions(content_type: ContentType, table: &TableSignal) -> Vec<FormatSuggestion> {
    use OutputFormat::*;

    let mut suggestions = match content_type {
        ContentType::Empty => Vec::new(),
        ContentType::JsonData => vec![
            FormatSuggestion::new(Json, 98, "Perfect match - input is already valid JSON data"),
            FormatSuggestion::new(
                Excel,
                85,
                "Good for analyzing structured JSON data in spreadsheet format",
            ),
            FormatSuggestion::new(Csv, 80, "Useful for flattened data analysis"),
        ],
        ContentType::Tabular => vec![
            FormatSuggestion::new(Excel, 95, "Perfect for tabular data with formatting"),
            FormatSuggestion::new(Csv, 90, "Clean data export, widely compatible"),
            FormatSuggestion::new(Ods, 85, "Open standard for spreadsheets"),
        ],
        ContentType::MixedTabular => {
            let excel_score = (75.0 + table.confidence * 15.0).round() as u8;
            vec![
                FormatSuggestion::new(Word, 90, "Excellent for mixed content with embedded tables"),
                FormatSuggestion::new(Pdf, 85, "Professional formatting for mixed content"),
                FormatSuggestion::new(
                    Excel,
                    excel_score,
                    "Good for documents with some tabular data",
                ),
            ]
        }
        ContentType::StructuredDocument | ContentType::ListDocument => vec![
            FormatSuggestion::new(Word, 95, "Excellent for structured documents"),
            FormatSuggestion::new(Pdf, 90, "Professional, print-ready format"),
            FormatSuggestion::new(Json, 70, "Good for structured data interchange"),
        ],
        ContentType::SimpleDocument | ContentType::NarrativeDocument => vec![
            FormatSuggestion::new(Pdf, 90, "Professional presentation"),
            FormatSuggestion::new(Word, 85, "Editable document format"),
            FormatSuggestion::new(Json, 60, "For data processing applications"),
        ],
    };

    // Stable sort keeps the table's insertion order for equal scores.
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_model::{HeadingKind, TableSource};

    fn heading(n: usize) -> Vec<Heading> {
        (0..n)
            .map(|i| Heading::new(format!("H{i}"), 1, i, HeadingKind::Markdown))
            .collect()
    }

    #[test]
    fn three_headings_classify_as_structured_document() {
        let table = TableSignal::not_found();
        let kind = classify_content_type(&table, &heading(3), &[], &["a", "b", "c"]);
        assert_eq!(kind, ContentType::StructuredDocument);
    }

    #[test]
    fn heading_rich_text_beats_a_table_signal() {
        // Two headings plus long body lines outweigh a small table.
        let table = TableSignal::found(
            ",",
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "2".into()]],
            0.9,
            TableSource::Detected,
        );
        let long = "x".repeat(60);
        let lines = vec![long.as_str(), long.as_str(), long.as_str(), "short"];
        let kind = classify_content_type(&table, &heading(2), &[], &lines);
        assert_eq!(kind, ContentType::StructuredDocument);
    }

    #[test]
    fn confidence_averages_factors_and_caps_at_95() {
        let table = TableSignal::found(
            ",",
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "2".into()]],
            1.0,
            TableSource::Detected,
        );
        let confidence = calculate_confidence(&table, &[], &[]);
        assert_eq!(confidence, 95.0);

        let none = TableSignal::not_found();
        assert_eq!(calculate_confidence(&none, &[], &[]), 50.0);
    }

    #[test]
    fn mixed_tabular_excel_score_tracks_table_confidence() {
        let mut table = TableSignal::not_found();
        table.is_table = true;
        table.confidence = 0.8;
        let suggestions = format_suggestions(ContentType::MixedTabular, &table);
        let excel = suggestions
            .iter()
            .find(|s| s.format == OutputFormat::Excel)
            .expect("excel suggested");
        assert_eq!(excel.score, 87);
    }

    #[test]
    fn suggestions_are_sorted_descending_for_every_type() {
        let table = TableSignal::not_found();
        for content_type in [
            ContentType::Empty,
            ContentType::JsonData,
            ContentType::Tabular,
            ContentType::MixedTabular,
            ContentType::StructuredDocument,
            ContentType::ListDocument,
            ContentType::SimpleDocument,
            ContentType::NarrativeDocument,
        ] {
            let suggestions = format_suggestions(content_type, &table);
            for pair in suggestions.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
