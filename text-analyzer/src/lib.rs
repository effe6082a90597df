pub mod classify;
pub mod heading_detect;
pub mod json_detect;
pub mod list_detect;
pub mod patterns;
pub mod reader;
pub mod readability;
pub mod smart_headings;
pub mod smart_tables;
pub mod table_detect;

use analysis_model::{AnalysisResult, ContentType, JsonSignal, Structure, TextStats};

/// Input guards applied before any detector runs.
///
/// Several fallback patterns use lazy `.*?` spans, so unbounded input is
/// clamped first; analysis stays total and never fails on oversized text.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerLimits {
    /// Hard byte cap; longer input is cut at the nearest char boundary below.
    pub max_bytes: usize,
    /// Hard line cap; lines beyond this are dropped.
    pub max_lines: usize,
}

impl Default for AnalyzerLimits {
    fn default() -> Self {
        Self { max_bytes: 1_048_576, max_lines: 20_000 }
    }
}

/// Stateless analysis engine: a pure function of its input.
/// Safe to cache and reuse across calls, safe to construct per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer {
    limits: AnalyzerLimits,
}

impl TextAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: AnalyzerLimits) -> Self {
        Self { limits }
    }

    /// Analyze one text and classify its structure.
    ///
    /// Total over all string inputs: blank text yields the `empty` result,
    /// and no internal detector step can fail the call.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let text = clamp_input(text, &self.limits);
        if text.trim().is_empty() {
            return AnalysisResult::empty();
        }

        // Valid JSON short-circuits all other detectors.
        if let Some(json_data) = json_detect::detect_json(text) {
            let confidence = json_data.confidence * 100.0;
            let structure = Structure {
                json_data,
                stats: basic_stats(text),
                ..Structure::default()
            };
            return AnalysisResult {
                content_type: ContentType::JsonData,
                suggestions: classify::format_suggestions(
                    ContentType::JsonData,
                    &structure.table_data,
                ),
                structure,
                confidence,
            };
        }

        let trimmed = text.trim();
        let lines: Vec<&str> = trimmed.split('\n').collect();

        let mut table_data = table_detect::detect_table(text);
        let mut headings = heading_detect::detect_headings(&lines);
        let lists = list_detect::detect_lists(&lines);

        // Fall back to prose mining only when natural detection found nothing.
        if headings.is_empty() {
            headings = smart_headings::generate_smart_headings(text, &lines);
        }
        if !table_data.is_table {
            if let Some(mined) = smart_tables::extract_potential_tables(text, &lines) {
                table_data = mined;
            }
        }

        let content_type = classify::classify_content_type(&table_data, &headings, &lists, &lines);
        let suggestions = classify::format_suggestions(content_type, &table_data);
        let confidence = classify::calculate_confidence(&table_data, &headings, &lists);

        AnalysisResult {
            content_type,
            structure: Structure {
                table_data,
                headings,
                lists,
                json_data: JsonSignal::not_found(),
                stats: basic_stats(text),
            },
            suggestions,
            confidence,
        }
    }
}

/// Analyze with the default limits via a throwaway analyzer.
pub fn analyze(text: &str) -> AnalysisResult {
    TextAnalyzer::new().analyze(text)
}

fn clamp_input<'a>(text: &'a str, limits: &AnalyzerLimits) -> &'a str {
    let mut clamped = text;
    if clamped.len() > limits.max_bytes {
        let mut end = limits.max_bytes;
        while end > 0 && !clamped.is_char_boundary(end) {
            end -= 1;
        }
        clamped = &clamped[..end];
    }
    // Cut after the max_lines-th line if the newline count exceeds the cap.
    let mut newlines = 0usize;
    for (idx, byte) in clamped.bytes().enumerate() {
        if byte == b'\n' {
            newlines += 1;
            if newlines >= limits.max_lines {
                clamped = &clamped[..idx];
                break;
            }
        }
    }
    clamped
}

fn basic_stats(text: &str) -> TextStats {
    TextStats {
        lines: text.trim().split('\n').count(),
        sentences: text.split('.').count(),
        words: text.split_whitespace().count(),
        readability_score: readability::flesch_reading_ease(text)
            .unwrap_or(readability::DEFAULT_SCORE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_char_boundaries() {
        // A 2-byte cap lands inside the two-byte 'é' and must back off to "h".
        let limits = AnalyzerLimits { max_bytes: 2, max_lines: 100 };
        let clamped = clamp_input("héllo", &limits);
        assert_eq!(clamped, "h");
    }

    #[test]
    fn clamp_caps_line_count() {
        let limits = AnalyzerLimits { max_bytes: 1_000, max_lines: 3 };
        let clamped = clamp_input("a\nb\nc\nd\ne", &limits);
        assert_eq!(clamped, "a\nb\nc");
    }

    #[test]
    fn stats_count_dot_separated_segments() {
        let stats = basic_stats("One. Two. Three");
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.lines, 1);
    }
}
