//! Shared analysis result and signal models used across crates

use serde::{Deserialize, Serialize};

/// Classification label driving downstream rendering choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Empty,
    JsonData,
    StructuredDocument,
    Tabular,
    MixedTabular,
    ListDocument,
    SimpleDocument,
    NarrativeDocument,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Empty => "empty",
            ContentType::JsonData => "json_data",
            ContentType::StructuredDocument => "structured_document",
            ContentType::Tabular => "tabular",
            ContentType::MixedTabular => "mixed_tabular",
            ContentType::ListDocument => "list_document",
            ContentType::SimpleDocument => "simple_document",
            ContentType::NarrativeDocument => "narrative_document",
        }
    }
}

/// How a table signal was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableSource {
    Detected,
    AiExtracted,
    KeyValueExtracted,
    PatternExtracted,
}

/// Tabular layout found in (or mined from) the input text.
///
/// Invariant: when `is_table` is true, every row in `rows` has exactly
/// `num_columns` cells and `num_columns == header.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSignal {
    pub is_table: bool,
    pub separator: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub num_columns: usize,
    pub num_rows: usize,
    /// Detection confidence on the canonical 0–1 scale.
    pub confidence: f64,
    pub source: TableSource,
}

impl TableSignal {
    /// Explicit "no table found" signal.
    pub fn not_found() -> Self {
        Self {
            is_table: false,
            separator: String::new(),
            header: Vec::new(),
            rows: Vec::new(),
            num_columns: 0,
            num_rows: 0,
            confidence: 0.0,
            source: TableSource::Detected,
        }
    }

    pub fn found(
        separator: impl Into<String>,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        confidence: f64,
        source: TableSource,
    ) -> Self {
        let num_columns = header.len();
        let num_rows = rows.len();
        Self {
            is_table: true,
            separator: separator.into(),
            header,
            rows,
            num_columns,
            num_rows,
            confidence,
            source,
        }
    }
}

impl Default for TableSignal {
    fn default() -> Self {
        Self::not_found()
    }
}

/// Which line rule (or fallback strategy) produced a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingKind {
    Markdown,
    TitleCase,
    Uppercase,
    TopicExtracted,
    AiGenerated,
    ContentBased,
    AutoGenerated,
    SectionGenerated,
}

/// A heading in document order (or synthetic priority order when generated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    /// 1-based nesting level.
    pub level: u32,
    /// Index into the analyzed text's line sequence, or 0 for synthetic headings.
    pub line_number: usize,
    pub kind: HeadingKind,
    /// Present only for generated headings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Heading {
    pub fn new(text: impl Into<String>, level: u32, line_number: usize, kind: HeadingKind) -> Self {
        Self { text: text.into(), level, line_number, kind, confidence: None }
    }

    pub fn generated(
        text: impl Into<String>,
        level: u32,
        line_number: usize,
        kind: HeadingKind,
        confidence: f64,
    ) -> Self {
        Self { text: text.into(), level, line_number, kind, confidence: Some(confidence) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// A run of consecutive list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroup {
    pub kind: ListKind,
    pub items: Vec<String>,
    pub start_line: usize,
}

/// Shape summary of successfully parsed JSON input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonStructureInfo {
    Object {
        keys: Vec<String>,
        /// Count of values that are themselves objects or arrays.
        nested_objects: usize,
        total_fields: usize,
    },
    Array {
        length: usize,
        /// Distinct type names sampled from the first 5 elements.
        item_types: Vec<String>,
    },
    Primitive {
        value_type: String,
    },
}

/// JSON validity signal. Valid JSON short-circuits all other detectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSignal {
    pub is_json: bool,
    /// Canonical 0–1 scale.
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<JsonStructureInfo>,
}

impl JsonSignal {
    pub fn not_found() -> Self {
        Self { is_json: false, confidence: 0.0, info: None }
    }

    pub fn found(info: JsonStructureInfo) -> Self {
        Self { is_json: true, confidence: 0.95, info: Some(info) }
    }
}

impl Default for JsonSignal {
    fn default() -> Self {
        Self::not_found()
    }
}

/// Basic text metrics, display-only for consumers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStats {
    pub lines: usize,
    pub sentences: usize,
    pub words: usize,
    pub readability_score: f64,
}

/// All structural signals for one analysis call.
///
/// "Nothing found" is always explicit: `is_table: false`, `is_json: false`,
/// empty vectors. Consumers never need to distinguish absent from empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Structure {
    pub table_data: TableSignal,
    pub headings: Vec<Heading>,
    pub lists: Vec<ListGroup>,
    pub json_data: JsonSignal,
    pub stats: TextStats,
}

/// Output document representation a suggestion can point at.
///
/// The serialized forms are a closed set; renderers dispatch on them by
/// exact match, so nothing outside this enum can ever be suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "Word (.docx)")]
    Word,
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "Excel (.xlsx)")]
    Excel,
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "ODS")]
    Ods,
}

impl OutputFormat {
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Word => "Word (.docx)",
            OutputFormat::Pdf => "PDF",
            OutputFormat::Excel => "Excel (.xlsx)",
            OutputFormat::Csv => "CSV",
            OutputFormat::Json => "JSON",
            OutputFormat::Ods => "ODS",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored recommendation of an output representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSuggestion {
    pub format: OutputFormat,
    /// 0–100.
    pub score: u8,
    pub reason: String,
}

impl FormatSuggestion {
    pub fn new(format: OutputFormat, score: u8, reason: impl Into<String>) -> Self {
        Self { format, score, reason: reason.into() }
    }
}

/// Immutable result of one analysis call; the sole contract handed to
/// rendering collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub content_type: ContentType,
    pub structure: Structure,
    /// Ordered descending by score.
    pub suggestions: Vec<FormatSuggestion>,
    /// 0–100.
    pub confidence: f64,
}

impl AnalysisResult {
    /// Result for blank input: zero-value structure, no suggestions.
    pub fn empty() -> Self {
        Self {
            content_type: ContentType::Empty,
            structure: Structure::default(),
            suggestions: Vec::new(),
            confidence: 0.0,
        }
    }
}
