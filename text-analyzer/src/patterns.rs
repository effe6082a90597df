//! Declarative pattern catalogues consumed by the fallback extractors.
//!
//! The tables are plain data (pattern, metadata) so new entries extend the
//! catalogue without touching the matching code.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("catalogue pattern compiles")
}

fn compile_ci(pattern: &str) -> Regex {
    compile(&format!("(?i){pattern}"))
}

// ------------------------------
// Section heading catalogue
// ------------------------------

/// A dense-prose section cue: pattern plus the heading it yields.
pub struct SectionRule {
    pub regex: Regex,
    pub heading: &'static str,
    pub level: u32,
    pub confidence: f64,
}

const SECTION_RULES_RAW: [(&str, &str); 9] = [
    (r"warehouse\s+received.*?units?\s+of\s+product", "Incoming Inventory"),
    (r"temperature.*?recorded|registered.*?°C", "Temperature Monitoring"),
    (r"damaged\s+cartons?.*?units?\s+lost", "Damage Assessment"),
    (
        r"inventory\s+tracking.*?dispatched.*?distribution\s+centers",
        "Distribution Summary",
    ),
    (r"outbound\s+delivery.*?GPS\s+pings", "Delivery Operations"),
    (r"power\s+outage.*?temperature\s+spike", "Incident Report"),
    (r"customer\s+complaints.*?CRM\s+system", "Customer Service Issues"),
    (r"staff\s+shift\s+logs.*?workers?.*?shift", "Staffing Report"),
    (r"fuel\s+consumption.*?liters", "Fuel Usage"),
];

pub static SECTION_RULES: Lazy<Vec<SectionRule>> = Lazy::new(|| {
    SECTION_RULES_RAW
        .iter()
        .map(|&(pattern, heading)| SectionRule {
            regex: compile_ci(pattern),
            heading,
            level: 2,
            confidence: 0.8,
        })
        .collect()
});

/// Document-level title cues for the section catalogue, first match wins.
pub static WAREHOUSE_TITLE_CUE: Lazy<Regex> =
    Lazy::new(|| compile_ci(r"warehouse|inventory|distribution"));
pub static LOGISTICS_TITLE_CUE: Lazy<Regex> =
    Lazy::new(|| compile_ci(r"delivery|logistics|shipment"));

// ------------------------------
// Topic and theme keyword tables
// ------------------------------

/// Words that mark a sentence as a topic statement.
pub const TOPIC_WORDS: [&str; 16] = [
    "introduction",
    "overview",
    "summary",
    "conclusion",
    "analysis",
    "findings",
    "results",
    "methodology",
    "discussion",
    "background",
    "objectives",
    "goals",
    "purpose",
    "scope",
    "approach",
    "strategy",
];

/// Theme → keyword vote table, in priority order (earlier wins score ties).
pub const THEME_TABLE: [(&str, &[&str]); 14] = [
    ("Introduction", &["introduce", "introduction", "overview", "begin", "start", "first"]),
    ("Methodology", &["method", "approach", "process", "procedure", "technique", "way"]),
    ("Results", &["result", "finding", "outcome", "data", "number", "percent", "show"]),
    ("Analysis", &["analysis", "analyze", "examine", "study", "investigate", "research"]),
    ("Discussion", &["discuss", "discussion", "consider", "important", "significant"]),
    ("Conclusion", &["conclusion", "conclude", "summary", "final", "end", "overall"]),
    ("Background", &["background", "history", "previous", "past", "context"]),
    ("Objectives", &["objective", "goal", "aim", "purpose", "target", "intention"]),
    ("Benefits", &["benefit", "advantage", "positive", "improve", "better", "enhance"]),
    ("Challenges", &["challenge", "problem", "issue", "difficulty", "obstacle", "barrier"]),
    ("Features", &["feature", "characteristic", "aspect", "element", "component"]),
    ("Requirements", &["requirement", "need", "must", "should", "necessary", "essential"]),
    ("Implementation", &["implement", "apply", "execute", "deploy", "use", "utilize"]),
    ("Performance", &["performance", "efficiency", "speed", "effectiveness", "quality"]),
];

// ------------------------------
// Structured-line cues
// ------------------------------

/// Inline value shapes that mark a line as data-bearing.
pub static DATA_LINE_CUES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"\d+%", r"\$\d+", r"\d+\.\d+", r"\d{4}", r"\w+@\w+"]
        .iter()
        .map(|pattern| compile(pattern))
        .collect()
});

// ------------------------------
// Dense domain families
// ------------------------------

/// `<qty> units of product code <CODE>`
pub static PRODUCT_QUANTITY: Lazy<Regex> = Lazy::new(|| {
    compile_ci(r"(\d{1,4}(?:,\d{3})*)\s+units?\s+of\s+product\s+code\s+([A-Z]{2,4}-\d{2,4})")
});

/// `<UNIT-ID> was recorded as/registered/had <temp>°C`
pub static VEHICLE_TEMPERATURE: Lazy<Regex> = Lazy::new(|| {
    compile(r"([A-Z]{3}-\d{4})\s+(?:was\s+recorded\s+as|registered|had)\s+(\d+\.?\d*°C)")
});

/// `RGN-xx received <qty> <PRODUCT>`
pub static REGION_DISTRIBUTION: Lazy<Regex> =
    Lazy::new(|| compile(r"(RGN-\d{2})\s+received\s+(\d+)\s+([A-Z]{3})"));

/// `<n> liters on March <day>`
pub static DAILY_FUEL: Lazy<Regex> =
    Lazy::new(|| compile(r"(\d+)\s+liters?\s+on\s+March\s+(\d+)(?:st|nd|rd|th)?"));

/// `<n> workers on March <day>`
pub static DAILY_WORKERS: Lazy<Regex> =
    Lazy::new(|| compile(r"(\d+)\s+workers?\s+(?:on\s+)?March\s+(\d+)(?:st|nd|rd|th)?"));

/// `<n> damaged cartons in <CODE> batch (<m> units lost)`
pub static DAMAGE_LOSS: Lazy<Regex> = Lazy::new(|| {
    compile_ci(
        r"(\d+)\s+damaged\s+cartons?\s+(?:were\s+noted\s+)?in\s+([A-Z]{3}-\d{3})\s+batch\s+\((?:estimated\s+|approx\.?\s*)?(\d+)\s+units?\s+lost\)",
    )
});

/// `<n> customer complaints ... ticket IDs: 1001, 1002, ...`
pub static COMPLAINT_TICKETS: Lazy<Regex> =
    Lazy::new(|| compile_ci(r"(\d+)\s+customer\s+complaints?.*?ticket\s+IDs?:\s+([\d,\s]+)"));

/// Four-digit ticket ids inside the complaint id list.
pub static TICKET_ID: Lazy<Regex> = Lazy::new(|| compile(r"\d{4}"));
