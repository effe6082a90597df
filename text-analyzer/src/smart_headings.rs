use analysis_model::{Heading, HeadingKind};

use crate::heading_detect::word_count;
use crate::patterns::{
    LOGISTICS_TITLE_CUE, SECTION_RULES, THEME_TABLE, TOPIC_WORDS, WAREHOUSE_TITLE_CUE,
};

type Strategy = fn(&str, &[&str], &[&str]) -> Vec<Heading>;

/// Fallback strategies in priority order; the first non-empty result wins.
const STRATEGIES: [Strategy; 4] = [
    dense_section_headings,
    first_sentence_headings,
    theme_headings,
    last_resort_headings,
];

/// Synthesize headings for text where no natural heading was found.
pub fn generate_smart_headings(text: &str, lines: &[&str]) -> Vec<Heading> {
    let paragraphs: Vec<&str> = text.split("\n\n").collect();
    STRATEGIES
        .iter()
        .map(|strategy| strategy(text, &paragraphs, lines))
        .find(|headings| !headings.is_empty())
        .unwrap_or_default()
}

/// Strategy 1: match the dense-prose section catalogue; with two or more
/// hits, prepend a document-level title picked by keyword vote.
fn dense_section_headings(text: &str, _paragraphs: &[&str], _lines: &[&str]) -> Vec<Heading> {
    let mut headings: Vec<Heading> = SECTION_RULES
        .iter()
        .filter(|rule| rule.regex.is_match(text))
        .map(|rule| {
            Heading::generated(rule.heading, rule.level, 0, HeadingKind::TopicExtracted, rule.confidence)
        })
        .collect();

    if headings.len() > 1 {
        let title = if WAREHOUSE_TITLE_CUE.is_match(text) {
            "Warehouse Operations Report"
        } else if LOGISTICS_TITLE_CUE.is_match(text) {
            "Logistics Summary"
        } else {
            "Operations Report"
        };
        headings.insert(0, Heading::generated(title, 1, 0, HeadingKind::TopicExtracted, 0.9));
    }
    headings
}

/// Strategy 2: promote a paragraph's first sentence when it reads like a
/// topic line.
fn first_sentence_headings(_text: &str, paragraphs: &[&str], lines: &[&str]) -> Vec<Heading> {
    let mut headings = Vec::new();
    for paragraph in paragraphs {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        let Some(first_sentence) = paragraph.split('.').map(str::trim).find(|s| !s.is_empty())
        else {
            continue;
        };
        if could_be_heading(first_sentence, paragraph) {
            let line_number = find_line_number(first_sentence, lines);
            headings.push(Heading::generated(
                first_sentence,
                2,
                line_number,
                HeadingKind::AiGenerated,
                0.7,
            ));
        }
    }
    headings
}

fn could_be_heading(sentence: &str, paragraph: &str) -> bool {
    if word_count(sentence) > 12 {
        return false;
    }

    let sentence_chars = sentence.chars().count();
    let remaining: String = paragraph.chars().skip(sentence_chars).collect();
    let remaining = remaining.trim();

    // Much shorter than the body it opens.
    if (sentence_chars as f64) < remaining.chars().count() as f64 * 0.3 {
        return true;
    }

    let lower = sentence.to_lowercase();
    if TOPIC_WORDS.iter().any(|word| lower.contains(word)) {
        return true;
    }

    // No terminal punctuation while body text follows.
    !sentence.ends_with('.') && !remaining.is_empty()
}

/// Strategy 3: per-paragraph theme vote; needs at least three paragraphs.
fn theme_headings(_text: &str, paragraphs: &[&str], _lines: &[&str]) -> Vec<Heading> {
    if paragraphs.len() <= 2 {
        return Vec::new();
    }
    let mut headings = Vec::new();
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if paragraph.trim().is_empty() {
            continue;
        }
        if let Some(theme) = identify_paragraph_theme(paragraph) {
            headings.push(Heading::generated(theme, 2, i * 2, HeadingKind::ContentBased, 0.7));
        }
    }
    headings
}

fn identify_paragraph_theme(paragraph: &str) -> Option<&'static str> {
    let lowered = paragraph.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let mut best: Option<(&'static str, usize)> = None;
    for (theme, keywords) in THEME_TABLE {
        let score = words.iter().filter(|word| keywords.contains(word)).count();
        if score > 0 && best.map_or(true, |(_, current)| score > current) {
            best = Some((theme, score));
        }
    }
    best.map(|(theme, _)| theme)
}

/// Strategy 4: synthesize a title from the first substantial line, plus one
/// section heading per remaining paragraph when more than two exist.
fn last_resort_headings(_text: &str, paragraphs: &[&str], lines: &[&str]) -> Vec<Heading> {
    let mut headings = Vec::new();

    let Some(first_line) = lines.iter().map(|l| l.trim()).find(|l| l.chars().count() > 10)
    else {
        return headings;
    };
    headings.push(Heading::generated(
        smart_title(first_line),
        1,
        0,
        HeadingKind::AutoGenerated,
        0.6,
    ));

    if paragraphs.len() > 2 {
        for (i, paragraph) in paragraphs.iter().enumerate().skip(1) {
            if paragraph.trim().is_empty() {
                continue;
            }
            let mut section_title = format!("Section {i}");
            if paragraph.chars().count() > 20 {
                let picked: Vec<&str> = paragraph
                    .split_whitespace()
                    .take(5)
                    .filter(|word| word.chars().count() > 3 && word.chars().all(char::is_alphabetic))
                    .collect();
                if !picked.is_empty() {
                    section_title = title_case_words(&picked[..picked.len().min(3)]);
                }
            }
            let line_number = find_paragraph_line(paragraph, lines);
            headings.push(Heading::generated(
                section_title,
                2,
                line_number,
                HeadingKind::SectionGenerated,
                0.5,
            ));
        }
    }
    headings
}

/// Build a title: drop a leading article, cap at 8 words with an ellipsis,
/// and capitalize when the line starts lowercase.
fn smart_title(first_line: &str) -> String {
    let mut title = first_line.trim().to_string();

    let lowered = title.to_lowercase();
    for prefix in ["the ", "a ", "an ", "this ", "that "] {
        if lowered.starts_with(prefix) {
            title = title[prefix.len()..].to_string();
            break;
        }
    }

    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() > 8 {
        title = format!("{}...", words[..8].join(" "));
    }

    match title.chars().next() {
        Some(first) if !first.is_uppercase() => capitalize(&title),
        _ => title,
    }
}

/// Uppercase the first char, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Each word capitalized, the rest lowercased.
fn title_case_words(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<String>>()
        .join(" ")
}

fn find_line_number(text: &str, lines: &[&str]) -> usize {
    lines.iter().position(|line| line.contains(text)).unwrap_or(0)
}

fn find_paragraph_line(paragraph: &str, lines: &[&str]) -> usize {
    let paragraph_start = paragraph.split('\n').next().unwrap_or("").trim();
    lines
        .iter()
        .position(|line| line.trim().contains(paragraph_start))
        .unwrap_or(0)
}
