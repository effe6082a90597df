use analysis_model::{Heading, HeadingKind};

/// Scan lines for natural headings. Each line matches at most one rule;
/// markdown markers take priority over case-based rules.
pub fn detect_headings(lines: &[&str]) -> Vec<Heading> {
    let mut headings = Vec::new();
    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            let level = line.chars().take_while(|&c| c == '#').count() as u32;
            let text = line.trim_start_matches(|c| c == '#' || c == ' ').trim();
            headings.push(Heading::new(text, level, i, HeadingKind::Markdown));
        } else if is_title_case(line)
            && word_count(line) <= 8
            && line.chars().count() < 100
            && !line.ends_with('.')
        {
            headings.push(Heading::new(line, 1, i, HeadingKind::TitleCase));
        } else if is_all_uppercase(line)
            && word_count(line) <= 6
            && line.chars().count() < 80
            && !line.ends_with('.')
        {
            headings.push(Heading::new(line, 1, i, HeadingKind::Uppercase));
        }
    }
    headings
}

pub(crate) fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

/// Title case: every uppercase letter starts a word (follows an uncased
/// char), every lowercase letter continues one, and at least one cased
/// char exists.
pub(crate) fn is_title_case(s: &str) -> bool {
    let mut prev_cased = false;
    let mut has_cased = false;
    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            has_cased = true;
        } else if ch.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            has_cased = true;
        } else {
            prev_cased = false;
        }
    }
    has_cased
}

/// All cased chars are uppercase and at least one exists.
pub(crate) fn is_all_uppercase(s: &str) -> bool {
    let mut has_cased = false;
    for ch in s.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_levels_come_from_leading_hashes() {
        let lines = vec!["# Title", "Some text.", "## Section", "More text."];
        let headings = detect_headings(&lines);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].text, "Title");
        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[0].line_number, 0);
        assert_eq!(headings[1].text, "Section");
        assert_eq!(headings[1].level, 2);
        assert_eq!(headings[1].line_number, 2);
        assert!(headings.iter().all(|h| h.kind == HeadingKind::Markdown));
    }

    #[test]
    fn short_title_case_line_is_a_level_one_heading() {
        let headings = detect_headings(&["Quarterly Review Notes"]);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].kind, HeadingKind::TitleCase);
        assert_eq!(headings[0].level, 1);
    }

    #[test]
    fn uppercase_line_ending_in_period_is_not_a_heading() {
        assert!(detect_headings(&["FINAL WARNING."]).is_empty());
        assert_eq!(detect_headings(&["FINAL WARNING"]).len(), 1);
    }

    #[test]
    fn title_case_requires_word_initial_capitals() {
        assert!(is_title_case("Name,Age,City"));
        assert!(is_title_case("Hello World"));
        assert!(!is_title_case("Hello WOrld"));
        assert!(!is_title_case("hello world"));
        assert!(!is_title_case("123"));
    }
}
