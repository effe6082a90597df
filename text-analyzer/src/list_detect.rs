use analysis_model::{ListGroup, ListKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker patterns in priority order. The first entry is the only bullet
/// style; everything else counts as numbered.
static LIST_PATTERNS: Lazy<Vec<(Regex, ListKind)>> = Lazy::new(|| {
    vec![
        (compile(r"^\s*[-*+]\s+(.+)"), ListKind::Bullet),
        (compile(r"^\s*\d+\.\s+(.+)"), ListKind::Numbered),
        (compile(r"^\s*[a-zA-Z]\.\s+(.+)"), ListKind::Numbered),
        (compile(r"^\s*\(\d+\)\s+(.+)"), ListKind::Numbered),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("list marker pattern compiles")
}

/// Group consecutive list-marker lines.
///
/// Open groups close only on blank lines: a non-blank line that matches no
/// marker leaves the current group open, so prose interleaved with items
/// merges into the surrounding group (text continuity rule).
pub fn detect_lists(lines: &[&str]) -> Vec<ListGroup> {
    let mut groups: Vec<ListGroup> = Vec::new();
    let mut current: Option<ListGroup> = None;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            if let Some(group) = current.take() {
                groups.push(group);
            }
            continue;
        }

        for (pattern, kind) in LIST_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(line) {
                let group = current.get_or_insert_with(|| ListGroup {
                    kind: *kind,
                    items: Vec::new(),
                    start_line: i,
                });
                group.items.push(caps[1].to_string());
                break;
            }
        }
    }

    if let Some(group) = current {
        groups.push(group);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_run_forms_one_group() {
        let groups = detect_lists(&["- item one", "- item two", "- item three"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, ListKind::Bullet);
        assert_eq!(groups[0].items, vec!["item one", "item two", "item three"]);
        assert_eq!(groups[0].start_line, 0);
    }

    #[test]
    fn blank_line_closes_the_group() {
        let groups = detect_lists(&["1. first", "2. second", "", "3. third"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].items.len(), 1);
        assert_eq!(groups[1].start_line, 3);
    }

    #[test]
    fn interleaved_prose_leaves_the_group_open() {
        let groups = detect_lists(&["- alpha", "a plain continuation line", "- beta"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items, vec!["alpha", "beta"]);
    }

    #[test]
    fn group_kind_comes_from_the_first_matching_marker() {
        let groups = detect_lists(&["(1) one", "- dash item"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, ListKind::Numbered);
    }
}
