use analysis_model::{TableSignal, TableSource};

/// Candidate cell separators, tried in this order; the order also breaks
/// consistency ties (first found wins).
const SEPARATORS: [&str; 7] = [",", "\t", "|", ";", ":", " - ", " | "];

/// Detect tabular layout expressed through a consistent separator.
///
/// A separator is accepted when the fraction of separator-bearing lines
/// whose occurrence count lies within ±1 of the mean exceeds 0.70. Rows are
/// then filtered to the modal column count; at least two consistent rows and
/// two columns are required. Confidence is the consistency ratio (0–1).
pub fn detect_table(text: &str) -> TableSignal {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut best: Option<(&'static str, f64)> = None;
    for sep in SEPARATORS {
        let counts: Vec<usize> = lines
            .iter()
            .filter(|line| line.contains(sep))
            .map(|line| line.matches(sep).count())
            .collect();
        if counts.is_empty() {
            continue;
        }
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let within = counts
            .iter()
            .filter(|&&count| (count as f64 - mean).abs() <= 1.0)
            .count();
        let consistency = within as f64 / counts.len() as f64;
        if consistency > 0.7 && mean > 0.0 {
            let better = match best {
                Some((_, current)) => consistency > current,
                None => true,
            };
            if better {
                best = Some((sep, consistency));
            }
        }
    }

    let Some((separator, consistency)) = best else {
        return TableSignal::not_found();
    };

    let table_lines: Vec<&&str> = lines.iter().filter(|line| line.contains(separator)).collect();
    if table_lines.len() < 2 {
        return TableSignal::not_found();
    }

    let rows: Vec<Vec<String>> = table_lines
        .iter()
        .map(|line| {
            line.split(separator)
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<String>>()
        })
        .filter(|row| row.len() > 1)
        .collect();
    if rows.is_empty() {
        return TableSignal::not_found();
    }

    let modal = modal_count(rows.iter().map(Vec::len));
    let mut consistent: Vec<Vec<String>> = rows.into_iter().filter(|row| row.len() == modal).collect();

    // Header plus at least one data row, at least two columns.
    if consistent.len() < 2 || modal < 2 {
        return TableSignal::not_found();
    }

    let header = consistent.remove(0);
    TableSignal::found(
        separator,
        header,
        consistent,
        consistency.min(1.0),
        TableSource::Detected,
    )
}

/// Most frequent value; frequency ties resolve to the numerically largest.
pub(crate) fn modal_count(counts: impl Iterator<Item = usize>) -> usize {
    let mut tally: Vec<(usize, usize)> = Vec::new();
    for count in counts {
        match tally.iter_mut().find(|(value, _)| *value == count) {
            Some((_, freq)) => *freq += 1,
            None => tally.push((count, 1)),
        }
    }
    tally
        .into_iter()
        .max_by_key(|&(value, freq)| (freq, value))
        .map(|(value, _)| value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_table_with_consistent_columns_is_detected() {
        let signal = detect_table("Name,Age,City\nAlice,30,NYC\nBob,25,LA");
        assert!(signal.is_table);
        assert_eq!(signal.separator, ",");
        assert_eq!(signal.header, vec!["Name", "Age", "City"]);
        assert_eq!(signal.num_rows, 2);
        assert_eq!(signal.num_columns, 3);
        assert!(signal.confidence > 0.8);
    }

    #[test]
    fn divergent_rows_are_dropped_by_the_modal_filter() {
        let signal = detect_table("a,b,c\n1,2,3\nodd,row\n4,5,6");
        assert!(signal.is_table);
        assert_eq!(signal.num_columns, 3);
        for row in &signal.rows {
            assert_eq!(row.len(), signal.num_columns);
        }
    }

    #[test]
    fn prose_without_separator_consistency_is_not_a_table() {
        let signal = detect_table("Just a sentence.\nAnd another one entirely.");
        assert!(!signal.is_table);
        assert_eq!(signal.confidence, 0.0);
    }

    #[test]
    fn modal_count_breaks_frequency_ties_upward() {
        assert_eq!(modal_count([2, 2, 3, 3].into_iter()), 3);
        assert_eq!(modal_count([4, 4, 4, 2].into_iter()), 4);
    }
}
