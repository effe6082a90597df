use std::collections::{BTreeMap, BTreeSet};

use analysis_model::{TableSignal, TableSource};

use crate::patterns::{
    COMPLAINT_TICKETS, DAILY_FUEL, DAILY_WORKERS, DAMAGE_LOSS, DATA_LINE_CUES, PRODUCT_QUANTITY,
    REGION_DISTRIBUTION, TICKET_ID, VEHICLE_TEMPERATURE,
};
use crate::table_detect::modal_count;

/// Separator characters whose combined count marks a line as structured.
const INLINE_SEPARATORS: [char; 5] = [',', ':', '-', '|', '\t'];

/// Separators tried when reshaping structured lines into a table.
const SPLIT_SEPARATORS: [&str; 6] = [",", ":", "-", "|", "\t", " - "];

/// Key-value separators in priority order.
const KEY_VALUE_SEPARATORS: [&str; 4] = [":", " - ", " = ", ": "];

/// Mine tabular structure out of prose; tried only after natural table
/// detection found nothing. Strategies run in order, first hit wins.
pub fn extract_potential_tables(text: &str, lines: &[&str]) -> Option<TableSignal> {
    structured_line_table(lines)
        .or_else(|| key_value_table(lines))
        .or_else(|| dense_pattern_table(text))
}

// ------------------------------
// Strategy 1: structured-line mining
// ------------------------------

fn structured_line_table(lines: &[&str]) -> Option<TableSignal> {
    let data_lines: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && looks_like_data_line(line))
        .collect();
    if data_lines.len() < 3 {
        return None;
    }

    let (header, rows, separator) = reshape_structured_lines(&data_lines)?;
    Some(TableSignal::found(separator, header, rows, 0.7, TableSource::AiExtracted))
}

/// A line "looks like data" when it mixes digits with letters and either
/// carries two separator chars or matches an inline value shape.
fn looks_like_data_line(line: &str) -> bool {
    let has_digit = line.chars().any(|c| c.is_ascii_digit());
    let has_alpha = line.chars().any(char::is_alphabetic);
    if !(has_digit && has_alpha) {
        return false;
    }

    let separator_count: usize = INLINE_SEPARATORS
        .iter()
        .map(|&sep| line.matches(sep).count())
        .sum();
    if separator_count >= 2 {
        return true;
    }

    DATA_LINE_CUES.iter().any(|cue| cue.is_match(line))
}

fn reshape_structured_lines(
    data_lines: &[&str],
) -> Option<(Vec<String>, Vec<Vec<String>>, &'static str)> {
    for separator in SPLIT_SEPARATORS {
        let split_lines: Vec<Vec<String>> = data_lines
            .iter()
            .map(|line| {
                line.split(separator)
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<String>>()
            })
            .filter(|parts| parts.len() >= 2)
            .collect();
        if split_lines.len() < 3 {
            continue;
        }

        let modal = modal_count(split_lines.iter().map(Vec::len));
        let mut consistent: Vec<Vec<String>> =
            split_lines.into_iter().filter(|parts| parts.len() == modal).collect();
        if consistent.len() < 3 {
            continue;
        }

        // The first line serves as header only when it is digit-free.
        let digit_free = consistent[0]
            .iter()
            .all(|cell| !cell.chars().any(|c| c.is_ascii_digit()));
        let header = if digit_free {
            consistent.remove(0)
        } else {
            (1..=modal).map(|i| format!("Column {i}")).collect()
        };
        return Some((header, consistent, separator));
    }
    None
}

// ------------------------------
// Strategy 2: key-value mining
// ------------------------------

fn key_value_table(lines: &[&str]) -> Option<TableSignal> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        for separator in KEY_VALUE_SEPARATORS {
            let Some((key, value)) = line.split_once(separator) else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            let valid = key.chars().count() < 50
                && value.chars().count() < 200
                && !key.is_empty()
                && !value.is_empty()
                && !key.chars().all(|c| c.is_ascii_digit());
            if valid {
                rows.push(vec![key.to_string(), value.to_string()]);
                break;
            }
        }
    }

    if rows.len() < 3 {
        return None;
    }
    Some(TableSignal::found(
        ":",
        vec!["Property".to_string(), "Value".to_string()],
        rows,
        0.6,
        TableSource::KeyValueExtracted,
    ))
}

// ------------------------------
// Strategy 3: dense domain families
// ------------------------------

struct ExtractedTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Run every domain family; keep the one that extracted the most rows
/// (earlier families win ties) and require at least three rows.
fn dense_pattern_table(text: &str) -> Option<TableSignal> {
    let families = [
        product_inventory(text),
        temperature_readings(text),
        regional_distribution(text),
        daily_operations(text),
        damage_report(text),
        customer_complaints(text),
    ];

    let mut best: Option<ExtractedTable> = None;
    for candidate in families.into_iter().flatten() {
        if best.as_ref().map_or(true, |b| candidate.rows.len() > b.rows.len()) {
            best = Some(candidate);
        }
    }

    let best = best?;
    if best.rows.len() < 3 {
        return None;
    }
    Some(TableSignal::found(
        "extracted",
        best.header,
        best.rows,
        0.8,
        TableSource::PatternExtracted,
    ))
}

fn product_inventory(text: &str) -> Option<ExtractedTable> {
    let rows: Vec<Vec<String>> = PRODUCT_QUANTITY
        .captures_iter(text)
        .map(|caps| vec![caps[2].to_string(), caps[1].to_string()])
        .collect();
    if rows.len() < 3 {
        return None;
    }
    Some(ExtractedTable {
        header: vec!["Product Code".to_string(), "Quantity (Units)".to_string()],
        rows,
    })
}

fn temperature_readings(text: &str) -> Option<ExtractedTable> {
    let rows: Vec<Vec<String>> = VEHICLE_TEMPERATURE
        .captures_iter(text)
        .map(|caps| vec![caps[1].to_string(), caps[2].to_string()])
        .collect();
    if rows.len() < 2 {
        return None;
    }
    Some(ExtractedTable {
        header: vec!["Vehicle/Unit ID".to_string(), "Temperature".to_string()],
        rows,
    })
}

/// Pivot `RGN-xx received <qty> <PRODUCT>` facts into one row per region
/// with a sorted product column set; missing cells read "0".
fn regional_distribution(text: &str) -> Option<ExtractedTable> {
    let matches: Vec<(String, String, String)> = REGION_DISTRIBUTION
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
        .collect();
    if matches.len() < 3 {
        return None;
    }

    let products: BTreeSet<String> =
        matches.iter().map(|(_, _, product)| product.clone()).collect();
    // Regions keep first-appearance order; repeated facts overwrite.
    let mut regions: Vec<(String, BTreeMap<String, String>)> = Vec::new();
    for (region, quantity, product) in matches {
        match regions.iter_mut().find(|(name, _)| *name == region) {
            Some((_, cells)) => {
                cells.insert(product, quantity);
            }
            None => {
                let mut cells = BTreeMap::new();
                cells.insert(product, quantity);
                regions.push((region, cells));
            }
        }
    }

    let mut header = vec!["Region".to_string()];
    header.extend(products.iter().cloned());
    let rows: Vec<Vec<String>> = regions
        .into_iter()
        .map(|(region, cells)| {
            let mut row = vec![region];
            row.extend(
                products
                    .iter()
                    .map(|product| cells.get(product).cloned().unwrap_or_else(|| "0".to_string())),
            );
            row
        })
        .collect();

    Some(ExtractedTable { header, rows })
}

/// Pivot per-day fuel and worker facts into a date-keyed series.
fn daily_operations(text: &str) -> Option<ExtractedTable> {
    let fuel: Vec<(String, String)> = DAILY_FUEL
        .captures_iter(text)
        .map(|caps| (caps[2].to_string(), caps[1].to_string()))
        .collect();
    let workers: Vec<(String, String)> = DAILY_WORKERS
        .captures_iter(text)
        .map(|caps| (caps[2].to_string(), caps[1].to_string()))
        .collect();
    if fuel.len() < 2 && workers.len() < 2 {
        return None;
    }

    // Day keys are numeric; sort them as numbers.
    let mut daily: BTreeMap<u32, (Option<String>, Option<String>)> = BTreeMap::new();
    for (day, liters) in fuel {
        if let Ok(day) = day.parse::<u32>() {
            daily.entry(day).or_default().0 = Some(liters);
        }
    }
    for (day, count) in workers {
        if let Ok(day) = day.parse::<u32>() {
            daily.entry(day).or_default().1 = Some(count);
        }
    }
    if daily.is_empty() {
        return None;
    }

    let rows: Vec<Vec<String>> = daily
        .into_iter()
        .map(|(day, (liters, count))| {
            vec![
                format!("March {day}"),
                liters.unwrap_or_else(|| "-".to_string()),
                count.unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    Some(ExtractedTable {
        header: vec!["Date".to_string(), "Fuel (Liters)".to_string(), "Workers".to_string()],
        rows,
    })
}

fn damage_report(text: &str) -> Option<ExtractedTable> {
    let rows: Vec<Vec<String>> = DAMAGE_LOSS
        .captures_iter(text)
        .map(|caps| vec![caps[2].to_string(), caps[1].to_string(), caps[3].to_string()])
        .collect();
    if rows.is_empty() {
        return None;
    }
    Some(ExtractedTable {
        header: vec![
            "Product Code".to_string(),
            "Damaged Cartons".to_string(),
            "Units Lost".to_string(),
        ],
        rows,
    })
}

fn customer_complaints(text: &str) -> Option<ExtractedTable> {
    let caps = COMPLAINT_TICKETS.captures(text)?;
    let id_list = caps.get(2)?.as_str();
    let tickets: Vec<&str> = TICKET_ID.find_iter(id_list).map(|m| m.as_str()).collect();
    if tickets.len() < 3 {
        return None;
    }
    Some(ExtractedTable {
        header: vec!["Ticket ID".to_string(), "Status".to_string()],
        rows: tickets
            .into_iter()
            .map(|ticket| vec![ticket.to_string(), "Delayed Delivery".to_string()])
            .collect(),
    })
}
