use std::env;
use std::io::Read;
use std::process::exit;

use analysis_model::{AnalysisResult, TableSource};
use text_analyzer::{analyze, reader};

fn print_usage() {
    eprintln!(
        "Usage:\n\
         analyzer-cli [FILE] [--encoding ENC] [--json | --report] [--top N]\n\
         \n\
         Reads FILE (or stdin when omitted), analyzes its structure and prints\n\
         either the full analysis record as JSON or a readable report.\n\
         \n\
         Options:\n\
           --encoding ENC  input encoding hint (utf-8, shift_jis, windows-1252,\n\
                           utf-16le, utf-16be); default utf-8\n\
           --json          print the analysis record as pretty JSON\n\
           --report        print a readable report (default)\n\
           --top N         number of format suggestions in the report (default 3)\n"
    );
}

fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut path: Option<String> = None;
    let mut encoding: Option<String> = None;
    let mut as_json = false;
    let mut top = 3usize;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--encoding" => {
                i += 1;
                match args.get(i) {
                    Some(value) => encoding = Some(value.clone()),
                    None => {
                        eprintln!("--encoding requires a value");
                        print_usage();
                        exit(2);
                    }
                }
            }
            "--json" => as_json = true,
            "--report" => as_json = false,
            "--top" => {
                i += 1;
                match args.get(i).and_then(|value| value.parse::<usize>().ok()) {
                    Some(value) => top = value,
                    None => {
                        eprintln!("--top requires a number");
                        print_usage();
                        exit(2);
                    }
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            flag if flag.starts_with('-') => {
                eprintln!("unknown option: {flag}");
                print_usage();
                exit(2);
            }
            other => {
                if path.is_some() {
                    eprintln!("only one input file is supported");
                    print_usage();
                    exit(2);
                }
                path = Some(other.to_string());
            }
        }
        i += 1;
    }

    let text = match &path {
        Some(path) => match reader::read_text_file(path, encoding.as_deref()) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("{err}");
                exit(1);
            }
        },
        None => {
            let mut buffer = Vec::new();
            if let Err(err) = std::io::stdin().read_to_end(&mut buffer) {
                eprintln!("failed to read stdin: {err}");
                exit(1);
            }
            reader::decode_bytes(&buffer, encoding.as_deref())
        }
    };

    let result = analyze(&text);

    if as_json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize analysis: {err}");
                exit(1);
            }
        }
    } else {
        print_report(&result, top);
    }
}

fn print_report(result: &AnalysisResult, top: usize) {
    println!("Content type : {}", result.content_type.as_str());
    println!("Confidence   : {:.0}/100", result.confidence);

    let stats = &result.structure.stats;
    println!(
        "Stats        : {} lines, {} words, {} sentences, readability {:.1}",
        stats.lines, stats.words, stats.sentences, stats.readability_score
    );

    let table = &result.structure.table_data;
    if table.is_table {
        println!(
            "Table        : {} columns x {} rows (separator {:?}, {}, confidence {:.2})",
            table.num_columns,
            table.num_rows,
            table.separator,
            source_label(table.source),
            table.confidence
        );
    }
    if !result.structure.headings.is_empty() {
        println!("Headings     : {}", result.structure.headings.len());
        for heading in result.structure.headings.iter().take(5) {
            println!("  {}{}", "  ".repeat(heading.level.saturating_sub(1) as usize), heading.text);
        }
    }
    if !result.structure.lists.is_empty() {
        let items: usize = result.structure.lists.iter().map(|g| g.items.len()).sum();
        println!("Lists        : {} group(s), {} item(s)", result.structure.lists.len(), items);
    }
    if result.structure.json_data.is_json {
        println!("JSON         : valid input");
    }

    if !result.suggestions.is_empty() {
        println!("Suggested formats:");
        for suggestion in result.suggestions.iter().take(top) {
            println!("  {:>3}  {:<14} {}", suggestion.score, suggestion.format.label(), suggestion.reason);
        }
    }

    println!("generated_on : {}", now_iso());
}

fn source_label(source: TableSource) -> &'static str {
    match source {
        TableSource::Detected => "detected",
        TableSource::AiExtracted => "ai_extracted",
        TableSource::KeyValueExtracted => "key_value_extracted",
        TableSource::PatternExtracted => "pattern_extracted",
    }
}
