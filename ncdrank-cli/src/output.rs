/// Output formatting: terminal table and JSON.
use std::collections::HashMap;

use ncdrank_core::{FileId, RankedFile};
use serde::Serialize;

#[derive(Serialize)]
struct JsonRankedFile {
    rank: usize,
    name: String,
    score: f64,
    judgments: usize,
}

#[derive(Serialize)]
struct JsonOutput {
    files: Vec<JsonRankedFile>,
    total_judgments: usize,
}

/// Number of judgments each file appeared in directly (as either side of
/// a judged pair).
pub fn judgment_counts(session: &ncdrank_core::RankSession) -> HashMap<FileId, usize> {
    let mut counts = HashMap::new();
    for record in session.history() {
        *counts.entry(record.judgment.preferred).or_insert(0) += 1;
        *counts.entry(record.judgment.rejected).or_insert(0) += 1;
    }
    counts
}

/// Print results as a formatted terminal table.
pub fn print_table(rankings: &[RankedFile], judged: &HashMap<FileId, usize>, total_judgments: usize) {
    // Find the widest file name for padding
    let name_width = rankings.iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "File"

    // Header
    println!(" # | {:<name_width$} |      Score | Judgments", "File");
    println!("---|-{}-|------------|----------", "-".repeat(name_width));

    // Rows
    for (i, r) in rankings.iter().enumerate() {
        let games = judged.get(&r.id).copied().unwrap_or(0);
        println!(
            "{:>2} | {:<name_width$} | {:>10.4} | {:>9}",
            i + 1, r.name, r.score, games,
        );
    }

    println!("\n{} files ranked from {} judgments", rankings.len(), total_judgments);
}

/// Print results as JSON.
pub fn print_json(rankings: &[RankedFile], judged: &HashMap<FileId, usize>, total_judgments: usize) {
    let files: Vec<JsonRankedFile> = rankings
        .iter()
        .enumerate()
        .map(|(i, r)| JsonRankedFile {
            rank: i + 1,
            name: r.name.clone(),
            score: r.score,
            judgments: judged.get(&r.id).copied().unwrap_or(0),
        })
        .collect();

    let output = JsonOutput {
        files,
        total_judgments,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
