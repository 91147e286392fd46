//! Aggregation of judgment history into a total order.

use std::collections::HashMap;

use crate::types::{FileEntry, FileId, JudgmentRecord, RankedFile};

/// Sum every recorded contribution per currently-known file.
///
/// Files with no recorded contribution (added after the existing history)
/// default to 0. Contributions for files no longer in the set are ignored.
pub fn aggregate_scores(files: &[FileEntry], history: &[JudgmentRecord]) -> HashMap<FileId, f64> {
    let mut totals: HashMap<FileId, f64> = files.iter().map(|f| (f.id, 0.0)).collect();
    for record in history {
        for (id, value) in record.vector.iter() {
            if let Some(total) = totals.get_mut(&id) {
                *total += value;
            }
        }
    }
    totals
}

/// Produce the current ordering, descending by aggregate score.
///
/// The sort is stable, so exact ties keep their prior (ingestion) order
/// and never jump position on floating-point noise.
pub fn rank(files: &[FileEntry], history: &[JudgmentRecord]) -> Vec<RankedFile> {
    let totals = aggregate_scores(files, history);
    let mut ranked: Vec<RankedFile> = files
        .iter()
        .map(|f| RankedFile {
            id: f.id,
            name: f.name.clone(),
            score: totals.get(&f.id).copied().unwrap_or(0.0),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Judgment, ScoreVector};

    fn entry(id: u64) -> FileEntry {
        FileEntry {
            id: FileId(id),
            name: format!("file-{id}"),
            content: Vec::new(),
        }
    }

    fn record(preferred: u64, rejected: u64, entries: Vec<(u64, f64)>) -> JudgmentRecord {
        JudgmentRecord {
            judgment: Judgment {
                preferred: FileId(preferred),
                rejected: FileId(rejected),
                strength: 1.0,
            },
            vector: ScoreVector::new(entries.into_iter().map(|(id, v)| (FileId(id), v)).collect()),
        }
    }

    #[test]
    fn empty_history_ranks_in_ingestion_order() {
        let files = vec![entry(1), entry(2), entry(3)];
        let ranked = rank(&files, &[]);
        let ids: Vec<FileId> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![FileId(1), FileId(2), FileId(3)]);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn aggregate_is_the_componentwise_sum_of_history() {
        let files = vec![entry(1), entry(2)];
        let history = vec![
            record(1, 2, vec![(1, 0.5), (2, -0.5)]),
            record(1, 2, vec![(1, 0.25), (2, -1.0)]),
        ];
        let totals = aggregate_scores(&files, &history);
        assert_eq!(totals[&FileId(1)], 0.75);
        assert_eq!(totals[&FileId(2)], -1.5);

        // Removing one record subtracts exactly its vector.
        let shorter = aggregate_scores(&files, &history[..1]);
        assert_eq!(totals[&FileId(1)] - shorter[&FileId(1)], 0.25);
        assert_eq!(totals[&FileId(2)] - shorter[&FileId(2)], -1.0);
    }

    #[test]
    fn files_added_after_history_default_to_zero() {
        let files = vec![entry(1), entry(2), entry(3)];
        let history = vec![record(1, 2, vec![(1, 1.0), (2, -1.0)])];
        let totals = aggregate_scores(&files, &history);
        assert_eq!(totals[&FileId(3)], 0.0);
    }

    #[test]
    fn contributions_for_departed_files_are_ignored() {
        let files = vec![entry(1)];
        let history = vec![record(1, 2, vec![(1, 1.0), (2, -1.0), (9, 4.0)])];
        let totals = aggregate_scores(&files, &history);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&FileId(1)], 1.0);
    }

    #[test]
    fn ranking_is_descending_by_score() {
        let files = vec![entry(1), entry(2), entry(3)];
        let history = vec![record(2, 3, vec![(1, 0.2), (2, 2.0), (3, -2.0)])];
        let ranked = rank(&files, &history);
        let ids: Vec<FileId> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![FileId(2), FileId(1), FileId(3)]);
    }

    #[test]
    fn exact_ties_preserve_prior_order() {
        let files = vec![entry(1), entry(2), entry(3)];
        let history = vec![record(1, 3, vec![(1, 1.0), (2, 1.0), (3, -1.0)])];
        let ranked = rank(&files, &history);
        let ids: Vec<FileId> = ranked.iter().map(|r| r.id).collect();
        // Files 1 and 2 tie at 1.0; ingestion order wins.
        assert_eq!(ids, vec![FileId(1), FileId(2), FileId(3)]);
    }
}
