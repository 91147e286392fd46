//! Turning one pairwise preference into per-file score contributions.
//!
//! A judgment arrives as the raw slider value for a sampled pair: negative
//! prefers the first file, positive the second, zero means no preference.
//! `normalize` folds the sign into the preferred/rejected roles, then
//! `score_vector` spreads the preference across every known file,
//! weighted by compression similarity: files that compress well with the
//! preferred file are pushed up, files close to the rejected file are
//! pushed down. The ranking becomes a distance-weighted aggregation of
//! all judgments rather than a simple pairwise tournament.

use crate::compress::SizeCache;
use crate::constants::MAX_STRENGTH;
use crate::distance::similarity;
use crate::types::{FileEntry, FileId, Judgment, ScoreVector};

/// Normalize a raw slider value into a directed judgment.
///
/// Returns `None` for a zero (or NaN) value — not an error, just a
/// no-preference submission that records nothing. A negative value means
/// `a` is preferred, a positive one `b`; the resulting strength is always
/// strictly positive and clamped to [`MAX_STRENGTH`].
pub fn normalize(a: FileId, b: FileId, raw_strength: f64) -> Option<Judgment> {
    if raw_strength == 0.0 || raw_strength.is_nan() {
        return None;
    }
    let (preferred, rejected, strength) = if raw_strength < 0.0 {
        (a, b, -raw_strength)
    } else {
        (b, a, raw_strength)
    };
    Some(Judgment {
        preferred,
        rejected,
        strength: strength.min(MAX_STRENGTH),
    })
}

/// Compute the contribution vector for one judgment over all known files.
///
/// For every file *i* (the judged pair included):
///
/// ```text
/// v[i] = strength * (similarity(preferred, i) - similarity(rejected, i))
/// ```
///
/// The caller must have run `cache.ensure(files)` first so every solo
/// size comes from the same baseline.
pub fn score_vector(
    preferred: &FileEntry,
    rejected: &FileEntry,
    strength: f64,
    files: &[FileEntry],
    cache: &SizeCache,
) -> ScoreVector {
    let entries = files
        .iter()
        .map(|f| {
            let sim_preferred = similarity(cache, preferred, f);
            let sim_rejected = similarity(cache, rejected, f);
            (f.id, strength * (sim_preferred - sim_rejected))
        })
        .collect();
    ScoreVector::new(entries)
}
