/// ncdrank-core: compression-distance ranking engine.
///
/// Ranks a collection of opaque binary files from a stream of pairwise
/// human preference judgments. No feature extraction, no semantic
/// understanding — similarity between files is inferred purely from how
/// well gzip exploits redundancy between their concatenated contents
/// (normalized compression distance). No IO, no terminal, no filesystem —
/// bring your own judge.
///
/// Files are identified by stable `FileId`s assigned at ingestion. All
/// recorded history is keyed by id, so the ranking can reorder its output
/// freely without invalidating earlier judgments.
///
/// # Quick start
///
/// ```rust
/// use ncdrank_core::{RankSession, Submission};
///
/// let mut session = RankSession::new();
/// let ids = session.ingest_files(vec![
///     ("notes-v1.txt".to_string(), b"draft of the notes".to_vec()),
///     ("notes-v2.txt".to_string(), b"draft of the notes, revised".to_vec()),
///     ("recipe.txt".to_string(), b"two cups of flour, one egg".to_vec()),
/// ]);
///
/// let (left, right) = session.next_pair().unwrap();
/// // ... show `left` and `right` to a human; negative prefers left,
/// // positive prefers right, zero records nothing ...
/// match session.submit_judgment(left, right, 2.0).unwrap() {
///     Submission::Recorded(ranking) => {
///         for r in &ranking {
///             println!("{}: {:.4}", r.name, r.score);
///         }
///     }
///     Submission::Noop => {}
/// }
/// # let _ = ids;
/// ```
pub mod compress;
pub mod constants;
pub mod distance;
pub mod judgment;
pub mod pairing;
pub mod ranking;
pub mod session;
pub mod types;

// Re-export primary public API at crate root.
pub use compress::{compressed_len, SizeCache};
pub use distance::{ncd, similarity};
pub use judgment::{normalize, score_vector};
pub use pairing::sample_pair;
pub use ranking::{aggregate_scores, rank};
pub use session::{RankError, RankSession, Submission};
pub use types::{FileEntry, FileId, Judgment, JudgmentRecord, RankedFile, ScoreVector};
