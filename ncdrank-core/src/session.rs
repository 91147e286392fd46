//! Session orchestrator: the surface the surrounding UI talks to.
//!
//! A session owns its file set, size cache, and judgment history
//! exclusively — nothing is shared across sessions. Exactly one judgment
//! is processed at a time: a `processing` flag is set before the
//! compression pass begins and cleared on every exit path, so callers can
//! gate concurrent submissions and present a waiting state.

use rand::Rng;
use thiserror::Error;

use crate::compress::SizeCache;
use crate::judgment::{normalize, score_vector};
use crate::pairing::sample_pair;
use crate::ranking::rank;
use crate::types::{FileEntry, FileId, JudgmentRecord, RankedFile};

/// Caller-facing failures. Numeric edge cases never appear here — they
/// are absorbed inside the distance engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Fewer than two files available when a pair was requested.
    #[error("need at least two files to compare, have {count}")]
    InsufficientFiles { count: usize },
    /// A judgment referenced a file id not in the current set.
    #[error("unknown file id {0}")]
    UnknownFile(FileId),
    /// A judgment was submitted while another was still being processed.
    #[error("a judgment is already being processed")]
    Busy,
}

/// Outcome of a judgment submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The judgment was recorded; here is the new ordering.
    Recorded(Vec<RankedFile>),
    /// Zero-strength submission: nothing was recorded, state unchanged.
    Noop,
}

/// One ranking session over a set of opaque files.
#[derive(Debug, Default)]
pub struct RankSession {
    files: Vec<FileEntry>,
    cache: SizeCache,
    history: Vec<JudgmentRecord>,
    next_id: u64,
    processing: bool,
}

impl RankSession {
    pub fn new() -> Self {
        RankSession::default()
    }

    /// Replace the working file set. Assigns fresh ids and invalidates
    /// the size cache. Existing history is kept; records for departed
    /// files simply stop contributing to the ranking.
    pub fn ingest_files(
        &mut self,
        raw_files: impl IntoIterator<Item = (String, Vec<u8>)>,
    ) -> Vec<FileId> {
        self.files.clear();
        self.extend_files(raw_files)
    }

    /// Add files to the working set without dropping the existing ones.
    /// Invalidates the size cache.
    pub fn extend_files(
        &mut self,
        raw_files: impl IntoIterator<Item = (String, Vec<u8>)>,
    ) -> Vec<FileId> {
        let mut added = Vec::new();
        for (name, content) in raw_files {
            let id = FileId(self.next_id);
            self.next_id += 1;
            self.files.push(FileEntry { id, name, content });
            added.push(id);
        }
        self.cache.invalidate();
        added
    }

    /// Draw the next pair to judge, using the thread-local generator.
    pub fn next_pair(&self) -> Result<(FileId, FileId), RankError> {
        self.next_pair_with(&mut rand::rng())
    }

    /// Draw the next pair to judge with a caller-provided generator
    /// (deterministic sessions, tests).
    pub fn next_pair_with(&self, rng: &mut impl Rng) -> Result<(FileId, FileId), RankError> {
        let (first, second) = sample_pair(self.files.len(), rng)?;
        Ok((self.files[first].id, self.files[second].id))
    }

    /// Submit one pairwise judgment and return the updated ordering.
    ///
    /// `raw_strength` follows the slider convention: negative prefers `a`,
    /// positive prefers `b`, zero records nothing. The size cache is
    /// re-checked (and rebuilt if the file set changed) before any
    /// similarity math runs, so stale sizes are never read.
    pub fn submit_judgment(
        &mut self,
        a: FileId,
        b: FileId,
        raw_strength: f64,
    ) -> Result<Submission, RankError> {
        if self.processing {
            return Err(RankError::Busy);
        }
        self.processing = true;
        let outcome = self.apply_judgment(a, b, raw_strength);
        self.processing = false;
        outcome
    }

    fn apply_judgment(
        &mut self,
        a: FileId,
        b: FileId,
        raw_strength: f64,
    ) -> Result<Submission, RankError> {
        self.entry(a)?;
        self.entry(b)?;

        let judgment = match normalize(a, b, raw_strength) {
            Some(j) => j,
            None => return Ok(Submission::Noop),
        };

        self.cache.ensure(&self.files);

        let preferred = self.entry(judgment.preferred)?;
        let rejected = self.entry(judgment.rejected)?;
        let vector = score_vector(preferred, rejected, judgment.strength, &self.files, &self.cache);

        self.history.push(JudgmentRecord { judgment, vector });
        Ok(Submission::Recorded(self.current_ranking()))
    }

    /// Read-only snapshot of the current ordering, best first.
    pub fn current_ranking(&self) -> Vec<RankedFile> {
        rank(&self.files, &self.history)
    }

    /// Files in ingestion order. The ranking never reorders this list.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Append-only judgment history.
    pub fn history(&self) -> &[JudgmentRecord] {
        &self.history
    }

    /// True while a judgment is being processed.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    fn entry(&self, id: FileId) -> Result<&FileEntry, RankError> {
        self.files
            .iter()
            .find(|f| f.id == id)
            .ok_or(RankError::UnknownFile(id))
    }
}
