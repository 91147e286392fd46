//! Compressed-size computation and the per-session size cache.
//!
//! All distance math in this crate runs on the gzip-compressed lengths of
//! file contents and pairwise concatenations. Solo sizes are memoized per
//! `FileId` because every judgment reads them once per file; concatenation
//! sizes depend on a pair and are recomputed on demand.

use std::collections::HashMap;
use std::io::Write;

use flate2::{write::GzEncoder, Compression};

use crate::types::{FileEntry, FileId};

/// Returns the gzip-compressed size of `data` in bytes.
///
/// Empty input is defined as size 0. Encoder errors are not expected for
/// in-memory writes; should one occur the raw length is used instead.
pub fn compressed_len(data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }
    let mut enc = GzEncoder::new(Vec::new(), Compression::best());
    if enc.write_all(data).is_ok() {
        enc.finish().map(|v| v.len()).unwrap_or(data.len())
    } else {
        data.len()
    }
}

/// Memo of solo compressed sizes for the current file set.
///
/// The cache must never be read against a different file set than the one
/// it was built for: `ensure` checks membership and rebuilds when the set
/// has changed. `rebuild` is idempotent — calling it twice against the
/// same files produces the same cache.
#[derive(Debug, Default)]
pub struct SizeCache {
    sizes: HashMap<FileId, usize>,
}

impl SizeCache {
    pub fn new() -> Self {
        SizeCache::default()
    }

    /// True when the cache does not exactly cover `files`.
    pub fn is_stale(&self, files: &[FileEntry]) -> bool {
        self.sizes.len() != files.len() || files.iter().any(|f| !self.sizes.contains_key(&f.id))
    }

    /// Recompute every solo size from scratch.
    pub fn rebuild(&mut self, files: &[FileEntry]) {
        self.sizes.clear();
        for f in files {
            self.sizes.insert(f.id, compressed_len(&f.content));
        }
    }

    /// Rebuild only if stale. Safe to call repeatedly.
    pub fn ensure(&mut self, files: &[FileEntry]) {
        if self.is_stale(files) {
            self.rebuild(files);
        }
    }

    /// Drop all memoized sizes (the file set changed).
    pub fn invalidate(&mut self) {
        self.sizes.clear();
    }

    /// Solo compressed size of `file`, from the memo when present.
    ///
    /// Falls back to computing on the fly for an uncached entry; the
    /// result is identical either way since compression is deterministic.
    pub fn size_of(&self, file: &FileEntry) -> usize {
        self.sizes
            .get(&file.id)
            .copied()
            .unwrap_or_else(|| compressed_len(&file.content))
    }

    /// Compressed size of `content(a) || content(b)`, in that exact order.
    ///
    /// Order matters: compression is not guaranteed symmetric. Never
    /// cached — the value depends on a pair, not a single file.
    pub fn size_of_concat(&self, a: &FileEntry, b: &FileEntry) -> usize {
        let mut joined = Vec::with_capacity(a.content.len() + b.content.len());
        joined.extend_from_slice(&a.content);
        joined.extend_from_slice(&b.content);
        compressed_len(&joined)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
