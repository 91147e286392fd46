use std::fmt;

/// Stable identity for a file within a ranking session.
///
/// Assigned once at ingestion and never reused. All recorded history is
/// keyed by `FileId`, never by a file's current display position — the
/// ranking reorders its output freely without invalidating old records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId(pub(crate) u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file under ranking: a name and an immutable byte sequence.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileEntry {
    pub id: FileId,
    pub name: String,
    /// Raw content. Never mutated after ingestion.
    pub content: Vec<u8>,
}

/// A single normalized pairwise preference.
///
/// `strength` is strictly positive and at most 2.0; the sign of the raw
/// input is purely directional and is folded into which file is
/// `preferred` (see `judgment::normalize`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Judgment {
    pub preferred: FileId,
    pub rejected: FileId,
    pub strength: f64,
}

/// Per-file score contributions produced by one judgment.
///
/// One entry per file known at record time, keyed by `FileId`. Files added
/// to the session later simply have no entry and contribute 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreVector {
    entries: Vec<(FileId, f64)>,
}

impl ScoreVector {
    pub fn new(entries: Vec<(FileId, f64)>) -> Self {
        ScoreVector { entries }
    }

    /// Contribution for `id`, 0.0 when this vector does not cover it.
    pub fn get(&self, id: FileId) -> f64 {
        self.entries
            .iter()
            .find(|(fid, _)| *fid == id)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FileId, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One element of the append-only judgment history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JudgmentRecord {
    pub judgment: Judgment,
    pub vector: ScoreVector,
}

/// Output row of the aggregator: a file and its total score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedFile {
    pub id: FileId,
    pub name: String,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_vector_defaults_to_zero_for_unknown_ids() {
        let v = ScoreVector::new(vec![(FileId(1), 0.5), (FileId(2), -0.25)]);
        assert_eq!(v.get(FileId(1)), 0.5);
        assert_eq!(v.get(FileId(2)), -0.25);
        assert_eq!(v.get(FileId(99)), 0.0);
    }

    #[test]
    fn score_vector_len_matches_entries() {
        let v = ScoreVector::new(vec![(FileId(1), 1.0)]);
        assert_eq!(v.len(), 1);
        assert!(!v.is_empty());
        assert!(ScoreVector::new(Vec::new()).is_empty());
    }
}
