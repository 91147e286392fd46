//! Normalized compression distance and its reciprocal similarity score.
//!
//! The distance between two files is approximated from how well gzip
//! exploits redundancy between them:
//!
//! ```text
//! ncd = (C(ab) - min(C(a), C(b))) / max(C(a), C(b))
//! similarity = 1 / ncd
//! ```
//!
//! where `C(·)` is a compressed size and `ab` the concatenation. Files
//! that compress well together (shared redundancy) yield a small distance
//! and a large similarity, with no semantic understanding of the content.
//!
//! Degenerate numeric cases never escape this module: both results are
//! always finite, never NaN.

use crate::compress::SizeCache;
use crate::constants::MAX_SIMILARITY;
use crate::types::FileEntry;

/// Normalized compression distance from raw sizes.
///
/// When both solo sizes are 0 (two empty files) the inputs are
/// indistinguishable and the distance is defined as 0.
pub fn ncd_from_sizes(ca: usize, cb: usize, cab: usize) -> f64 {
    let ca = ca as f64;
    let cb = cb as f64;
    let max_c = ca.max(cb);
    if max_c == 0.0 {
        return 0.0;
    }
    (cab as f64 - ca.min(cb)) / max_c
}

/// Reciprocal-of-NCD similarity from raw sizes.
///
/// - distance <= 0 (duplicates, fully-redundant content, or compressor
///   artifacts) → [`MAX_SIMILARITY`];
/// - otherwise `1 / ncd`, capped at [`MAX_SIMILARITY`] so the sentinel is
///   the single maximal value the engine ever produces. Values above 1
///   are legitimate and common for related files.
pub fn similarity_from_sizes(ca: usize, cb: usize, cab: usize) -> f64 {
    let d = ncd_from_sizes(ca, cb, cab);
    if d <= 0.0 {
        MAX_SIMILARITY
    } else {
        (1.0 / d).min(MAX_SIMILARITY)
    }
}

/// Normalized compression distance between two files.
pub fn ncd(cache: &SizeCache, a: &FileEntry, b: &FileEntry) -> f64 {
    ncd_from_sizes(cache.size_of(a), cache.size_of(b), cache.size_of_concat(a, b))
}

/// Similarity score between two files. Always finite.
pub fn similarity(cache: &SizeCache, a: &FileEntry, b: &FileEntry) -> f64 {
    similarity_from_sizes(cache.size_of(a), cache.size_of(b), cache.size_of_concat(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileId;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn entry(id: u64, content: Vec<u8>) -> FileEntry {
        FileEntry {
            id: FileId(id),
            name: format!("file-{id}"),
            content,
        }
    }

    fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..len).map(|_| rng.random::<u8>()).collect()
    }

    #[test]
    fn both_empty_yields_sentinel_similarity() {
        assert_eq!(similarity_from_sizes(0, 0, 0), MAX_SIMILARITY);
    }

    #[test]
    fn zero_distance_clamps_to_sentinel() {
        // Concatenation compresses to exactly the smaller solo size.
        assert_eq!(similarity_from_sizes(100, 120, 100), MAX_SIMILARITY);
    }

    #[test]
    fn negative_distance_clamps_to_sentinel() {
        // Compressor artifact: concatenation below the smaller solo size.
        assert!(ncd_from_sizes(100, 120, 95) < 0.0);
        assert_eq!(similarity_from_sizes(100, 120, 95), MAX_SIMILARITY);
    }

    #[test]
    fn small_positive_distance_exceeds_one_without_upper_clamp() {
        // ncd = (110 - 100) / 100 = 0.1 → similarity 10.
        let s = similarity_from_sizes(100, 100, 110);
        assert!((s - 10.0).abs() < 1e-12);
        assert!(s > 1.0);
    }

    #[test]
    fn unrelated_sizes_give_similarity_near_one() {
        // ncd = (200 - 100) / 100 = 1.0 → similarity 1.
        let s = similarity_from_sizes(100, 100, 200);
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn similarity_is_always_finite() {
        for &(ca, cb, cab) in &[(0, 0, 0), (1, 1, 1), (50, 50, 40), (10, 1000, 10)] {
            let s = similarity_from_sizes(ca, cb, cab);
            assert!(s.is_finite(), "similarity({ca},{cb},{cab}) = {s}");
        }
    }

    #[test]
    fn self_similarity_is_defined_and_maximal_for_its_size_class() {
        let a = entry(1, random_bytes(1000, 11));
        let c = entry(2, random_bytes(1000, 99));
        let mut cache = SizeCache::new();
        cache.rebuild(&[a.clone(), c.clone()]);

        let self_sim = similarity(&cache, &a, &a);
        assert!(self_sim.is_finite());
        assert!(
            self_sim > similarity(&cache, &a, &c),
            "a file must be more similar to itself than to unrelated content"
        );
    }

    #[test]
    fn duplicate_content_beats_unrelated_content() {
        let a = entry(1, random_bytes(1000, 42));
        let b = entry(2, a.content.clone());
        let c = entry(3, random_bytes(1000, 1234));
        let mut cache = SizeCache::new();
        cache.rebuild(&[a.clone(), b.clone(), c.clone()]);

        let sim_ab = similarity(&cache, &a, &b);
        let sim_ac = similarity(&cache, &a, &c);
        let sim_bc = similarity(&cache, &b, &c);
        assert!(sim_ab > sim_ac, "sim(a,b)={sim_ab} should exceed sim(a,c)={sim_ac}");
        assert!(sim_ab > sim_bc, "sim(a,b)={sim_ab} should exceed sim(b,c)={sim_bc}");
    }

    #[test]
    fn distance_is_deterministic_across_calls() {
        let a = entry(1, random_bytes(500, 7));
        let b = entry(2, random_bytes(500, 8));
        let mut cache = SizeCache::new();
        cache.rebuild(&[a.clone(), b.clone()]);

        let first = ncd(&cache, &a, &b);
        for _ in 0..3 {
            assert_eq!(ncd(&cache, &a, &b), first);
        }
    }
}
