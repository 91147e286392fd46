//! Uniform random pair sampling for the next judgment request.

use rand::Rng;

use crate::session::RankError;

/// Draw an ordered pair of distinct indices, both uniform over `[0, n)`.
///
/// Stateless: every call re-samples, and nothing prevents a previously
/// judged pair from coming up again. Fails with
/// [`RankError::InsufficientFiles`] when fewer than two files exist.
///
/// The second index is drawn from `[0, n - 1)` and shifted past the first
/// when they collide, which keeps both draws uniform without rejection
/// loops.
pub fn sample_pair(num_files: usize, rng: &mut impl Rng) -> Result<(usize, usize), RankError> {
    if num_files < 2 {
        return Err(RankError::InsufficientFiles { count: num_files });
    }
    let first = rng.random_range(0..num_files);
    let mut second = rng.random_range(0..num_files - 1);
    if second >= first {
        second += 1;
    }
    Ok((first, second))
}
