/// Sentinel similarity for degenerate compression distances.
///
/// The similarity score is the reciprocal of the normalized compression
/// distance, which is unbounded when the distance reaches zero (duplicate
/// or fully-redundant content) and meaningless when it goes negative
/// (compressor artifacts can make a concatenation compress below the
/// larger solo size). Both cases collapse to this large finite value so
/// that aggregate score sums always stay finite. It also serves as the
/// overall ceiling: no similarity the engine produces exceeds it.
pub const MAX_SIMILARITY: f64 = 1e6;

/// Maximum judgment strength after sign normalization.
///
/// Matches the original preference slider, which runs from -2 (strongly
/// prefer the first file) to +2 (strongly prefer the second). Raw inputs
/// with a larger magnitude are clamped rather than rejected.
pub const MAX_STRENGTH: f64 = 2.0;
