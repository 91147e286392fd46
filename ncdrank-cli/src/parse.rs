/// Parsing of interactive judgment input.
///
/// One line per pair: a strength on the slider scale (-2 = strongly
/// prefer the left file, +2 = strongly prefer the right, fractions
/// allowed), `s` to skip the pair, `q` to finish the session.

/// Inclusive bound of the preference slider.
pub const STRENGTH_LIMIT: f64 = 2.0;

/// Outcome of parsing one line of judgment input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// A usable strength. Zero is valid input and means "no preference".
    Strength(f64),
    /// Skip this pair without recording anything.
    Skip,
    /// End the session and print the ranking.
    Quit,
    /// Unparseable or out of range; re-prompt.
    Invalid,
}

pub fn parse_verdict(input: &str) -> Verdict {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Verdict::Invalid;
    }
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Verdict::Quit;
    }
    if trimmed.eq_ignore_ascii_case("s") || trimmed.eq_ignore_ascii_case("skip") {
        return Verdict::Skip;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= STRENGTH_LIMIT => Verdict::Strength(v),
        _ => Verdict::Invalid,
    }
}
