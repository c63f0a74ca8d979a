//! Word statistics over dot-delimited segments.

/// Shortest/longest/average segment length for one input string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStats {
    /// Length of the shortest segment, in characters.
    pub shortest: i64,
    /// Length of the longest segment, in characters.
    pub longest: i64,
    /// Mean segment length, in characters.
    pub average: f64,
}

/// Computes segment-length statistics over a literal-`.` split.
///
/// This is deliberately not a tokenizer: the input is split on the `.`
/// character only, so a hostname label without dots is a single "word".
/// Splitting always yields at least one (possibly empty) segment, so the
/// average is defined for every input; `word_stats("")` is all zeros.
pub fn word_stats(text: &str) -> WordStats {
    let mut count: usize = 0;
    let mut total: usize = 0;
    let mut shortest = usize::MAX;
    let mut longest: usize = 0;

    for segment in text.split('.') {
        let len = segment.chars().count();
        count += 1;
        total += len;
        shortest = shortest.min(len);
        longest = longest.max(len);
    }

    WordStats {
        shortest: shortest as i64,
        longest: longest as i64,
        average: total as f64 / count as f64,
    }
}
