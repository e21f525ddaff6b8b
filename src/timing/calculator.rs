use crate::grouping::DisplayUnit;

/// Shortest allowed highlight window in seconds. Guards against
/// zero/negative-length windows from noisy recognizer timestamps.
pub const MIN_HIGHLIGHT_SECONDS: f64 = 0.1;

/// Active highlight interval for one word within its display unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordInterval {
    /// Word index within the unit
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

/// Compute seamless per-word highlight intervals for a unit.
///
/// Each word stays highlighted until the next word starts, so the effect has
/// no flash or gap between words; the last word keeps its own end time.
/// Times are rounded to centiseconds, the output format's native resolution.
pub fn word_intervals(unit: &DisplayUnit) -> Vec<WordInterval> {
    let words = unit.words();
    let mut intervals = Vec::with_capacity(words.len());

    for (index, word) in words.iter().enumerate() {
        let start = round_centis(word.start);
        let mut end = match words.get(index + 1) {
            Some(next) => round_centis(next.start),
            None => round_centis(word.end),
        };

        if end - start < MIN_HIGHLIGHT_SECONDS {
            end = start + MIN_HIGHLIGHT_SECONDS;
        }

        intervals.push(WordInterval { index, start, end });
    }

    intervals
}

/// Round to 2 decimal places, half away from zero.
fn round_centis(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
