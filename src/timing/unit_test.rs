use crate::grouping::DisplayUnit;
use crate::timing::{word_intervals, MIN_HIGHLIGHT_SECONDS};
use crate::transcript::TranscribedWord;

fn unit(words: Vec<TranscribedWord>) -> DisplayUnit {
    DisplayUnit::new(words).unwrap()
}

#[test]
fn test_seamless_intervals() {
    let unit = unit(vec![
        TranscribedWord::new("NO", 0.12, 0.50),
        TranscribedWord::new("NECESITO", 0.50, 0.79),
        TranscribedWord::new("TU", 1.20, 1.35),
        TranscribedWord::new("AYUDA", 1.35, 1.68),
    ]);

    let intervals = word_intervals(&unit);
    assert_eq!(intervals.len(), 4);

    assert_eq!(intervals[0].start, 0.12);
    assert_eq!(intervals[0].end, 0.50);
    // Second word stays lit across the pause until the third starts
    assert_eq!(intervals[1].start, 0.50);
    assert_eq!(intervals[1].end, 1.20);
    assert_eq!(intervals[2].start, 1.20);
    assert_eq!(intervals[2].end, 1.35);
    // Last word keeps its own end time
    assert_eq!(intervals[3].start, 1.35);
    assert_eq!(intervals[3].end, 1.68);

    for pair in intervals.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn test_rounding_to_centiseconds() {
    let unit = unit(vec![
        TranscribedWord::new("a", 0.123, 0.456),
        TranscribedWord::new("b", 0.456, 0.789),
    ]);

    let intervals = word_intervals(&unit);
    assert_eq!(intervals[0].start, 0.12);
    assert_eq!(intervals[0].end, 0.46);
    assert_eq!(intervals[1].start, 0.46);
    assert_eq!(intervals[1].end, 0.79);
}

#[test]
fn test_minimum_duration_floor() {
    // Zero-length and near-zero windows get pushed out to the floor
    let unit = unit(vec![
        TranscribedWord::new("blip", 1.00, 1.01),
        TranscribedWord::new("rest", 1.02, 1.50),
    ]);

    let intervals = word_intervals(&unit);
    assert_eq!(intervals[0].start, 1.00);
    assert_eq!(intervals[0].end, 1.00 + MIN_HIGHLIGHT_SECONDS);
    assert!(intervals[1].end - intervals[1].start >= MIN_HIGHLIGHT_SECONDS);
}

#[test]
fn test_single_word_unit() {
    let unit = unit(vec![TranscribedWord::new("solo", 2.0, 2.6)]);
    let intervals = word_intervals(&unit);

    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].index, 0);
    assert_eq!(intervals[0].start, 2.0);
    assert_eq!(intervals[0].end, 2.6);
}

#[test]
fn test_every_interval_meets_floor() {
    let unit = unit(vec![
        TranscribedWord::new("a", 0.00, 0.02),
        TranscribedWord::new("b", 0.03, 0.04),
        TranscribedWord::new("c", 0.05, 0.06),
    ]);

    for interval in word_intervals(&unit) {
        assert!(interval.end - interval.start >= MIN_HIGHLIGHT_SECONDS);
    }
}
