use super::types::{DisplayUnit, GroupingMode};
use crate::transcript::TranscribedWord;
use log::debug;

/// Characters that close a sentence-mode unit when a word ends with one
pub const SENTENCE_TERMINATORS: [char; 5] = ['.', '!', '?', ':', ';'];

/// Upper bound on sentence length; closes runaway sentences with no
/// terminator in sight
pub const MAX_SENTENCE_WORDS: usize = 50;

/// Partition a word sequence into display units.
///
/// With speaker detection disabled every speaker id is cleared first, so
/// downstream style resolution sees anonymous words. With it enabled the
/// sequence is split into speaker-contiguous runs before windowing; a unit
/// never mixes speakers.
pub fn group_words(
    words: &[TranscribedWord],
    mode: GroupingMode,
    speaker_detection: bool,
) -> Vec<DisplayUnit> {
    if words.is_empty() {
        return Vec::new();
    }

    let words: Vec<TranscribedWord> = if speaker_detection {
        words.to_vec()
    } else {
        words
            .iter()
            .map(|w| TranscribedWord {
                speaker: None,
                ..w.clone()
            })
            .collect()
    };

    let mut units = Vec::new();
    for run in speaker_runs(&words, speaker_detection) {
        match mode {
            GroupingMode::WordCount(n) => group_fixed(run, n, &mut units),
            GroupingMode::Sentence => group_sentences(run, &mut units),
        }
    }

    debug!("Grouped {} words into {} units", words.len(), units.len());
    units
}

/// Split into maximal runs sharing one speaker id. Without speaker detection
/// the whole sequence is a single run.
fn speaker_runs(words: &[TranscribedWord], speaker_detection: bool) -> Vec<&[TranscribedWord]> {
    if !speaker_detection {
        return vec![words];
    }

    let mut runs = Vec::new();
    let mut run_start = 0;
    for i in 1..words.len() {
        if words[i].speaker != words[run_start].speaker {
            runs.push(&words[run_start..i]);
            run_start = i;
        }
    }
    runs.push(&words[run_start..]);
    runs
}

fn group_fixed(run: &[TranscribedWord], n: usize, units: &mut Vec<DisplayUnit>) {
    for window in run.chunks(n.max(1)) {
        if let Some(unit) = DisplayUnit::new(window.to_vec()) {
            units.push(unit);
        }
    }
}

fn group_sentences(run: &[TranscribedWord], units: &mut Vec<DisplayUnit>) {
    let mut buffer: Vec<TranscribedWord> = Vec::new();

    for word in run {
        buffer.push(word.clone());

        let ends_sentence = word
            .text
            .trim()
            .ends_with(|c| SENTENCE_TERMINATORS.contains(&c));

        if ends_sentence || buffer.len() >= MAX_SENTENCE_WORDS {
            if let Some(unit) = DisplayUnit::new(std::mem::take(&mut buffer)) {
                units.push(unit);
            }
        }
    }

    // Flush words after the last terminator
    if let Some(unit) = DisplayUnit::new(buffer) {
        units.push(unit);
    }
}
