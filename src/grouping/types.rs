use crate::transcript::TranscribedWord;

/// How a word sequence is partitioned into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingMode {
    /// Non-overlapping windows of at most N words; the final window may be
    /// shorter.
    WordCount(usize),
    /// Accumulate until a word ends in a sentence terminator.
    Sentence,
}

/// One on-screen subtitle chunk: an ordered, non-empty word run
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUnit {
    words: Vec<TranscribedWord>,
}

impl DisplayUnit {
    /// Build a unit from a non-empty word run. Returns `None` for an empty
    /// run; units are never empty.
    pub fn new(words: Vec<TranscribedWord>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    pub fn words(&self) -> &[TranscribedWord] {
        &self.words
    }

    /// Number of words; at least 1 by construction.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Speech start of the unit: the first word's start.
    pub fn start(&self) -> f64 {
        self.words[0].start
    }

    /// Speech end of the unit: the last word's end.
    pub fn end(&self) -> f64 {
        self.words[self.words.len() - 1].end
    }

    /// Space-joined word texts in speech order.
    pub fn text(&self) -> String {
        let texts: Vec<&str> = self.words.iter().map(|w| w.text.as_str()).collect();
        texts.join(" ")
    }

    /// Speaker id of the unit: the first word's speaker.
    pub fn speaker(&self) -> Option<&str> {
        self.words[0].speaker.as_deref()
    }
}
