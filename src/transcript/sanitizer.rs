use super::types::TranscribedWord;
use log::warn;
use std::fmt;

/// Why a word was rejected during sanitization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedWordReason {
    EmptyText,
    EndNotAfterStart,
    NegativeStart,
}

impl fmt::Display for MalformedWordReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedWordReason::EmptyText => write!(f, "empty text"),
            MalformedWordReason::EndNotAfterStart => write!(f, "end not after start"),
            MalformedWordReason::NegativeStart => write!(f, "negative start time"),
        }
    }
}

/// Diagnostic record for a word dropped from grouping
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedWord {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub reason: MalformedWordReason,
}

impl fmt::Display for MalformedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dropped word {:?} [{}-{}]: {}",
            self.text, self.start, self.end, self.reason
        )
    }
}

/// Drop malformed words and canonicalize the survivors.
///
/// Word text is trimmed once here; recognizers such as WhisperX emit tokens
/// with leading spaces. A bad word never aborts the job, the rest of its
/// segment keeps rendering.
pub fn sanitize_words(words: &[TranscribedWord]) -> (Vec<TranscribedWord>, Vec<MalformedWord>) {
    let mut kept = Vec::with_capacity(words.len());
    let mut dropped = Vec::new();

    for word in words {
        let text = word.text.trim();

        let reason = if text.is_empty() {
            Some(MalformedWordReason::EmptyText)
        } else if !word.start.is_finite() || word.start < 0.0 {
            Some(MalformedWordReason::NegativeStart)
        } else if !word.end.is_finite() || word.end <= word.start {
            Some(MalformedWordReason::EndNotAfterStart)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                let diag = MalformedWord {
                    text: word.text.clone(),
                    start: word.start,
                    end: word.end,
                    reason,
                };
                warn!("{}", diag);
                dropped.push(diag);
            }
            None => kept.push(TranscribedWord {
                text: text.to_string(),
                start: word.start,
                end: word.end,
                speaker: word.speaker.clone(),
            }),
        }
    }

    (kept, dropped)
}
