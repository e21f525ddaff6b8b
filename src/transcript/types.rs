use serde::{Deserialize, Serialize};

/// One recognized word with its speech interval, as produced by the
/// word-level transcription collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscribedWord {
    #[serde(alias = "word")]
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl TranscribedWord {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }
}

/// A contiguous speech segment holding its word sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub words: Vec<TranscribedWord>,
}

/// Full transcription result for one media file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// All distinct speaker ids present in the transcript, in sorted order.
    pub fn speakers(&self) -> Vec<String> {
        let mut speakers: Vec<String> = self
            .segments
            .iter()
            .flat_map(|s| s.words.iter())
            .filter_map(|w| w.speaker.clone())
            .collect();
        speakers.sort();
        speakers.dedup();
        speakers
    }

    pub fn word_count(&self) -> usize {
        self.segments.iter().map(|s| s.words.len()).sum()
    }
}
