use crate::errors::ConfigError;
use crate::grouping::GroupingMode;
use crate::style::{auto_speaker_styles, StyleCatalog, StyleSpec};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Word counts at or above this value mean whole-sentence grouping. Kept for
/// callers that speak the integer sentinel instead of `"full_sentence"`.
pub const SENTENCE_MODE_THRESHOLD: u64 = 999;

/// Full configuration for one subtitle-generation job
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSubtitleConfig")]
pub struct SubtitleConfig {
    pub grouping: GroupingMode,
    pub enable_speaker_detection: bool,
    pub enable_word_highlighting: bool,
    pub output_srt: bool,
    pub default_style: Option<StyleSpec>,
    pub speaker_styles: BTreeMap<String, StyleSpec>,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            grouping: GroupingMode::WordCount(4),
            enable_speaker_detection: false,
            enable_word_highlighting: true,
            output_srt: false,
            default_style: Some(StyleSpec::default()),
            speaker_styles: BTreeMap::new(),
        }
    }
}

impl SubtitleConfig {
    /// Parse a configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::new(e.to_string()))
    }

    /// The immutable style lookup used for one document build.
    pub fn catalog(&self) -> StyleCatalog {
        StyleCatalog::new(self.default_style.clone(), self.speaker_styles.clone())
    }

    /// Enable speaker detection and assign palette-colored styles to the
    /// given speakers. Explicitly configured speaker styles win.
    pub fn with_auto_speaker_styles(mut self, speakers: &[String]) -> Self {
        self.enable_speaker_detection = true;
        if self.speaker_styles.is_empty() {
            self.speaker_styles = auto_speaker_styles(speakers);
        }
        self
    }
}

/// Accepted JSON shape, matching what the configuration/API layer sends
#[derive(Debug, Deserialize)]
struct RawSubtitleConfig {
    #[serde(default = "default_max_words")]
    max_words: MaxWords,
    #[serde(default)]
    enable_speaker_detection: bool,
    #[serde(default = "default_true")]
    enable_word_highlighting: bool,
    #[serde(default)]
    output_srt: bool,
    #[serde(default = "default_style")]
    default_style: Option<StyleSpec>,
    #[serde(default)]
    speakers: Vec<RawSpeakerConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MaxWords {
    Count(u64),
    Sentinel(String),
}

#[derive(Debug, Deserialize)]
struct RawSpeakerConfig {
    speaker_id: String,
    #[serde(flatten)]
    style: StyleSpec,
}

fn default_max_words() -> MaxWords {
    MaxWords::Count(4)
}

fn default_true() -> bool {
    true
}

fn default_style() -> Option<StyleSpec> {
    Some(StyleSpec::default())
}

impl TryFrom<RawSubtitleConfig> for SubtitleConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSubtitleConfig) -> Result<Self, Self::Error> {
        let grouping = match raw.max_words {
            MaxWords::Count(0) => {
                return Err(ConfigError::new("max_words must be a positive integer"));
            }
            MaxWords::Count(n) if n >= SENTENCE_MODE_THRESHOLD => GroupingMode::Sentence,
            MaxWords::Count(n) => GroupingMode::WordCount(n as usize),
            MaxWords::Sentinel(s) if s == "full_sentence" => GroupingMode::Sentence,
            MaxWords::Sentinel(s) => {
                return Err(ConfigError::new(format!(
                    "invalid max_words value {:?}: expected a positive integer or \"full_sentence\"",
                    s
                )));
            }
        };

        let mut speaker_styles = BTreeMap::new();
        for speaker in raw.speakers {
            if speaker_styles
                .insert(speaker.speaker_id.clone(), speaker.style)
                .is_some()
            {
                return Err(ConfigError::new(format!(
                    "duplicate speaker id {:?}",
                    speaker.speaker_id
                )));
            }
        }

        Ok(Self {
            grouping,
            enable_speaker_detection: raw.enable_speaker_detection,
            enable_word_highlighting: raw.enable_word_highlighting,
            output_srt: raw.output_srt,
            default_style: raw.default_style,
            speaker_styles,
        })
    }
}
