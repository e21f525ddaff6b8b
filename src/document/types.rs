use crate::dialogue::DialogueEvent;
use serde::Serialize;

/// One named style definition line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleBlock {
    pub name: String,
    pub line: String,
}

/// A fully assembled subtitle document: named style blocks (unique names)
/// followed by time-ordered dialogue events, each referencing a present
/// style
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubtitleDocument {
    pub styles: Vec<StyleBlock>,
    pub events: Vec<DialogueEvent>,
}

impl SubtitleDocument {
    /// Render the complete document text: script header, style section,
    /// event section. Byte-stable for identical input.
    pub fn to_ass(&self) -> String {
        let mut out = String::with_capacity(512 + self.events.len() * 96);

        out.push_str(SCRIPT_INFO_HEADER);
        out.push_str("[V4+ Styles]\n");
        out.push_str(STYLES_FORMAT);
        for style in &self.styles {
            out.push_str(&style.line);
            out.push('\n');
        }

        out.push_str("\n[Events]\n");
        out.push_str(EVENTS_FORMAT);
        for event in &self.events {
            out.push_str(&event.to_ass_line());
            out.push('\n');
        }

        out
    }
}

/// Fixed script header; resolution and wrap behavior the downstream
/// renderer expects.
pub(crate) const SCRIPT_INFO_HEADER: &str = "\
[Script Info]
Title: Word-by-Word Subtitles
ScriptType: v4.00+
WrapStyle: 0
ScaledBorderAndShadow: yes
PlayResX: 1280
PlayResY: 720
YCbCr Matrix: None

";

pub(crate) const STYLES_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n";

pub(crate) const EVENTS_FORMAT: &str = "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n";
