use super::tags::{animation_tags, highlight_close_tags, highlight_open_tags};
use super::time::format_ass_time;
use crate::grouping::DisplayUnit;
use crate::style::ResolvedStyle;
use crate::timing::WordInterval;
use serde::Serialize;

/// One timed, styled line of subtitle text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogueEvent {
    pub start: f64,
    pub end: f64,
    pub style: String,
    pub text: String,
}

impl DialogueEvent {
    /// Render the full `Dialogue:` line. Layer is always 0; the name field
    /// stays empty and per-event margins stay 0 so the style's margins apply.
    pub fn to_ass_line(&self) -> String {
        format!(
            "Dialogue: 0,{},{},{},,0,0,0,,{}",
            format_ass_time(self.start),
            format_ass_time(self.end),
            self.style,
            self.text
        )
    }
}

/// Build the dialogue events for one display unit.
///
/// With highlighting active the same line is emitted once per word, each
/// copy time-boxed to that word's interval with only the active word
/// wrapped in highlight markup; the per-word re-emission is what drives the
/// karaoke effect. With highlighting off the unit collapses into a single
/// flat event spanning its own start/end.
pub fn build_unit_events(
    unit: &DisplayUnit,
    intervals: &[WordInterval],
    style: ResolvedStyle<'_>,
    highlighting_enabled: bool,
) -> Vec<DialogueEvent> {
    let spec = style.spec;
    let highlight = highlighting_enabled && spec.highlight.enabled;
    let entrance = animation_tags(spec);

    let rendered_words: Vec<String> = unit
        .words()
        .iter()
        .map(|w| {
            let text = if spec.all_caps {
                w.text.to_uppercase()
            } else {
                w.text.clone()
            };
            escape_text(&text)
        })
        .collect();

    if !highlight {
        let text = rendered_words.join(" ");
        return vec![DialogueEvent {
            start: unit.start(),
            end: unit.end(),
            style: style.name.to_string(),
            text: format!("{}{}", entrance, text),
        }];
    }

    let open = highlight_open_tags(spec);
    let close = highlight_close_tags(spec);

    intervals
        .iter()
        .map(|interval| {
            let line: Vec<String> = rendered_words
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    if i == interval.index {
                        format!("{}{}{}", open, word, close)
                    } else {
                        word.clone()
                    }
                })
                .collect();

            // Entrance animation decorates only the unit's first event
            let prefix = if interval.index == 0 { entrance.as_str() } else { "" };

            DialogueEvent {
                start: interval.start,
                end: interval.end,
                style: style.name.to_string(),
                text: format!("{}{}", prefix, line.join(" ")),
            }
        })
        .collect()
}

/// Escape literal newlines into the format's hard line break.
fn escape_text(text: &str) -> String {
    text.replace('\n', "\\N")
}
