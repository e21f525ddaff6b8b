pub mod errors;
pub use errors::{ConfigError, KarasubError, KarasubResult};

pub mod transcript;
pub use transcript::{MalformedWord, TranscribedWord, Transcript, TranscriptSegment};

pub mod grouping;
pub use grouping::{DisplayUnit, GroupingMode};

pub mod timing;
pub use timing::WordInterval;

pub mod style;
pub use style::{Alignment, AssColor, StyleCatalog, StyleSpec};

pub mod dialogue;
pub use dialogue::DialogueEvent;

pub mod document;
pub use document::SubtitleDocument;

pub mod config;
pub use config::SubtitleConfig;

use log::info;

/// Everything produced for one job: the assembled document, its rendered
/// text, the optional plain timed-text export, and the words dropped during
/// sanitization
#[derive(Debug, Clone)]
pub struct SubtitleOutput {
    pub document: SubtitleDocument,
    pub ass: String,
    pub srt: Option<String>,
    pub dropped_words: Vec<MalformedWord>,
}

/// Sanitize and group a transcript into display units.
///
/// Grouping runs per segment, so units never span a segment boundary.
pub fn build_display_units(
    transcript: &Transcript,
    config: &SubtitleConfig,
) -> (Vec<DisplayUnit>, Vec<MalformedWord>) {
    let mut units = Vec::new();
    let mut dropped = Vec::new();

    for segment in &transcript.segments {
        let (words, mut bad) = transcript::sanitize_words(&segment.words);
        dropped.append(&mut bad);
        units.extend(grouping::group_words(
            &words,
            config.grouping,
            config.enable_speaker_detection,
        ));
    }

    (units, dropped)
}

/// Render all subtitle artifacts for one transcript.
///
/// A pure transformation: identical input always produces byte-identical
/// output, and independent jobs can run in parallel with no coordination.
pub fn render_documents(
    transcript: &Transcript,
    config: &SubtitleConfig,
) -> KarasubResult<SubtitleOutput> {
    info!(
        "Rendering subtitles: {} segments, {} words",
        transcript.segments.len(),
        transcript.word_count()
    );

    let (units, dropped_words) = build_display_units(transcript, config);
    let catalog = config.catalog();
    let document =
        document::assemble_document(&units, &catalog, config.enable_word_highlighting)?;

    let ass = document.to_ass();
    let srt = if config.output_srt {
        Some(document::render_srt(&units))
    } else {
        None
    };

    Ok(SubtitleOutput {
        document,
        ass,
        srt,
        dropped_words,
    })
}

/// Render only the tag-driven subtitle document text.
pub fn render_ass(transcript: &Transcript, config: &SubtitleConfig) -> KarasubResult<String> {
    Ok(render_documents(transcript, config)?.ass)
}
