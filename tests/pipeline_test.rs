use karasub::document::write_text_file;
use karasub::{render_documents, GroupingMode, SubtitleConfig, Transcript};
use regex::Regex;

fn example_transcript() -> Transcript {
    serde_json::from_str(
        r#"{
            "segments": [
                {"words": [
                    {"text": "NO", "start": 0.12, "end": 0.50},
                    {"text": "NECESITO", "start": 0.50, "end": 0.79},
                    {"text": "TU", "start": 1.20, "end": 1.35},
                    {"text": "AYUDA", "start": 1.35, "end": 1.68}
                ]}
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_worked_example_renders_byte_exact_document() {
    let transcript = example_transcript();
    let config = SubtitleConfig::default();

    let output = render_documents(&transcript, &config).unwrap();

    let expected = "\
[Script Info]
Title: Word-by-Word Subtitles
ScriptType: v4.00+
WrapStyle: 0
ScaledBorderAndShadow: yes
PlayResX: 1280
PlayResY: 720
YCbCr Matrix: None

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,30,&H00FFFFFF,&H000000FF,&H00000000,&H80000000,0,0,0,0,100,100,0,0,1,2,2,2,20,20,40,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.12,0:00:00.50,Default,,0,0,0,,{\\b1}{\\c&H0000FFFF}NO{\\c&H00FFFFFF}{\\b0} NECESITO TU AYUDA
Dialogue: 0,0:00:00.50,0:00:01.20,Default,,0,0,0,,NO {\\b1}{\\c&H0000FFFF}NECESITO{\\c&H00FFFFFF}{\\b0} TU AYUDA
Dialogue: 0,0:00:01.20,0:00:01.35,Default,,0,0,0,,NO NECESITO {\\b1}{\\c&H0000FFFF}TU{\\c&H00FFFFFF}{\\b0} AYUDA
Dialogue: 0,0:00:01.35,0:00:01.68,Default,,0,0,0,,NO NECESITO TU {\\b1}{\\c&H0000FFFF}AYUDA{\\c&H00FFFFFF}{\\b0}
";

    assert_eq!(output.ass, expected);
    assert!(output.srt.is_none());
    assert!(output.dropped_words.is_empty());
}

#[test]
fn test_rendering_is_deterministic() {
    let transcript = example_transcript();
    let mut config = SubtitleConfig::default();
    config.output_srt = true;

    let first = render_documents(&transcript, &config).unwrap();
    let second = render_documents(&transcript, &config).unwrap();

    assert_eq!(first.ass, second.ass);
    assert_eq!(first.srt, second.srt);
}

#[test]
fn test_empty_transcript_yields_default_only_document() {
    let transcript = Transcript::default();
    let mut config = SubtitleConfig::default();
    config.output_srt = true;

    let output = render_documents(&transcript, &config).unwrap();

    assert_eq!(output.document.styles.len(), 1);
    assert_eq!(output.document.styles[0].name, "Default");
    assert!(output.document.events.is_empty());
    assert!(!output.ass.contains("Dialogue:"));
    assert_eq!(output.srt.as_deref(), Some(""));
}

#[test]
fn test_disabling_highlighting_collapses_unit_to_one_event() {
    let transcript = example_transcript();
    let mut config = SubtitleConfig::default();
    config.enable_word_highlighting = false;

    let output = render_documents(&transcript, &config).unwrap();

    assert_eq!(output.document.events.len(), 1);
    let event = &output.document.events[0];
    assert_eq!(event.text, "NO NECESITO TU AYUDA");
    assert!(output
        .ass
        .contains("Dialogue: 0,0:00:00.12,0:00:01.68,Default,,0,0,0,,NO NECESITO TU AYUDA"));
}

#[test]
fn test_malformed_word_is_dropped_and_unit_still_renders() {
    let transcript: Transcript = serde_json::from_str(
        r#"{
            "segments": [
                {"words": [
                    {"text": "good", "start": 0.0, "end": 0.4},
                    {"text": "bad", "start": 1.0, "end": 0.5},
                    {"text": "fine", "start": 0.8, "end": 1.2}
                ]}
            ]
        }"#,
    )
    .unwrap();

    let output = render_documents(&transcript, &SubtitleConfig::default()).unwrap();

    assert_eq!(output.dropped_words.len(), 1);
    assert_eq!(output.dropped_words[0].text, "bad");
    assert_eq!(output.document.events.len(), 2);
    assert!(output.ass.contains("good"));
    assert!(output.ass.contains("fine"));
    assert!(!output.ass.contains("bad"));
}

#[test]
fn test_speaker_styles_and_srt_projection() {
    let transcript: Transcript = serde_json::from_str(
        r#"{
            "segments": [
                {"words": [
                    {"text": "hola", "start": 0.0, "end": 0.4, "speaker": "SPEAKER_00"},
                    {"text": "mundo", "start": 0.4, "end": 0.8, "speaker": "SPEAKER_00"},
                    {"text": "adios", "start": 1.0, "end": 1.5, "speaker": "SPEAKER_01"}
                ]}
            ]
        }"#,
    )
    .unwrap();

    let config = SubtitleConfig::from_json(
        r##"{
            "max_words": 4,
            "enable_speaker_detection": true,
            "output_srt": true,
            "speakers": [
                {"speaker_id": "SPEAKER_00", "primary_color": "#FF0000"},
                {"speaker_id": "SPEAKER_01", "primary_color": "#00FF00"}
            ]
        }"##,
    )
    .unwrap();

    let output = render_documents(&transcript, &config).unwrap();

    let names: Vec<&str> = output
        .document
        .styles
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Default", "Speaker_SPEAKER_00", "Speaker_SPEAKER_01"]
    );
    assert!(output.ass.contains(",Speaker_SPEAKER_00,"));
    assert!(output.ass.contains(",Speaker_SPEAKER_01,"));

    let srt = output.srt.unwrap();
    assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:00,800\n[SPEAKER_00] hola mundo\n"));
    assert!(srt.contains("2\n00:00:01,000 --> 00:00:01,500\n[SPEAKER_01] adios\n"));
}

#[test]
fn test_sentence_mode_end_to_end() {
    let transcript: Transcript = serde_json::from_str(
        r#"{
            "segments": [
                {"words": [
                    {"text": "First", "start": 0.0, "end": 0.3},
                    {"text": "sentence.", "start": 0.3, "end": 0.7},
                    {"text": "Second", "start": 1.0, "end": 1.3},
                    {"text": "one", "start": 1.3, "end": 1.6}
                ]}
            ]
        }"#,
    )
    .unwrap();

    let config = SubtitleConfig::from_json(
        r#"{"max_words": "full_sentence", "enable_word_highlighting": false}"#,
    )
    .unwrap();
    assert_eq!(config.grouping, GroupingMode::Sentence);

    let output = render_documents(&transcript, &config).unwrap();
    // Two units: terminator-closed and trailing flush
    assert_eq!(output.document.events.len(), 2);
    assert_eq!(output.document.events[0].text, "First sentence.");
    assert_eq!(output.document.events[1].text, "Second one");
}

#[test]
fn test_every_dialogue_line_is_well_formed() {
    let transcript = example_transcript();
    let output = render_documents(&transcript, &SubtitleConfig::default()).unwrap();

    let dialogue = Regex::new(r"^Dialogue: 0,\d+:\d{2}:\d{2}\.\d{2},\d+:\d{2}:\d{2}\.\d{2},[^,]+,,0,0,0,,.+$")
        .unwrap();
    let mut count = 0;
    for line in output.ass.lines().filter(|l| l.starts_with("Dialogue:")) {
        assert!(dialogue.is_match(line), "malformed line: {}", line);
        count += 1;
    }
    assert_eq!(count, 4);
}

#[test]
fn test_written_files_round_trip() {
    let transcript = example_transcript();
    let mut config = SubtitleConfig::default();
    config.output_srt = true;

    let output = render_documents(&transcript, &config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let ass_path = dir.path().join("example.ass");
    let srt_path = dir.path().join("example.srt");

    write_text_file(&ass_path, &output.ass).unwrap();
    write_text_file(&srt_path, output.srt.as_deref().unwrap()).unwrap();

    assert_eq!(std::fs::read_to_string(&ass_path).unwrap(), output.ass);
    assert_eq!(
        std::fs::read_to_string(&srt_path).unwrap(),
        output.srt.unwrap()
    );
}
