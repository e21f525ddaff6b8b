use super::types::{AnimationStyle, AssColor, BorderStyle, StyleSpec};
use std::collections::BTreeMap;

/// Distinct, readable colors assigned to auto-detected speakers, in
/// assignment order. More speakers than entries cycle the palette so output
/// stays deterministic.
pub const SPEAKER_PALETTE: [AssColor; 10] = [
    AssColor::rgb(0xFF, 0x00, 0x00), // red
    AssColor::rgb(0x00, 0xFF, 0x00), // green
    AssColor::rgb(0x00, 0x00, 0xFF), // blue
    AssColor::rgb(0xFF, 0xFF, 0x00), // yellow
    AssColor::rgb(0xFF, 0x00, 0xFF), // magenta
    AssColor::rgb(0x00, 0xFF, 0xFF), // cyan
    AssColor::rgb(0xFF, 0x80, 0x40), // orange
    AssColor::rgb(0xFF, 0x00, 0x80), // purple
    AssColor::rgb(0x80, 0xFF, 0x00), // lime
    AssColor::rgb(0x00, 0x80, 0xFF), // pink
];

/// Build per-speaker styles for a list of detected speaker ids.
///
/// Slightly larger bold text with a thicker outline than the default style,
/// each speaker in its own palette color.
pub fn auto_speaker_styles(speakers: &[String]) -> BTreeMap<String, StyleSpec> {
    speakers
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let style = StyleSpec {
                font_size: 32,
                bold: true,
                outline_width: 3.0,
                primary_color: SPEAKER_PALETTE[i % SPEAKER_PALETTE.len()],
                ..StyleSpec::default()
            };
            (id.clone(), style)
        })
        .collect()
}

/// Names of the built-in presets.
pub fn preset_names() -> &'static [&'static str] {
    &[
        "tiktok_classic",
        "youtube_viral",
        "instagram_reel",
        "podcast_clean",
        "gaming_streamer",
        "minimalist",
        "news_documentary",
        "retro_vintage",
    ]
}

/// Look up a named preset style.
pub fn preset_style(name: &str) -> Option<StyleSpec> {
    let base = StyleSpec::default();

    let style = match name {
        // Bold Impact with a black outline
        "tiktok_classic" => StyleSpec {
            font_family: "Impact".to_string(),
            font_size: 48,
            bold: true,
            all_caps: true,
            outline_width: 3.0,
            ..base
        },
        // Eye-catching yellow text
        "youtube_viral" => StyleSpec {
            font_family: "Arial Black".to_string(),
            font_size: 48,
            bold: true,
            all_caps: true,
            primary_color: AssColor::YELLOW,
            outline_width: 3.0,
            ..base
        },
        // Soft wide outline standing in for a glow
        "instagram_reel" => StyleSpec {
            font_family: "Montserrat Black".to_string(),
            font_size: 44,
            bold: true,
            outline_width: 4.0,
            shadow_distance: 0.0,
            animation: AnimationStyle::FadeIn,
            fade_in_duration: 0.2,
            fade_out_duration: 0.2,
            ..base
        },
        // Clean and readable for long-form content
        "podcast_clean" => StyleSpec {
            font_family: "Arial".to_string(),
            font_size: 36,
            ..base
        },
        "gaming_streamer" => StyleSpec {
            font_family: "Bebas Neue".to_string(),
            font_size: 50,
            bold: true,
            all_caps: true,
            primary_color: AssColor::rgb(0x80, 0xFF, 0x00),
            outline_width: 3.0,
            ..base
        },
        "minimalist" => StyleSpec {
            font_family: "Helvetica".to_string(),
            font_size: 32,
            outline_width: 1.0,
            shadow_distance: 0.0,
            ..base
        },
        // Opaque background box behind the text
        "news_documentary" => StyleSpec {
            font_family: "Arial".to_string(),
            font_size: 34,
            border_style: BorderStyle::OpaqueBox,
            background_color: AssColor::argb(0x80, 0x00, 0x00, 0x00),
            shadow_distance: 0.0,
            ..base
        },
        "retro_vintage" => StyleSpec {
            font_family: "Oswald".to_string(),
            font_size: 42,
            italic: true,
            primary_color: AssColor::rgb(0xFF, 0x80, 0x40),
            ..base
        },
        _ => return None,
    };

    Some(style)
}
