use crate::style::{AnimationStyle, StyleSpec};

/// Inline tags opening a highlighted word: optional bold, then the
/// highlight color.
pub fn highlight_open_tags(spec: &StyleSpec) -> String {
    let mut tags = String::new();
    if spec.highlight.bold {
        tags.push_str("{\\b1}");
    }
    tags.push_str(&format!("{{\\c{}}}", spec.highlight.color.to_ass()));
    tags
}

/// Inline tags closing a highlighted word: restore the primary color, then
/// drop bold. Mirror order of the opening tags.
pub fn highlight_close_tags(spec: &StyleSpec) -> String {
    let mut tags = format!("{{\\c{}}}", spec.primary_color.to_ass());
    if spec.highlight.bold {
        tags.push_str("{\\b0}");
    }
    tags
}

/// Entrance animation tags for the first event of a unit. Empty when the
/// style has no animation or both fade durations are zero.
pub fn animation_tags(spec: &StyleSpec) -> String {
    if spec.animation == AnimationStyle::None {
        return String::new();
    }

    let fade_in = (spec.fade_in_duration * 1000.0) as i64;
    let fade_out = (spec.fade_out_duration * 1000.0) as i64;
    if fade_in == 0 && fade_out == 0 {
        return String::new();
    }

    let fad = format!("{{\\fad({},{})}}", fade_in, fade_out);

    match spec.animation {
        AnimationStyle::None => String::new(),
        AnimationStyle::FadeIn | AnimationStyle::TypeWriter => fad,
        AnimationStyle::SlideUp => {
            format!("{{\\move(320,400,320,350,0,{})}}{}", fade_in, fad)
        }
        AnimationStyle::ScaleIn => {
            format!(
                "{{\\t(0,{},\\fscx100\\fscy100)}}{{\\fscx50\\fscy50}}{}",
                fade_in, fad
            )
        }
        AnimationStyle::Bounce => {
            let step = fade_in / 3;
            format!(
                "{{\\t(0,{},\\fscx120\\fscy120)}}{{\\t({},{},\\fscx90\\fscy90)}}{{\\t({},{},\\fscx100\\fscy100)}}{}",
                step,
                step,
                step * 2,
                step * 2,
                fade_in,
                fad
            )
        }
        AnimationStyle::Pulse => {
            let half = fade_in / 2;
            format!(
                "{{\\t(0,{},\\fscx110\\fscy110)}}{{\\t({},{},\\fscx100\\fscy100)}}{}",
                half, half, fade_in, fad
            )
        }
    }
}
