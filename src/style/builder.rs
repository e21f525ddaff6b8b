use super::types::{BorderStyle, StyleSpec};

/// SecondaryColour field value. Only consulted by the renderer for `\k`
/// karaoke fills, which this engine never emits.
const SECONDARY_COLOUR: &str = "&H000000FF";

/// Character encoding field value (1 = default charset).
const ENCODING: u8 = 1;

/// Build one `Style:` definition line in the V4+ field order.
///
/// Every numeric field is written even at its default; a missing field is a
/// format violation for downstream renderers.
pub fn style_line(name: &str, spec: &StyleSpec) -> String {
    // BackColour is what the renderer reads for the shadow with border
    // style 1 and for the box fill with border style 3.
    let back_colour = match spec.border_style {
        BorderStyle::Outline => spec.shadow_color,
        BorderStyle::OpaqueBox => spec.background_color,
    };

    format!(
        "Style: {},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        name,
        spec.font_family,
        spec.font_size,
        spec.primary_color.to_ass(),
        SECONDARY_COLOUR,
        spec.outline_color.to_ass(),
        back_colour.to_ass(),
        flag(spec.bold),
        flag(spec.italic),
        flag(spec.underline),
        flag(spec.strikeout),
        spec.scale_x,
        spec.scale_y,
        spec.letter_spacing,
        spec.rotation,
        spec.border_style.code(),
        spec.outline_width,
        spec.shadow_distance,
        spec.alignment.code(),
        spec.margin_left,
        spec.margin_right,
        spec.margin_vertical,
        ENCODING,
    )
}

fn flag(value: bool) -> u8 {
    if value {
        1
    } else {
        0
    }
}
