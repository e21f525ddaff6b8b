use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// 4-channel color in the output format's native channel order
/// (alpha, blue, green, red). Alpha 0 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssColor {
    pub alpha: u8,
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl AssColor {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha: 0,
            blue,
            green,
            red,
        }
    }

    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            blue,
            green,
            red,
        }
    }

    pub const WHITE: AssColor = AssColor::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: AssColor = AssColor::rgb(0x00, 0x00, 0x00);
    pub const YELLOW: AssColor = AssColor::rgb(0xFF, 0xFF, 0x00);

    /// Render as `&H` + 8 uppercase hex digits, alpha-blue-green-red.
    pub fn to_ass(self) -> String {
        format!(
            "&H{:02X}{:02X}{:02X}{:02X}",
            self.alpha, self.blue, self.green, self.red
        )
    }

    /// Parse either the native `&HAABBGGRR` form (6 hex digits are accepted
    /// as `BBGGRR` with opaque alpha) or the web `#RRGGBB` form.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if !value.is_ascii() {
            return Err(bad_color(value));
        }

        if let Some(hex) = value.strip_prefix("&H").or_else(|| value.strip_prefix("&h")) {
            return match hex.len() {
                8 => Ok(Self {
                    alpha: parse_channel(&hex[0..2], value)?,
                    blue: parse_channel(&hex[2..4], value)?,
                    green: parse_channel(&hex[4..6], value)?,
                    red: parse_channel(&hex[6..8], value)?,
                }),
                6 => Ok(Self {
                    alpha: 0,
                    blue: parse_channel(&hex[0..2], value)?,
                    green: parse_channel(&hex[2..4], value)?,
                    red: parse_channel(&hex[4..6], value)?,
                }),
                _ => Err(bad_color(value)),
            };
        }

        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() == 6 {
                return Ok(Self::rgb(
                    parse_channel(&hex[0..2], value)?,
                    parse_channel(&hex[2..4], value)?,
                    parse_channel(&hex[4..6], value)?,
                ));
            }
            return Err(bad_color(value));
        }

        Err(bad_color(value))
    }
}

fn parse_channel(hex: &str, full: &str) -> Result<u8, ConfigError> {
    u8::from_str_radix(hex, 16).map_err(|_| bad_color(full))
}

fn bad_color(value: &str) -> ConfigError {
    ConfigError::new(format!(
        "invalid color {:?}: expected #RRGGBB or &HAABBGGRR",
        value
    ))
}

impl TryFrom<String> for AssColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AssColor::parse(&value)
    }
}

impl From<AssColor> for String {
    fn from(color: AssColor) -> Self {
        color.to_ass()
    }
}

/// Screen anchor for a style, numpad layout: 1 = bottom-left, 5 = center,
/// 9 = top-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    BottomLeft,
    BottomCenter,
    BottomRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    TopLeft,
    TopCenter,
    TopRight,
}

impl Alignment {
    /// Numeric alignment code written into the style line.
    pub fn code(self) -> u8 {
        match self {
            Alignment::BottomLeft => 1,
            Alignment::BottomCenter => 2,
            Alignment::BottomRight => 3,
            Alignment::MiddleLeft => 4,
            Alignment::MiddleCenter => 5,
            Alignment::MiddleRight => 6,
            Alignment::TopLeft => 7,
            Alignment::TopCenter => 8,
            Alignment::TopRight => 9,
        }
    }
}

/// Border rendering discriminator: outline + shadow, or an opaque box
/// behind the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BorderStyle {
    Outline,
    OpaqueBox,
}

impl BorderStyle {
    pub fn code(self) -> u8 {
        match self {
            BorderStyle::Outline => 1,
            BorderStyle::OpaqueBox => 3,
        }
    }
}

impl TryFrom<u8> for BorderStyle {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BorderStyle::Outline),
            3 => Ok(BorderStyle::OpaqueBox),
            other => Err(ConfigError::new(format!(
                "invalid border style {}: expected 1 (outline) or 3 (opaque box)",
                other
            ))),
        }
    }
}

impl From<BorderStyle> for u8 {
    fn from(style: BorderStyle) -> Self {
        style.code()
    }
}

/// Entrance animation applied to the first event of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    #[default]
    None,
    FadeIn,
    SlideUp,
    ScaleIn,
    Bounce,
    Pulse,
    TypeWriter,
}

/// Karaoke word-highlight settings for a style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSpec {
    pub enabled: bool,
    pub color: AssColor,
    pub bold: bool,
}

impl Default for HighlightSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            color: AssColor::YELLOW,
            bold: true,
        }
    }
}

/// Full styling record for one subtitle style block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub font_family: String,
    pub font_size: u32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
    pub primary_color: AssColor,
    pub outline_color: AssColor,
    pub shadow_color: AssColor,
    pub background_color: AssColor,
    #[serde(alias = "position")]
    pub alignment: Alignment,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_vertical: u32,
    pub outline_width: f32,
    pub shadow_distance: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub letter_spacing: f32,
    pub rotation: f32,
    pub border_style: BorderStyle,
    pub all_caps: bool,
    pub animation: AnimationStyle,
    pub fade_in_duration: f32,
    pub fade_out_duration: f32,
    pub highlight: HighlightSpec,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 30,
            bold: false,
            italic: false,
            underline: false,
            strikeout: false,
            primary_color: AssColor::WHITE,
            outline_color: AssColor::BLACK,
            shadow_color: AssColor::argb(0x80, 0x00, 0x00, 0x00),
            background_color: AssColor::BLACK,
            alignment: Alignment::BottomCenter,
            margin_left: 20,
            margin_right: 20,
            margin_vertical: 40,
            outline_width: 2.0,
            shadow_distance: 2.0,
            scale_x: 100.0,
            scale_y: 100.0,
            letter_spacing: 0.0,
            rotation: 0.0,
            border_style: BorderStyle::Outline,
            all_caps: false,
            animation: AnimationStyle::None,
            fade_in_duration: 0.0,
            fade_out_duration: 0.0,
            highlight: HighlightSpec::default(),
        }
    }
}
