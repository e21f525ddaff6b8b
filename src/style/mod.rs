mod builder;
mod catalog;
mod palette;
mod types;

pub use builder::style_line;
pub use catalog::{speaker_style_name, ResolvedStyle, StyleCatalog, DEFAULT_STYLE_NAME};
pub use palette::{auto_speaker_styles, preset_style, preset_names, SPEAKER_PALETTE};
pub use types::{Alignment, AnimationStyle, AssColor, BorderStyle, HighlightSpec, StyleSpec};
