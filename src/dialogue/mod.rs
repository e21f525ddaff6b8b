mod builder;
mod tags;
mod time;

pub use builder::{build_unit_events, DialogueEvent};
pub use tags::{animation_tags, highlight_close_tags, highlight_open_tags};
pub use time::format_ass_time;
