mod assembler;
mod types;
mod utils;
mod writer;

pub use assembler::assemble_document;
pub use types::{StyleBlock, SubtitleDocument};
pub use utils::format_srt_time;
pub use writer::{render_srt, write_text_file};
