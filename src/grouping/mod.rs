mod grouper;
mod types;

pub use grouper::{group_words, MAX_SENTENCE_WORDS, SENTENCE_TERMINATORS};
pub use types::{DisplayUnit, GroupingMode};
