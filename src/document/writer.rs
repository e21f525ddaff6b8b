use super::utils::format_srt_time;
use crate::grouping::DisplayUnit;
use std::fs;
use std::io;
use std::path::Path;

/// Render the plain timed-text projection: numbered unit-level entries with
/// no per-word highlighting splits. Speaker ids become a `[speaker]` prefix.
pub fn render_srt(units: &[DisplayUnit]) -> String {
    let mut out = String::new();

    for (i, unit) in units.iter().enumerate() {
        let prefix = match unit.speaker() {
            Some(speaker) => format!("[{}] ", speaker),
            None => String::new(),
        };
        out.push_str(&format!(
            "{}\n{} --> {}\n{}{}\n\n",
            i + 1,
            format_srt_time(unit.start()),
            format_srt_time(unit.end()),
            prefix,
            unit.text()
        ));
    }

    out
}

/// Write a rendered document to disk. The only I/O in the crate; the
/// rendering stages themselves never touch the filesystem.
pub fn write_text_file(path: impl AsRef<Path>, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}
