/// Format seconds as the dialogue clock `H:MM:SS.cc` (hours unpadded,
/// minutes/seconds/centiseconds zero-padded to 2 digits)
pub fn format_ass_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds.is_infinite() || seconds < 0.0 {
        return "0:00:00.00".to_string();
    }

    // Integer arithmetic on rounded centiseconds; truncating here reopens
    // the float artifacts the timing stage just rounded away
    let total_centis = (seconds * 100.0).round() as u64;
    let centis = total_centis % 100;
    let total_seconds = total_centis / 100;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{}:{:02}:{:02}.{:02}", hours, minutes, secs, centis)
}
