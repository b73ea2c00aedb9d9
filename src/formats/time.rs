/// Render an elapsed duration in seconds as a SubRip timestamp,
/// `HH:MM:SS,mmm`.
///
/// `format_srt_time(3.89)` -> `"00:00:03,890"`.
///
/// The millisecond field is rounded half away from zero at the third
/// digit. A fraction that rounds up to 1.000 carries into the seconds
/// field, so `59.9996` renders as `"00:01:00,000"`. Hours grow past 24
/// for long inputs instead of wrapping.
pub fn format_srt_time(seconds: f64) -> String {
    let clamped = seconds.max(0.0);
    let mut whole = clamped.trunc() as i64;
    let mut milli = (clamped.fract() * 1000.0).round() as i64;
    if milli >= 1000 {
        whole += 1;
        milli -= 1000;
    }

    let sec = whole % 60;
    let total_minutes = whole / 60;
    let min = total_minutes % 60;
    let hour = total_minutes / 60;

    format!("{hour:02}:{min:02}:{sec:02},{milli:03}")
}
