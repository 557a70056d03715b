//! Formatting of byte counts for preview metadata lines.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count for display (e.g., "500 B", "1.5 KB", "10 KB").
///
/// Scales by 1024 while the value is at least 1024 and a larger unit
/// remains. Bytes are shown without decimals; scaled values below 10 get
/// one decimal place, with a trailing `.0` dropped. Halves round up.
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        return format!("{} {}", bytes, UNITS[0]);
    }

    // `{:.N}` rounds ties to even; round half away from zero first
    let value = if size < 10.0 {
        let text = format!("{:.1}", (size * 10.0).round() / 10.0);
        match text.strip_suffix(".0") {
            Some(whole) => whole.to_string(),
            None => text,
        }
    } else {
        format!("{:.0}", size.round())
    };
    format!("{} {}", value, UNITS[unit])
}
