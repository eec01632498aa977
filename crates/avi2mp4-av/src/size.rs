//! Human-readable byte sizes.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with base-1024 units and two decimals.
///
/// GB is the largest unit; bigger sizes are shown as large GB values.
///
/// # Examples
///
/// ```
/// use avi2mp4_av::format_file_size;
///
/// assert_eq!(format_file_size(0), "0.00 B");
/// assert_eq!(format_file_size(1536), "1.50 KB");
/// assert_eq!(format_file_size(1_572_864), "1.50 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = UNITS[0];

    for &next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }

    format!("{:.2} {}", value, unit)
}
