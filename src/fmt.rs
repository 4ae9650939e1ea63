//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Chart emoji for report headers
pub const CHART: Emoji = Emoji("📊", "~");

/// Package emoji for bundle totals
pub const PACKAGE: Emoji = Emoji("📦", "#");

/// Format a byte count as a human-readable size string
///
/// Fractional inputs are supported; sub-kilobyte values print as whole
/// bytes.
///
/// # Examples
///
/// ```
/// use bundle_diff::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512.0), "512 B");
/// assert_eq!(format_bytes(1024.0), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576.0), "1.00 MB");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    if bytes >= MB {
        format!("{:.2} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes / KB)
    } else {
        format!("{:.0} B", bytes)
    }
}

/// Format a signed byte delta with an explicit sign prefix
///
/// # Examples
///
/// ```
/// use bundle_diff::fmt::format_signed_bytes;
///
/// assert_eq!(format_signed_bytes(200.0), "+200 B");
/// assert_eq!(format_signed_bytes(-2048.0), "-2.00 KB");
/// assert_eq!(format_signed_bytes(0.0), "0 B");
/// ```
pub fn format_signed_bytes(diff: f64) -> String {
    if diff > 0.0 {
        format!("+{}", format_bytes(diff))
    } else if diff < 0.0 {
        format!("-{}", format_bytes(-diff))
    } else {
        format_bytes(0.0)
    }
}
