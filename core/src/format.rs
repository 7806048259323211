//! Human-readable file sizes.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Format a byte count with 1024-based units and at most two decimals.
///
/// Trailing zeros are dropped, so `1536` is `"1.5 KB"` and `1024` is
/// `"1 KB"`. Anything of a terabyte or more is still expressed in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    format!("{} {}", trim_decimals(value), UNITS[unit])
}

/// Round to two decimals and strip trailing zeros (`"1.50"` -> `"1.5"`).
fn trim_decimals(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1300), "1.27 KB");
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(5 * 1_048_576 + 262_144), "5.25 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_past_gigabytes_stays_in_gb() {
        assert_eq!(format_file_size(1_099_511_627_776), "1024 GB");
    }
}
