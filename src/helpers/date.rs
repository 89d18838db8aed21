//! Date helper functions

use chrono::NaiveDateTime;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Generate a <time> HTML element
pub fn time_tag(date: &NaiveDateTime, format: Option<&str>) -> String {
    let datetime = date.format("%Y-%m-%dT%H:%M:%S").to_string();
    let display = match format {
        Some(format) => format_date(date, format),
        None => full_date(date),
    };
    format!(r#"<time datetime="{}">{}</time>"#, datetime, display)
}

/// Convert a Moment.js format string to a chrono one.
/// Longest patterns first so e.g. MMMM is consumed before MM.
fn moment_to_chrono_format(format: &str) -> String {
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"), // Full month name
        ("MMM", "%b"),  // Abbreviated month name
        ("MM", "%m"),   // Two-digit month
        ("DD", "%d"),   // Two-digit day
        ("D", "%-d"),   // Day without leading zero
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        let d = date(2024, 1, 15);
        assert_eq!(format_date(&d, "YYYY-MM-DD"), "2024-01-15");
        assert_eq!(format_date(&d, "MMMM D, YYYY"), "January 15, 2024");
    }

    #[test]
    fn test_full_date() {
        assert_eq!(full_date(&date(2020, 1, 1)), "January 1, 2020");
    }

    #[test]
    fn test_time_tag() {
        let tag = time_tag(&date(2020, 1, 1), None);
        assert_eq!(
            tag,
            r#"<time datetime="2020-01-01T00:00:00">January 1, 2020</time>"#
        );
    }
}
