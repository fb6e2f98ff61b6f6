use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%d %b %Y, %H:%M";

/// Renders a backend timestamp for display in the review card footer.
///
/// The backend stores naive UTC timestamps and serializes them in ISO-8601
/// form, with or without fractional seconds. RFC 3339 input is accepted too.
/// Unparseable input is shown verbatim rather than dropped; a missing
/// timestamp gets a placeholder.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "Unknown date".to_string();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Utc
            .from_utc_datetime(&naive)
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_backend_timestamps() {
        let formatted = format_timestamp(Some("2024-06-15T12:30:45.123456"));
        assert!(formatted.contains("2024"), "got {formatted}");
        assert!(formatted.contains("Jun"), "got {formatted}");
    }

    #[test]
    fn accepts_rfc3339() {
        let formatted = format_timestamp(Some("2024-06-15T12:30:45+00:00"));
        assert!(formatted.contains("2024"), "got {formatted}");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_timestamp(Some("yesterday-ish")), "yesterday-ish");
    }

    #[test]
    fn missing_timestamp_gets_placeholder() {
        assert_eq!(format_timestamp(None), "Unknown date");
    }
}
