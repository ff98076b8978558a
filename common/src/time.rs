use chrono::{DateTime, Duration, Utc};

/// Timestamp as shown in message and notification rows.
pub fn display_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %H:%M").to_string()
}

/// `at` shifted back by `minutes`.
pub fn minutes_before(at: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    at - Duration::minutes(minutes)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_without_padding_the_day() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(display_timestamp(&at), "Mar 7, 2024 09:05");
    }
}
