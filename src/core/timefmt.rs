// src/core/timefmt.rs - Timestamp labels for session rows and messages

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::core::types::{parse_timestamp, Session};

const MINUTES_IN_HOUR: f64 = 60.0;
const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_MONTH: f64 = 43_200.0;

/// Human distance between `then` and `now` with an "ago"/"in" suffix,
/// e.g. "less than a minute ago", "about 3 hours ago", "in 2 days".
pub fn relative_to(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    let distance = distance_words(seconds.unsigned_abs());
    if seconds < 0 {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn distance_words(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round();

    if minutes < 2.0 {
        return if minutes == 0.0 {
            "less than a minute".into()
        } else {
            "1 minute".into()
        };
    }
    if minutes < 45.0 {
        return plural(minutes as u64, "minute");
    }
    if minutes < 90.0 {
        return "about 1 hour".into();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes / MINUTES_IN_HOUR).round() as u64;
        return format!("about {}", plural(hours, "hour"));
    }
    if minutes < 2520.0 {
        return "1 day".into();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes / MINUTES_IN_DAY).round() as u64;
        return plural(days, "day");
    }
    if minutes < 2.0 * MINUTES_IN_MONTH {
        let months = (minutes / MINUTES_IN_MONTH).round() as u64;
        return format!("about {}", plural(months, "month"));
    }

    let months = (minutes / MINUTES_IN_MONTH).floor() as u64;
    if months < 12 {
        let nearest = (minutes / MINUTES_IN_MONTH).round() as u64;
        return plural(nearest, "month");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

/// Secondary line of a session row: the role label if set, otherwise how long
/// ago the most recent message was sent. Sessions with neither show nothing.
pub fn session_subtitle(session: &Session, now: DateTime<Utc>) -> Option<String> {
    if let Some(role) = session.role_label() {
        return Some(role.to_string());
    }
    session
        .messages
        .iter()
        .filter_map(|m| m.created_at())
        .max()
        .map(|latest| relative_to(latest, now))
}

/// Wall-clock label for a message in `tz`. Every message is labelled "Today",
/// whatever its date.
pub fn message_label_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw) {
        Some(ts) => format!("Today {}", ts.with_timezone(tz).format("%H:%M")),
        None => raw.to_string(),
    }
}

/// `message_label_in` for the local time zone.
pub fn message_label(raw: &str) -> String {
    message_label_in(raw, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Message, Sender};
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        relative_to(now() - d, now())
    }

    #[test]
    fn test_under_a_minute() {
        assert_eq!(ago(Duration::seconds(10)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(29)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(45)), "1 minute ago");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(44)), "44 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(ago(Duration::minutes(60)), "about 1 hour ago");
        assert_eq!(ago(Duration::hours(3)), "about 3 hours ago");
        assert_eq!(ago(Duration::hours(23)), "about 23 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(ago(Duration::hours(30)), "1 day ago");
        assert_eq!(ago(Duration::days(5)), "5 days ago");
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(ago(Duration::days(40)), "about 1 month ago");
        assert_eq!(ago(Duration::days(100)), "3 months ago");
        assert_eq!(ago(Duration::days(370)), "about 1 year ago");
        assert_eq!(ago(Duration::days(365 + 150)), "over 1 year ago");
        assert_eq!(ago(Duration::days(365 + 320)), "almost 2 years ago");
    }

    #[test]
    fn test_future_uses_in_prefix() {
        assert_eq!(relative_to(now() + Duration::minutes(5), now()), "in 5 minutes");
    }

    #[test]
    fn test_message_label_same_day_format() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(message_label_in("2024-01-01T09:05:00Z", &utc), "Today 09:05");

        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(message_label_in("2024-01-01T09:05:00Z", &plus2), "Today 11:05");
    }

    #[test]
    fn test_message_label_unparseable_passthrough() {
        assert_eq!(message_label_in("soon", &Utc), "soon");
    }

    #[test]
    fn test_session_subtitle_prefers_role() {
        let mut session = Session {
            id: 1,
            name: "A".into(),
            messages: vec![Message {
                id: 1,
                content: "hi".into(),
                action: Sender::User,
                timestamp: "2024-06-15T11:55:00Z".into(),
            }],
            message_count: 1,
            role: None,
        };
        assert_eq!(
            session_subtitle(&session, now()).as_deref(),
            Some("5 minutes ago")
        );

        session.role = Some("Sales".into());
        assert_eq!(session_subtitle(&session, now()).as_deref(), Some("Sales"));

        session.role = None;
        session.messages.clear();
        assert_eq!(session_subtitle(&session, now()), None);
    }
}
