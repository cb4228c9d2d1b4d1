// src/cli/list.rs - Print session pages as text or JSON

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::core::loader::SessionLoader;
use crate::core::timefmt::session_subtitle;
use crate::core::types::Session;
use crate::source::SessionSource;

pub struct ListOptions {
    pub page: u32,
    pub all: bool,
    pub json: bool,
}

/// Load the requested page(s) and write them to `out`.
pub async fn run_list<W: Write>(
    source: &dyn SessionSource,
    opts: &ListOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut loader = SessionLoader::new();

    if opts.all {
        loader.load_page(source, 1).await?;
        while loader.has_more() {
            let page = loader.next_page();
            loader.load_page(source, page).await?;
        }
    } else {
        loader.load_page(source, opts.page).await?;
    }

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, loader.sessions())?;
        writeln!(out)?;
        return Ok(());
    }

    let now = Utc::now();
    for session in loader.sessions() {
        writeln!(out, "{}", format_session_line(session, now))?;
    }
    match loader.total_pages() {
        Some(total) => writeln!(
            out,
            "{} session(s), {} of {} page(s) loaded",
            loader.sessions().len(),
            loader.loaded_pages(),
            total
        )?,
        None => writeln!(out, "{} session(s)", loader.sessions().len())?,
    }
    Ok(())
}

pub fn format_session_line(session: &Session, now: DateTime<Utc>) -> String {
    let subtitle = session_subtitle(session, now).unwrap_or_else(|| "-".into());
    format!(
        "{:>6}  {:<24}  {:>4} msg  {}",
        session.id,
        truncate(&session.name, 24),
        session.message_count,
        subtitle
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_session_line_with_role() {
        let session = Session {
            id: 7,
            name: "Support chat".into(),
            messages: vec![],
            message_count: 12,
            role: Some("Support".into()),
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let line = format_session_line(&session, now);
        assert!(line.starts_with("     7  Support chat"));
        assert!(line.contains("  12 msg"));
        assert!(line.ends_with("Support"));
    }

    #[test]
    fn test_format_session_line_without_activity() {
        let session = Session {
            id: 1,
            name: "Empty".into(),
            messages: vec![],
            message_count: 0,
            role: None,
        };
        let line = format_session_line(&session, Utc::now());
        assert!(line.ends_with(" -"));
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("abc", 6), "abc");
    }
}
