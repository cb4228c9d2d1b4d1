// src/core/types.rs - Chat session domain types
//
// These mirror the JSON served by the session endpoint:
//   { "chat_sessions": [Session], "total_pages": n }

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "USER",
            Sender::Ai => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within its session only.
    pub id: i64,
    pub content: String,
    pub action: Sender,
    /// ISO-8601 creation time, kept verbatim.
    pub timestamp: String,
}

impl Message {
    /// Parsed creation time. `None` when the timestamp is unparseable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }

    pub fn is_user(&self) -> bool {
        self.action == Sender::User
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub message_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Session {
    /// Timestamp of the most recent message. Sessions without a parseable
    /// message timestamp report the Unix epoch so they sort last.
    pub fn latest_activity(&self) -> DateTime<Utc> {
        self.messages
            .iter()
            .filter_map(Message::created_at)
            .max()
            .unwrap_or_default()
    }

    /// The role label, if present and non-empty.
    pub fn role_label(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.trim().is_empty())
    }
}

/// One page of the session collection as returned by the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPage {
    pub chat_sessions: Vec<Session>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl SessionPage {
    /// Total page count, with a missing or zero value treated as unknown.
    pub fn known_total_pages(&self) -> Option<u32> {
        self.total_pages.filter(|&n| n > 0)
    }
}

/// Sort a batch by most recent message, newest first. The sort is stable, so
/// sessions with equal activity keep the order the endpoint sent them in.
pub fn sort_by_recent_activity(sessions: &mut [Session]) {
    sessions.sort_by_key(|s| std::cmp::Reverse(s.latest_activity()));
}

/// Parse an ISO-8601 timestamp. Zone-less timestamps are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
