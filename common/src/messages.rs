//! Client ↔ designer message log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};
use crate::keys;
use crate::time::{display_timestamp, minutes_before};
use crate::view_model::ViewModel;

pub const CLIENT: &str = "Client";
pub const DESIGNER: &str = "Designer";

const WELCOME: &str = "Welcome. Share your vision and references here.";

/// A sent message. Append-only, never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub text: String,
    #[serde(rename = "ts", with = "chrono::serde::ts_milliseconds")]
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    pub from: String,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl SendMessage {
    /// A message typed by the client in the studio form.
    pub fn from_client(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            from: CLIENT.to_string(),
            text: text.into(),
            at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub from: String,
    pub text: String,
    pub sent_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagesView {
    /// Newest first.
    pub rows: Vec<MessageRow>,
}

/// The message log slot.
///
/// `opened_at` stamps the welcome message shown while the log is empty.
#[derive(Debug, Clone, Copy)]
pub struct MessageLog {
    pub opened_at: DateTime<Utc>,
    pub display_limit: usize,
}

impl MessageLog {
    pub fn new(opened_at: DateTime<Utc>, display_limit: usize) -> Self {
        Self {
            opened_at,
            display_limit,
        }
    }
}

impl ViewModel for MessageLog {
    type State = Vec<Message>;
    type Action = SendMessage;
    type View = MessagesView;

    fn key(&self) -> &'static str {
        keys::MESSAGES
    }

    fn default_state(&self) -> Vec<Message> {
        vec![Message {
            from: DESIGNER.to_string(),
            text: WELCOME.to_string(),
            sent_at: minutes_before(self.opened_at, 60),
        }]
    }

    fn mutate(&self, mut log: Vec<Message>, send: SendMessage) -> Result<Vec<Message>> {
        let text = send.text.trim();
        if text.is_empty() {
            return Err(StudioError::Validation("message text is blank".into()));
        }
        log.push(Message {
            from: send.from,
            text: text.to_string(),
            sent_at: send.at,
        });
        Ok(log)
    }

    fn render(&self, log: &Vec<Message>) -> MessagesView {
        let rows = log
            .iter()
            .rev()
            .take(self.display_limit)
            .map(|m| MessageRow {
                from: m.from.clone(),
                text: m.text.clone(),
                sent_at: display_timestamp(&m.sent_at),
            })
            .collect();
        MessagesView { rows }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::view_model::Binding;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, minute, 0).unwrap()
    }

    #[test]
    fn empty_log_shows_welcome() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, MessageLog::new(at(0), 30));
        let view = binding.current_view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].from, DESIGNER);
        assert_eq!(binding.load()[0].sent_at, at(0) - chrono::Duration::hours(1));
    }

    #[test]
    fn send_appends_trimmed_text() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, MessageLog::new(at(0), 30));
        let view = binding
            .dispatch(SendMessage::from_client("  rose gold please ", at(1)))
            .unwrap();
        assert_eq!(view.rows[0].text, "rose gold please");
        assert_eq!(view.rows[0].from, CLIENT);
        assert_eq!(binding.load().len(), 2);
    }

    #[test]
    fn blank_text_is_rejected() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, MessageLog::new(at(0), 30));
        let err = binding
            .dispatch(SendMessage::from_client("   ", at(1)))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.get(keys::MESSAGES), None);
    }

    #[test]
    fn view_shows_latest_entries_newest_first() {
        let model = MessageLog::new(at(0), 3);
        let log: Vec<Message> = (1..=5)
            .map(|i| Message {
                from: CLIENT.into(),
                text: format!("m{i}"),
                sent_at: at(i),
            })
            .collect();
        let texts: Vec<_> = model.render(&log).rows.into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["m5", "m4", "m3"]);
    }

    #[test]
    fn reads_existing_millisecond_timestamps() {
        let raw = r#"[{"from":"Designer","text":"hi","ts":1700000000000}]"#;
        let log: Vec<Message> = serde_json::from_str(raw).unwrap();
        assert_eq!(log[0].sent_at.timestamp(), 1_700_000_000);
        assert_eq!(serde_json::to_string(&log).unwrap(), raw);
    }
}
