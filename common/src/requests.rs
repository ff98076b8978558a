//! Submitted design requests, newest first.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keys;
use crate::view_model::ViewModel;

pub const EMPTY_QUEUE: &str = "No requests yet. Create one in Design Studio.";

/// Request status as stored. Values written by other tools are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    New,
    Approved,
    Other(String),
}

impl From<String> for RequestStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "New" => RequestStatus::New,
            "Approved" => RequestStatus::Approved,
            _ => RequestStatus::Other(s),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::New => f.write_str("New"),
            RequestStatus::Approved => f.write_str("Approved"),
            RequestStatus::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub summary: String,
    pub status: RequestStatus,
}

/// `REQ-<unix seconds>`. Two submissions in the same second would share an
/// id, so a numeric suffix is added when the id is already queued.
pub fn request_id(at: DateTime<Utc>, queue: &[DesignRequest]) -> String {
    let base = format!("REQ-{}", at.timestamp());
    let taken = |id: &str| queue.iter().any(|r| r.id == id);
    if !taken(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let id = format!("{base}-{n}");
        if !taken(&id) {
            return id;
        }
        n += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub summary: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRow {
    pub id: String,
    pub summary: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestsView {
    pub rows: Vec<RequestRow>,
    /// Set when the queue is empty.
    pub empty_message: Option<&'static str>,
}

/// The request queue slot.
#[derive(Debug, Clone, Copy)]
pub struct RequestQueue {
    pub display_limit: usize,
}

impl ViewModel for RequestQueue {
    type State = Vec<DesignRequest>;
    type Action = SubmitRequest;
    type View = RequestsView;

    fn key(&self) -> &'static str {
        keys::REQUESTS
    }

    fn default_state(&self) -> Vec<DesignRequest> {
        Vec::new()
    }

    fn mutate(&self, mut queue: Vec<DesignRequest>, submit: SubmitRequest) -> Result<Vec<DesignRequest>> {
        let request = DesignRequest {
            id: request_id(submit.at, &queue),
            created_at: submit.at,
            summary: submit.summary,
            status: RequestStatus::New,
        };
        tracing::info!("Queued design request {}", request.id);
        queue.insert(0, request);
        Ok(queue)
    }

    fn render(&self, queue: &Vec<DesignRequest>) -> RequestsView {
        RequestsView {
            rows: queue
                .iter()
                .take(self.display_limit)
                .map(|r| RequestRow {
                    id: r.id.clone(),
                    summary: r.summary.clone(),
                    status: r.status.to_string(),
                })
                .collect(),
            empty_message: queue.is_empty().then_some(EMPTY_QUEUE),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::view_model::Binding;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn submit(summary: &str, secs: i64) -> SubmitRequest {
        SubmitRequest {
            summary: summary.into(),
            at: at(secs),
        }
    }

    #[test]
    fn newest_submission_goes_first() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, RequestQueue { display_limit: 6 });
        binding.dispatch(submit("Gold Ring with Diamond", 0)).unwrap();
        binding.dispatch(submit("Silver Bracelet with Ruby", 5)).unwrap();

        let queue = binding.load();
        assert_eq!(queue[0].summary, "Silver Bracelet with Ruby");
        assert_eq!(queue[1].summary, "Gold Ring with Diamond");
        assert_eq!(queue[0].status, RequestStatus::New);
        assert_eq!(queue[1].id, "REQ-1700000000");
    }

    #[test]
    fn same_second_ids_are_suffixed() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, RequestQueue { display_limit: 6 });
        for _ in 0..3 {
            binding.dispatch(submit("Gold Ring with Diamond", 0)).unwrap();
        }
        let ids: Vec<_> = binding.load().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["REQ-1700000000-3", "REQ-1700000000-2", "REQ-1700000000"]);
    }

    #[test]
    fn table_shows_newest_up_to_limit() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, RequestQueue { display_limit: 6 });
        let mut view = None;
        for secs in 0..9 {
            view = Some(binding.dispatch(submit(&format!("Piece {secs}"), secs)).unwrap());
        }
        let view = view.unwrap();
        assert_eq!(binding.load().len(), 9);
        assert_eq!(view.rows.len(), 6);
        assert_eq!(view.rows[0].summary, "Piece 8");
        assert_eq!(view.rows[5].summary, "Piece 3");
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn empty_queue_shows_hint() {
        let view = RequestQueue { display_limit: 6 }.render(&Vec::new());
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_message, Some(EMPTY_QUEUE));
    }

    #[test]
    fn reads_iso_timestamps_and_unknown_status() {
        let store = MemoryStore::new();
        store
            .set(
                keys::REQUESTS,
                r#"[{"id":"REQ-1","createdAt":"2024-05-01T10:00:00.000Z","summary":"x","status":"In Review"}]"#,
            )
            .unwrap();
        let queue = Binding::new(&store, RequestQueue { display_limit: 6 }).load();
        assert_eq!(queue[0].status, RequestStatus::Other("In Review".into()));
        assert_eq!(queue[0].created_at.timestamp(), 1_714_557_600);
        let encoded = serde_json::to_string(&queue).unwrap();
        assert!(encoded.contains(r#""createdAt":"2024-05-01T10:00:00Z""#));
        assert!(encoded.contains(r#""status":"In Review""#));
    }
}
