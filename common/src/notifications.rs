//! Dashboard notification feed, seeded with sample entries on first visit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keys;
use crate::time::{display_timestamp, minutes_before};
use crate::view_model::ViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    #[serde(rename = "ts", with = "chrono::serde::ts_milliseconds")]
    pub posted_at: DateTime<Utc>,
}

/// (title, body, minutes ago), newest first.
const SEED: &[(&str, &str, i64)] = &[
    (
        "Consultation booked",
        "Your consultation is scheduled. Add reference images in Design Studio.",
        30,
    ),
    (
        "Designer update",
        "A new concept draft is ready for review in Approvals.",
        120,
    ),
    (
        "Payment milestone",
        "The deposit stage is available in Payments.",
        240,
    ),
];

pub fn seed_entries(now: DateTime<Utc>) -> Vec<Notification> {
    SEED.iter()
        .map(|(title, body, ago)| Notification {
            title: title.to_string(),
            body: body.to_string(),
            posted_at: minutes_before(now, *ago),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    /// Fill the feed with sample entries if it is empty.
    SeedIfEmpty { now: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub title: String,
    pub body: String,
    pub posted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    pub rows: Vec<NotificationRow>,
}

/// The notification slot.
#[derive(Debug, Clone, Copy)]
pub struct NotificationFeed {
    pub display_limit: usize,
}

impl ViewModel for NotificationFeed {
    type State = Vec<Notification>;
    type Action = FeedAction;
    type View = FeedView;

    fn key(&self) -> &'static str {
        keys::NOTIFICATIONS
    }

    fn default_state(&self) -> Vec<Notification> {
        Vec::new()
    }

    fn mutate(&self, feed: Vec<Notification>, action: FeedAction) -> Result<Vec<Notification>> {
        match action {
            FeedAction::SeedIfEmpty { now } if feed.is_empty() => {
                tracing::info!("Seeding notification feed");
                Ok(seed_entries(now))
            }
            FeedAction::SeedIfEmpty { .. } => Ok(feed),
        }
    }

    fn render(&self, feed: &Vec<Notification>) -> FeedView {
        FeedView {
            rows: feed
                .iter()
                .take(self.display_limit)
                .map(|n| NotificationRow {
                    title: n.title.clone(),
                    body: n.body.clone(),
                    posted_at: display_timestamp(&n.posted_at),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::view_model::Binding;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 14, 10, 0, 0).unwrap()
    }

    #[test]
    fn seeds_three_entries_once() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, NotificationFeed { display_limit: 6 });

        let view = binding.dispatch(FeedAction::SeedIfEmpty { now: now() }).unwrap();
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].title, "Consultation booked");

        let later = now() + chrono::Duration::days(1);
        binding.dispatch(FeedAction::SeedIfEmpty { now: later }).unwrap();
        let feed = binding.load();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].posted_at, now() - chrono::Duration::minutes(30));
    }

    #[test]
    fn existing_feed_is_untouched() {
        let store = MemoryStore::new();
        let raw = r#"[{"title":"Custom","body":"kept","ts":1700000000000}]"#;
        store.set(keys::NOTIFICATIONS, raw).unwrap();

        let binding = Binding::new(&store, NotificationFeed { display_limit: 6 });
        binding.dispatch(FeedAction::SeedIfEmpty { now: now() }).unwrap();
        assert_eq!(binding.load().len(), 1);
        assert_eq!(binding.load()[0].title, "Custom");
    }

    #[test]
    fn empty_list_and_garbage_are_reseeded() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, NotificationFeed { display_limit: 6 });

        store.set(keys::NOTIFICATIONS, "[]").unwrap();
        binding.dispatch(FeedAction::SeedIfEmpty { now: now() }).unwrap();
        assert_eq!(binding.load().len(), 3);

        store.set(keys::NOTIFICATIONS, "{oops").unwrap();
        binding.dispatch(FeedAction::SeedIfEmpty { now: now() }).unwrap();
        assert_eq!(binding.load().len(), 3);
    }

    #[test]
    fn view_is_capped() {
        let feed: Vec<Notification> = (0..10).flat_map(|_| seed_entries(now())).collect();
        assert_eq!(NotificationFeed { display_limit: 6 }.render(&feed).rows.len(), 6);
    }
}
