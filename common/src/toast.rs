//! Transient toast notifications.
//!
//! The queue is never persisted. Each toast fades after a fixed delay and is
//! removed a little later. Hosts either schedule [`ToastQueue::begin_fade`]
//! and [`ToastQueue::remove`] with timers, or call [`ToastQueue::expire`]
//! periodically. Both address toasts by id and do nothing when the toast is
//! already gone.
//!
//! The caller's text is used as the title. The body is fixed per severity.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warn,
    Error,
}

impl Severity {
    /// Font Awesome icon class.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "fa-gem",
            Severity::Success => "fa-circle-check",
            Severity::Warn => "fa-triangle-exclamation",
            Severity::Error => "fa-circle-xmark",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Severity::Info => "Custom Jewelry Designer is ready.",
            Severity::Success => "Saved successfully.",
            Severity::Warn => "Please review the details.",
            Severity::Error => "Something went wrong.",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Visible,
    /// Fading out; removal follows.
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn icon(&self) -> &'static str {
        self.severity.icon()
    }

    pub fn body(&self) -> &'static str {
        self.severity.body()
    }
}

/// Ordered stack of visible toasts, oldest first. Unbounded.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    entries: Vec<Toast>,
    next_id: u64,
    fade_after_ms: u64,
    remove_after_ms: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3_200, 3_600)
    }
}

impl ToastQueue {
    pub fn new(fade_after_ms: u64, remove_after_ms: u64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            fade_after_ms,
            remove_after_ms: remove_after_ms.max(fade_after_ms),
        }
    }

    pub fn fade_after_ms(&self) -> u64 {
        self.fade_after_ms
    }

    pub fn remove_after_ms(&self) -> u64 {
        self.remove_after_ms
    }

    pub fn show(&mut self, title: impl Into<String>, severity: Severity, now: DateTime<Utc>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let title = title.into();
        tracing::debug!("Toast {:?} ({:?}): {}", id, severity, title);
        self.entries.push(Toast {
            id,
            title,
            severity,
            shown_at: now,
            phase: ToastPhase::Visible,
        });
        id
    }

    /// Start fading `id`. Returns false if it is no longer shown.
    pub fn begin_fade(&mut self, id: ToastId) -> bool {
        match self.entries.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::Fading;
                true
            }
            None => false,
        }
    }

    /// Drop `id`. Returns false if it was already gone.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    /// Apply both deadlines as of `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        let (fade, remove) = (self.fade_after_ms as i64, self.remove_after_ms as i64);
        self.entries
            .retain(|t| (now - t.shown_at).num_milliseconds() < remove);
        for toast in &mut self.entries {
            if (now - toast.shown_at).num_milliseconds() >= fade {
                toast.phase = ToastPhase::Fading;
            }
        }
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Titles of every toast currently shown, oldest first.
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|t| t.title.as_str()).collect()
    }
}
