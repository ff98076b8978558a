//! One handler per UI event.
//!
//! [`Studio`] owns the store, the toast queue and the configuration. Each
//! method is what a control's event handler calls: it runs the view-model
//! cycle for the affected slot, raises the toast the visitor should see, and
//! returns the view to draw. Handlers run to completion; the host never
//! interleaves two of them.

use chrono::{DateTime, Utc};

use crate::approval::{ApprovalAction, ApprovalView, Approvals};
use crate::config::StudioConfig;
use crate::design::{DesignAction, DesignStudio, DesignView};
use crate::error::Result;
use crate::messages::{MessageLog, MessagesView, SendMessage};
use crate::nav::{self, Page};
use crate::notifications::{FeedAction, FeedView, NotificationFeed};
use crate::payments::{MarkStage, Payments, PaymentsView};
use crate::requests::{RequestQueue, RequestsView, SubmitRequest};
use crate::settings::{RoleSetting, RoleView, ThemeSetting, ThemeView, Toggle};
use crate::storage::KeyValueStore;
use crate::toast::{Severity, ToastQueue};
use crate::upload::{self, FileInfo, UploadPreview};
use crate::validation::{self, Field, FormOutcome};
use crate::view_model::{Binding, ViewModel};

pub struct Studio<S> {
    store: S,
    config: StudioConfig,
    toasts: ToastQueue,
    opened_at: DateTime<Utc>,
}

impl<S: KeyValueStore> Studio<S> {
    pub fn new(store: S, config: StudioConfig, opened_at: DateTime<Utc>) -> Self {
        let toasts = ToastQueue::new(config.toast_fade_after_ms, config.toast_remove_after_ms);
        Self {
            store,
            config,
            toasts,
            opened_at,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    fn message_log(&self) -> MessageLog {
        MessageLog::new(self.opened_at, self.config.message_display_limit)
    }

    fn feed(&self) -> NotificationFeed {
        NotificationFeed {
            display_limit: self.config.notification_display_limit,
        }
    }

    fn queue(&self) -> RequestQueue {
        RequestQueue {
            display_limit: self.config.request_display_limit,
        }
    }

    fn view<M: ViewModel>(&self, model: M) -> M::View {
        Binding::new(&self.store, model).current_view()
    }

    /// Load, mutate, persist, render. A failed write raises the error toast
    /// and returns the error, so callers skip their success toast.
    fn run<M: ViewModel>(&mut self, model: M, action: M::Action, now: DateTime<Utc>) -> Result<M::View> {
        let binding = Binding::new(&self.store, model);
        let next = binding.mutate(action)?;
        if let Err(e) = binding.persist(&next) {
            tracing::warn!("Could not save {}: {}", binding.model().key(), e);
            self.toasts.show("Could not save changes", Severity::Error, now);
            return Err(e);
        }
        Ok(binding.render(&next))
    }

    // ── Design configurator ──

    pub fn design_view(&self) -> DesignView {
        self.view(DesignStudio)
    }

    /// Option buttons and the notes field. No toast.
    pub fn update_design(&mut self, action: DesignAction, now: DateTime<Utc>) -> Result<DesignView> {
        self.run(DesignStudio, action, now)
    }

    /// Queue the current draft as a new request.
    pub fn submit_design(&mut self, now: DateTime<Utc>) -> Result<RequestsView> {
        let draft = Binding::new(&self.store, DesignStudio).load();
        let submit = SubmitRequest {
            summary: draft.summary(),
            at: now,
        };
        let view = self.run(self.queue(), submit, now)?;
        self.toasts.show("Design request submitted", Severity::Success, now);
        Ok(view)
    }

    pub fn preview_uploads(&mut self, files: &[FileInfo], now: DateTime<Utc>) -> UploadPreview {
        let preview = upload::preview(files);
        if !files.is_empty() {
            self.toasts.show("Files ready for review", Severity::Info, now);
        }
        preview
    }

    // ── Messaging ──

    pub fn messages_view(&self) -> MessagesView {
        self.view(self.message_log())
    }

    /// Send `text` as the client. Blank text raises a warning and is not
    /// stored.
    pub fn send_message(&mut self, text: &str, now: DateTime<Utc>) -> Result<MessagesView> {
        match self.run(self.message_log(), SendMessage::from_client(text, now), now) {
            Ok(view) => {
                self.toasts.show("Message sent", Severity::Success, now);
                Ok(view)
            }
            Err(e) => {
                if e.is_validation() {
                    self.toasts.show("Write a message first", Severity::Warn, now);
                }
                Err(e)
            }
        }
    }

    // ── Approvals ──

    pub fn approval_view(&self) -> ApprovalView {
        self.view(Approvals)
    }

    pub fn approve(&mut self, now: DateTime<Utc>) -> Result<ApprovalView> {
        let view = self.run(Approvals, ApprovalAction::Approve, now)?;
        self.toasts.show("Concept approved", Severity::Success, now);
        Ok(view)
    }

    pub fn request_revision(&mut self, now: DateTime<Utc>) -> Result<ApprovalView> {
        let view = self.run(Approvals, ApprovalAction::RequestRevision, now)?;
        self.toasts.show("Revision requested", Severity::Info, now);
        Ok(view)
    }

    // ── Payments ──

    pub fn payments_view(&self) -> PaymentsView {
        self.view(Payments)
    }

    pub fn mark_stage(&mut self, stage: &str, paid: bool, now: DateTime<Utc>) -> Result<PaymentsView> {
        let mark = MarkStage {
            stage: stage.to_string(),
            paid,
        };
        let view = self.run(Payments, mark, now)?;
        self.toasts.show("Payment stage updated", Severity::Success, now);
        Ok(view)
    }

    // ── Dashboard ──

    pub fn notifications_view(&self) -> FeedView {
        self.view(self.feed())
    }

    /// First visit fills the feed with sample entries.
    pub fn seed_notifications(&mut self, now: DateTime<Utc>) -> Result<FeedView> {
        self.run(self.feed(), FeedAction::SeedIfEmpty { now }, now)
    }

    pub fn requests_view(&self) -> RequestsView {
        self.view(self.queue())
    }

    /// The row's Approve button. Approval is a single global flag, so this
    /// sets it regardless of which row was clicked; the row keeps its
    /// status.
    pub fn approve_request(&mut self, request_id: &str, now: DateTime<Utc>) -> Result<ApprovalView> {
        tracing::info!("Approve clicked on request {request_id}");
        let view = self.run(Approvals, ApprovalAction::Approve, now)?;
        self.toasts.show("Approved from dashboard", Severity::Success, now);
        Ok(view)
    }

    // ── Theme and role ──

    pub fn theme_view(&self) -> ThemeView {
        ThemeSetting.render(&ThemeSetting::load_with_legacy(&self.store))
    }

    pub fn toggle_theme(&mut self, now: DateTime<Utc>) -> Result<ThemeView> {
        let binding = Binding::new(&self.store, ThemeSetting);
        let next = ThemeSetting.mutate(ThemeSetting::load_with_legacy(&self.store), Toggle)?;
        if let Err(e) = binding.persist(&next) {
            tracing::warn!("Could not save theme: {e}");
            self.toasts.show("Could not save changes", Severity::Error, now);
            return Err(e);
        }
        self.toasts.show("Theme updated", Severity::Info, now);
        Ok(binding.render(&next))
    }

    pub fn role_view(&self) -> RoleView {
        self.view(RoleSetting)
    }

    pub fn toggle_role(&mut self, now: DateTime<Utc>) -> Result<RoleView> {
        let view = self.run(RoleSetting, Toggle, now)?;
        self.toasts.show("Dashboard view updated", Severity::Info, now);
        Ok(view)
    }

    // ── Forms and navigation ──

    /// Validate a form marked for validation. Exactly one toast either way.
    pub fn submit_form(&mut self, fields: &[Field<'_>], now: DateTime<Utc>) -> FormOutcome {
        let outcome = validation::validate(fields);
        if outcome.is_blocked() {
            self.toasts.show(validation::INCOMPLETE, Severity::Warn, now);
        } else {
            self.toasts.show(validation::SUBMITTED, Severity::Success, now);
        }
        outcome
    }

    pub fn follow_nav_link(&mut self, page: Page) {
        if let Err(e) = nav::remember_active_page(&self.store, page) {
            tracing::warn!("Could not remember active page: {e}");
        }
    }
}

impl<S> std::fmt::Debug for Studio<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("config", &self.config)
            .field("toasts", &self.toasts.len())
            .finish_non_exhaustive()
    }
}
