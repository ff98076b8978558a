//! Storage key names.
//!
//! These match the keys already present in visitors' browsers and must not
//! change without a migration.

pub const DESIGN_DRAFT: &str = "aa_design_draft";
pub const MESSAGES: &str = "aa_messages";
/// Raw string, not JSON.
pub const APPROVAL: &str = "aa_approvals";
pub const PAYMENT_STAGES: &str = "aa_payment_stages";
pub const NOTIFICATIONS: &str = "aa_notifications";
pub const REQUESTS: &str = "aa_requests";
/// Raw string, not JSON.
pub const THEME: &str = "aa_theme";
/// Written by the older dashboard and header scripts. Read-only fallback.
pub const LEGACY_THEME: &str = "theme";
/// Raw string, not JSON.
pub const ROLE: &str = "aa_role";
/// Raw string, not JSON.
pub const ACTIVE_PAGE: &str = "activePage";
