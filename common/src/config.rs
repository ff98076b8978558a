//! Tunable limits and delays.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Messages shown in the studio thread.
    pub message_display_limit: usize,
    /// Entries shown in the dashboard notification feed.
    pub notification_display_limit: usize,
    /// Rows shown in the dashboard request table.
    pub request_display_limit: usize,
    pub toast_fade_after_ms: u64,
    pub toast_remove_after_ms: u64,
    pub resize_debounce_ms: u32,
    /// Viewports at or below this width use the mobile sidebar.
    pub mobile_breakpoint_px: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            message_display_limit: 30,
            notification_display_limit: 6,
            request_display_limit: 6,
            toast_fade_after_ms: 3_200,
            toast_remove_after_ms: 3_600,
            resize_debounce_ms: 250,
            mobile_breakpoint_px: 768,
        }
    }
}

impl StudioConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_mobile_width(&self, width_px: u32) -> bool {
        width_px <= self.mobile_breakpoint_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = StudioConfig::from_json(r#"{"message_display_limit": 50}"#).unwrap();
        assert_eq!(config.message_display_limit, 50);
        assert_eq!(config.toast_fade_after_ms, 3_200);
        assert!(config.is_mobile_width(768));
        assert!(!config.is_mobile_width(769));
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(StudioConfig::from_json("{").is_err());
    }
}
