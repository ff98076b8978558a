use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use atelier_common::config::StudioConfig;
use atelier_common::nav::ShellState;
use atelier_common::Studio;

use super::local_store::HostStore;

pub type AppStudio = Studio<HostStore>;

const CONFIG_JSON: &str = include_str!("../../atelier.json");

fn load_config() -> StudioConfig {
    StudioConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        tracing::warn!("Ignoring bundled config: {e}");
        StudioConfig::default()
    })
}

pub fn new_studio() -> AppStudio {
    Studio::new(HostStore::open(), load_config(), now())
}

/// The studio shared by every component.
pub fn use_studio() -> Signal<AppStudio> {
    use_context::<Signal<AppStudio>>()
}

/// Drawer and sidebar visibility.
pub fn use_shell() -> Signal<ShellState> {
    use_context::<Signal<ShellState>>()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    #[cfg(not(target_family = "wasm"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Set an attribute on `<html>`, where the stylesheet looks for
/// `data-theme` and `data-role`.
pub fn set_root_attribute(name: &str, value: &str) {
    #[cfg(target_family = "wasm")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.set_attribute(name, value) {
                tracing::warn!("Could not set {name}: {:?}", e);
            }
        }
    }
    #[cfg(not(target_family = "wasm"))]
    let _ = (name, value);
}

/// Log a handler failure. Validation failures already raised their toast.
pub fn report(result: atelier_common::Result<impl Sized>) {
    if let Err(e) = result {
        if !e.is_validation() {
            tracing::error!("Handler failed: {e}");
        }
    }
}
