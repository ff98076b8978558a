use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use atelier_common::toast::{ToastId, ToastPhase};

use super::studio_state::{sleep_ms, use_studio};

/// Stacked toasts in the corner. Each toast gets its own fade and removal
/// timers the first time it is seen.
#[component]
pub fn ToastStack() -> Element {
    let mut studio = use_studio();
    let scheduled = use_hook(|| Rc::new(Cell::new(0u64)));

    use_effect(move || {
        let studio_read = studio.read();
        let fade = studio_read.toasts().fade_after_ms();
        let remove = studio_read.toasts().remove_after_ms();
        let fresh: Vec<ToastId> = studio_read
            .toasts()
            .entries()
            .iter()
            .map(|t| t.id)
            .filter(|id| id.0 > scheduled.get())
            .collect();
        drop(studio_read);

        for id in fresh {
            scheduled.set(scheduled.get().max(id.0));
            spawn(async move {
                sleep_ms(fade).await;
                studio.write().toasts_mut().begin_fade(id);
                sleep_ms(remove.saturating_sub(fade)).await;
                studio.write().toasts_mut().remove(id);
            });
        }
    });

    let toasts = studio.read().toasts().entries().to_vec();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id.0}",
                    class: if toast.phase == ToastPhase::Fading { "toast fading" } else { "toast" },
                    i { class: "fa-solid {toast.icon()}" }
                    div {
                        strong { "{toast.title}" }
                        p { "{toast.body()}" }
                    }
                }
            }
        }
    }
}
