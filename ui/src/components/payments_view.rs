use dioxus::prelude::*;

use super::studio_state::{now, report, use_studio};

/// Payment milestones with a progress bar.
#[component]
pub fn PaymentsPanel() -> Element {
    let mut studio = use_studio();
    let view = studio.read().payments_view();

    rsx! {
        div { id: "payments", class: "card pad",
            h3 { "Payment milestones" }
            for stage in view.stages.clone() {
                label { key: "{stage.id}", class: "stage",
                    input {
                        r#type: "checkbox",
                        "data-stage": "{stage.id}",
                        checked: stage.checked,
                        onchange: move |evt| {
                            let result = studio.write().mark_stage(stage.id, evt.checked(), now());
                            report(result);
                        },
                    }
                    " {stage.label}"
                }
            }
            div { class: "progress",
                div { id: "paymentBar", class: "progress-bar", style: "width: {view.bar_width}" }
            }
            p { id: "paymentLabel", class: "helper", "{view.label}" }
        }
    }
}
