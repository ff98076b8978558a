use dioxus::prelude::*;

use super::studio_state::{now, report, use_studio};

#[component]
pub fn ApprovalsPanel() -> Element {
    let mut studio = use_studio();
    let status = studio.read().approval_view().status;

    rsx! {
        div { id: "approvals", class: "card pad",
            h3 { "Concept approval" }
            p { "Status: " span { id: "approvalStatus", class: "badge", "{status}" } }
            div { class: "btn-row",
                button {
                    id: "approveBtn",
                    class: "btn primary small",
                    onclick: move |_| {
                        let result = studio.write().approve(now());
                        report(result);
                    },
                    "Approve concept"
                }
                button {
                    id: "reviseBtn",
                    class: "btn small",
                    onclick: move |_| {
                        let result = studio.write().request_revision(now());
                        report(result);
                    },
                    "Request revision"
                }
            }
        }
    }
}
