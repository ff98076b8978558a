use dioxus::prelude::*;

use super::approvals_view::ApprovalsPanel;
use super::messages_view::MessagesPanel;
use super::payments_view::PaymentsPanel;
use super::studio_state::{now, report, set_root_attribute, use_shell, use_studio};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Overview,
    Requests,
    Messages,
    Approvals,
    Payments,
    Notifications,
}

impl Section {
    const ALL: [Section; 6] = [
        Section::Overview,
        Section::Requests,
        Section::Messages,
        Section::Approvals,
        Section::Payments,
        Section::Notifications,
    ];

    fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Requests => "Requests",
            Section::Messages => "Messages",
            Section::Approvals => "Approvals",
            Section::Payments => "Payments",
            Section::Notifications => "Notifications",
        }
    }
}

/// Client/admin dashboard shell with a sectioned sidebar.
#[component]
pub fn DashboardView() -> Element {
    let mut studio = use_studio();
    let mut shell = use_shell();
    let mut active = use_signal(|| Section::Overview);

    // First visit: sample notifications. Runs once after mount since the
    // effect only writes.
    use_effect(move || {
        let result = studio.write().seed_notifications(now());
        report(result);
    });

    use_effect(move || {
        let attribute = studio.read().role_view().attribute;
        set_root_attribute("data-role", attribute);
    });

    let role = studio.read().role_view();

    let sidebar_open = shell.read().sidebar_open;
    let current = *active.read();

    rsx! {
        div { class: if sidebar_open { "dashboard sidebar-open" } else { "dashboard" },
            aside { id: "dashSidebar", class: "sidebar",
                nav { class: "sidebar-nav",
                    for section in Section::ALL {
                        a {
                            key: "{section.title()}",
                            class: if section == current { "nav-item active" } else { "nav-item" },
                            onclick: move |_| {
                                active.set(section);
                                shell.write().follow_link();
                            },
                            "{section.title()}"
                        }
                    }
                }
            }
            div {
                id: "dashOverlay",
                class: if sidebar_open { "overlay active" } else { "overlay" },
                onclick: move |_| shell.write().escape(),
            }
            div { class: "dashboard-content",
                div { class: "dashboard-top",
                    button {
                        id: "sidebarToggle",
                        class: "btn small",
                        onclick: move |_| shell.write().toggle_sidebar(),
                        i { class: "fa-solid fa-bars" }
                    }
                    label { class: "switch",
                        input {
                            id: "roleSwitch",
                            r#type: "checkbox",
                            checked: role.switch_checked,
                            onchange: move |_| {
                                let result = studio.write().toggle_role(now());
                                report(result);
                            },
                        }
                        span { id: "roleLabel", "{role.label}" }
                    }
                }
                match current {
                    Section::Overview => rsx! {
                        div { class: "stat-grid",
                            for stat in role.stats {
                                div { key: "{stat.label}", class: "stat-card",
                                    span { class: "stat-label", "{stat.label}" }
                                    strong { class: "stat-value", "{stat.value}" }
                                }
                            }
                        }
                        RequestsTable {}
                        NotificationsFeed {}
                    },
                    Section::Requests => rsx! { RequestsTable {} },
                    Section::Messages => rsx! { MessagesPanel {} },
                    Section::Approvals => rsx! { ApprovalsPanel {} },
                    Section::Payments => rsx! { PaymentsPanel {} },
                    Section::Notifications => rsx! { NotificationsFeed {} },
                }
            }
        }
    }
}

/// Latest submitted requests with a per-row approve button.
#[component]
fn RequestsTable() -> Element {
    let mut studio = use_studio();
    let view = studio.read().requests_view();

    rsx! {
        div { class: "card pad",
            h3 { "Design requests" }
            table { class: "table",
                thead {
                    tr { th { "ID" } th { "Summary" } th { "Status" } th { "" } }
                }
                tbody { id: "requestTableBody",
                    if let Some(empty) = view.empty_message {
                        tr { td { colspan: "4", class: "helper", "{empty}" } }
                    }
                    for row in view.rows.iter() {
                        {
                            let request_id = row.id.clone();
                            rsx! {
                                tr { key: "{row.id}",
                                    td { "{row.id}" }
                                    td { "{row.summary}" }
                                    td {
                                        span { class: "badge",
                                            i { class: "fa-solid fa-sparkles" }
                                            "{row.status}"
                                        }
                                    }
                                    td {
                                        button {
                                            class: "btn small",
                                            "data-act": "approve",
                                            onclick: move |_| {
                                                let result = studio.write().approve_request(&request_id, now());
                                                report(result);
                                            },
                                            "Approve"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationsFeed() -> Element {
    let studio = use_studio();
    let view = studio.read().notifications_view();

    rsx! {
        div { id: "notificationList", class: "card pad",
            h3 { "Notifications" }
            for (i, row) in view.rows.iter().enumerate() {
                div { key: "{i}", class: "card pad flat notification-item",
                    strong { "{row.title}" }
                    div { class: "helper", "{row.posted_at}" }
                    div { class: "divider" }
                    p { "{row.body}" }
                }
            }
        }
    }
}
