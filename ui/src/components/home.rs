use dioxus::prelude::*;

use atelier_common::validation::{Field, FormOutcome};

use super::app::Route;
use super::studio_state::{now, use_studio};

/// Marketing landing page with a consultation form.
#[component]
pub fn HomeView() -> Element {
    let nav = use_navigator();

    rsx! {
        section { class: "hero",
            h1 { "Custom jewelry, designed with you." }
            p { class: "lead",
                "Choose a piece, a metal and a stone, then refine it with a designer "
                "until it is exactly right."
            }
            div { class: "btn-row",
                button {
                    class: "btn primary",
                    "data-link": "design-studio.html",
                    onclick: move |_| { nav.push(Route::Studio {}); },
                    "Start designing"
                }
                button {
                    class: "btn",
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    "View dashboard"
                }
            }
        }
        ConsultationForm {}
    }
}

#[component]
fn ConsultationForm() -> Element {
    let mut studio = use_studio();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut idea = use_signal(String::new);
    let mut invalid = use_signal(Vec::<String>::new);

    let border = move |field: &str| {
        if invalid.read().iter().any(|f| f == field) {
            "border-color: rgba(214,180,106,0.55)"
        } else {
            ""
        }
    };

    rsx! {
        form {
            class: "card pad consultation",
            "data-validate": true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let (n, e, i) = (name.read().clone(), email.read().clone(), idea.read().clone());
                let fields = [
                    Field::required("name", &n),
                    Field::required("email", &e),
                    Field::optional("idea", &i),
                ];
                let outcome = studio.write().submit_form(&fields, now());
                let missing = match outcome {
                    FormOutcome::Blocked { missing } => missing,
                    FormOutcome::Submitted => Vec::new(),
                };
                invalid.set(missing);
            },
            h2 { "Book a consultation" }
            input {
                name: "name",
                placeholder: "Your name",
                required: true,
                style: border("name"),
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                name: "email",
                r#type: "email",
                placeholder: "Email",
                required: true,
                style: border("email"),
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            textarea {
                name: "idea",
                placeholder: "Tell us about the piece you have in mind",
                value: "{idea}",
                oninput: move |evt| idea.set(evt.value()),
            }
            button { class: "btn primary", r#type: "submit", "Request consultation" }
        }
    }
}
