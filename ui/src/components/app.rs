use std::rc::Rc;

use dioxus::prelude::*;

use atelier_common::debounce::Debouncer;
use atelier_common::nav::{Page, ShellState};

use super::dashboard::DashboardView;
use super::design_studio::DesignStudio;
use super::home::HomeView;
use super::studio_state::{new_studio, now, report, set_root_attribute, sleep_ms, use_shell, use_studio};
use super::toast_stack::ToastStack;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/studio")]
    Studio {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
}

impl Route {
    fn page(&self) -> Page {
        match self {
            Route::Home {} => Page::Home,
            Route::Studio {} => Page::Studio,
            Route::Dashboard {} => Page::Dashboard,
            Route::Admin {} => Page::AdminDashboard,
        }
    }

    fn for_page(page: Page) -> Route {
        match page {
            Page::Home => Route::Home {},
            Page::Studio => Route::Studio {},
            Page::Dashboard => Route::Dashboard {},
            Page::AdminDashboard => Route::Admin {},
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(new_studio()));
    use_context_provider(|| Signal::new(ShellState::default()));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let mut studio = use_studio();
    let mut shell = use_shell();
    let nav = use_navigator();
    let current = use_route::<Route>().page();

    use_effect(move || {
        let attribute = studio.read().theme_view().attribute;
        set_root_attribute("data-theme", attribute);
    });
    let (quiet_ms, breakpoint) = {
        let studio = studio.read();
        (studio.config().resize_debounce_ms, studio.config().mobile_breakpoint_px)
    };
    let debouncer = use_hook(|| Rc::new(Debouncer::new(quiet_ms)));

    let theme = studio.read().theme_view();
    let nav_open = shell.read().nav_open;
    let links: Vec<Page> = vec![Page::Home, Page::Studio, Page::Dashboard];

    rsx! {
        div {
            class: if nav_open { "atelier-app nav-open" } else { "atelier-app" },
            tabindex: "-1",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    shell.write().escape();
                }
            },
            // Close the sidebar once a burst of resizes settles on a wide viewport.
            onresize: move |evt: ResizeEvent| {
                let Ok(size) = evt.get_border_box_size() else {
                    return;
                };
                let width = size.width as u32;
                let generation = debouncer.trigger();
                let debouncer = Rc::clone(&debouncer);
                spawn(async move {
                    sleep_ms(debouncer.quiet_ms() as u64).await;
                    if debouncer.is_current(generation) {
                        shell.write().resized(width, breakpoint);
                    }
                });
            },
            header { class: "site-header",
                div { class: "brand",
                    i { class: "fa-solid fa-gem" }
                    span { "Atelier" }
                }
                nav { class: "main-nav",
                    for link in links.clone() {
                        a {
                            key: "{link.href()}",
                            "data-nav": true,
                            class: if current.is_link_active(link) { "active" } else { "" },
                            onclick: move |_| {
                                studio.write().follow_nav_link(link);
                                shell.write().follow_link();
                                nav.push(Route::for_page(link));
                            },
                            "{link.title()}"
                        }
                    }
                }
                div { class: "header-actions",
                    button {
                        id: "themeToggle",
                        class: "icon-btn",
                        onclick: move |_| {
                            let result = studio.write().toggle_theme(now());
                            report(result);
                        },
                        i { class: "{theme.icon}" }
                    }
                    button {
                        id: "navToggle",
                        class: "icon-btn mobile-only",
                        onclick: move |_| shell.write().toggle_nav(),
                        i { class: "fa-solid fa-bars" }
                    }
                }
            }
            div { class: "mobile-drawer",
                for link in links {
                    a {
                        key: "{link.href()}",
                        onclick: move |_| {
                            studio.write().follow_nav_link(link);
                            shell.write().follow_link();
                            nav.push(Route::for_page(link));
                        },
                        "{link.title()}"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
            ToastStack {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
fn Studio() -> Element {
    rsx! { DesignStudio {} }
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

/// Same dashboard as `/dashboard`; the visible role still comes from the
/// stored role setting.
#[component]
fn Admin() -> Element {
    rsx! { DashboardView {} }
}
