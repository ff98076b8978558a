use dioxus::prelude::*;

use atelier_common::design::DesignAction;
use atelier_common::upload::{FileInfo, UploadPreview};

use super::approvals_view::ApprovalsPanel;
use super::messages_view::MessagesPanel;
use super::payments_view::PaymentsPanel;
use super::studio_state::{now, report, use_studio};

/// The configurator with live preview, reference uploads and submission.
#[component]
pub fn DesignStudio() -> Element {
    let mut studio = use_studio();
    let mut uploads = use_signal(|| None::<(UploadPreview, Vec<String>)>);

    use_drop(move || {
        if let Ok(current) = uploads.try_peek() {
            if let Some((_, urls)) = current.as_ref() {
                revoke_urls(urls);
            }
        }
    });

    let view = studio.read().design_view();

    rsx! {
        section { id: "designStudio", class: "studio",
            div { class: "studio-grid",
                div { class: "card pad preview",
                    svg { view_box: "0 0 120 120", width: "220", height: "220",
                        circle { id: "svgMetal", cx: "60", cy: "70", r: "34", fill: "none",
                            stroke: "{view.metal_fill}", stroke_width: "10" }
                        polygon { id: "svgGem", points: "60,16 74,36 60,50 46,36",
                            fill: "{view.gem_fill}" }
                    }
                    p { id: "previewLabel", class: "preview-label", "{view.preview_label}" }
                }

                div { class: "card pad options",
                    h3 { "Piece" }
                    div { class: "chip-row",
                        for button in view.types.clone() {
                            button {
                                key: "{button.label}",
                                class: if button.active { "chip active" } else { "chip" },
                                "data-type": "{button.label}",
                                onclick: move |_| {
                                    let result = studio.write().update_design(DesignAction::SelectType(button.value), now());
                                    report(result);
                                },
                                "{button.label}"
                            }
                        }
                    }
                    h3 { "Metal" }
                    div { class: "chip-row",
                        for button in view.metals.clone() {
                            button {
                                key: "{button.label}",
                                class: if button.active { "chip active" } else { "chip" },
                                "data-metal": "{button.label}",
                                onclick: move |_| {
                                    let result = studio.write().update_design(DesignAction::SelectMetal(button.value), now());
                                    report(result);
                                },
                                "{button.label}"
                            }
                        }
                    }
                    h3 { "Gemstone" }
                    div { class: "chip-row",
                        for button in view.gems.clone() {
                            button {
                                key: "{button.label}",
                                class: if button.active { "chip active" } else { "chip" },
                                "data-gem": "{button.label}",
                                onclick: move |_| {
                                    let result = studio.write().update_design(DesignAction::SelectGem(button.value), now());
                                    report(result);
                                },
                                "{button.label}"
                            }
                        }
                    }

                    label { r#for: "designNotes", "Notes for your designer" }
                    textarea {
                        id: "designNotes",
                        placeholder: "Engraving, sizing, inspiration...",
                        value: "{view.draft.notes}",
                        oninput: move |evt| {
                            let result = studio.write().update_design(DesignAction::EditNotes(evt.value()), now());
                            report(result);
                        },
                    }

                    label { r#for: "designUpload", "Reference images" }
                    input {
                        id: "designUpload",
                        r#type: "file",
                        multiple: true,
                        onchange: move |evt| {
                            let files = chosen_files(&evt);
                            let urls = thumbnail_urls(&files);
                            let preview = studio.write().preview_uploads(&files, now());
                            if let Some((_, old)) = uploads.replace(Some((preview, urls))) {
                                revoke_urls(&old);
                            }
                        },
                    }
                    UploadList { uploads: uploads.read().clone() }

                    button {
                        id: "submitDesign",
                        class: "btn primary",
                        onclick: move |_| {
                            let result = studio.write().submit_design(now());
                            report(result);
                        },
                        "Submit design request"
                    }
                }
            }

            div { class: "studio-panels",
                MessagesPanel {}
                ApprovalsPanel {}
                PaymentsPanel {}
            }
        }
    }
}

#[component]
fn UploadList(uploads: Option<(UploadPreview, Vec<String>)>) -> Element {
    let Some((preview, urls)) = uploads else {
        return rsx! {};
    };

    rsx! {
        div { id: "uploadPreview", class: "upload-list",
            if let Some(empty) = preview.empty_message {
                p { class: "helper", "{empty}" }
            }
            for (i, row) in preview.rows.iter().enumerate() {
                div { key: "{i}", class: "card pad flat",
                    div {
                        strong { "{row.name}" }
                        div { class: "helper", "{row.size_label}" }
                    }
                    if row.thumbnail {
                        if let Some(url) = urls.get(i).filter(|u| !u.is_empty()) {
                            img { class: "upload-thumb", alt: "Upload preview", src: "{url}" }
                        }
                    }
                }
            }
        }
    }
}

/// Metadata for the files picked in the upload input.
fn chosen_files(evt: &FormEvent) -> Vec<FileInfo> {
    evt.files()
        .into_iter()
        .map(|file| FileInfo {
            name: file.name(),
            size_bytes: file.size(),
            mime: file.content_type().unwrap_or_default(),
        })
        .collect()
}

/// An object URL per chosen image, empty for other files. Only browsers
/// can hand out object URLs; other hosts list the files without
/// thumbnails.
fn thumbnail_urls(files: &[FileInfo]) -> Vec<String> {
    #[cfg(target_family = "wasm")]
    {
        use wasm_bindgen::JsCast;

        let list = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("designUpload"))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files());
        files
            .iter()
            .enumerate()
            .map(|(idx, info)| {
                if !info.mime.starts_with("image/") {
                    return String::new();
                }
                list.as_ref()
                    .and_then(|l| l.get(idx as u32))
                    .and_then(|file| web_sys::Url::create_object_url_with_blob(&file).ok())
                    .unwrap_or_default()
            })
            .collect()
    }
    #[cfg(not(target_family = "wasm"))]
    {
        vec![String::new(); files.len()]
    }
}

/// Release object URLs from a previous selection.
fn revoke_urls(urls: &[String]) {
    #[cfg(target_family = "wasm")]
    for url in urls.iter().filter(|u| !u.is_empty()) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            tracing::debug!("Could not revoke {url}: {:?}", e);
        }
    }
    #[cfg(not(target_family = "wasm"))]
    let _ = urls;
}
