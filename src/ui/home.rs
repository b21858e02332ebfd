//! Demo gallery page.
//!
//! Exercises the upload surface the way an owning application would: it
//! holds the open handle, forwards accepted files into a coroutine that
//! reads them one at a time, and renders rejection details when a drop is
//! turned away.

use anyhow::anyhow;
use dioxus::html::FileData;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;

use crate::dropzone::{Accept, OpenHandle};
use crate::error::UploadError;
use crate::ui::disclosure::Disclosure;
use crate::ui::size_picker::SizePicker;
use crate::ui::upload_surface::{SurfaceSize, UploadSurface};
use crate::utils::format_bytes;

enum GalleryMessage {
    Load(Vec<FileData>),
}

#[derive(Clone, PartialEq)]
struct LoadedFile {
    name: String,
    len: usize,
}

async fn read_file(file: FileData) -> anyhow::Result<LoadedFile> {
    let name = file.name();
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| anyhow!("reading {name}: {e}"))?;
    Ok(LoadedFile {
        name,
        len: bytes.len(),
    })
}

#[component]
pub fn Home() -> Element {
    let mut loaded = use_signal(Vec::<LoadedFile>::new);
    let mut last_error = use_signal(|| Option::<UploadError>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut size = use_signal(SurfaceSize::default);
    let picker = use_hook(OpenHandle::new);

    // Accepted batches queue up here, so files from one drop are fully read
    // before the next drop is touched.
    let loader = use_coroutine(move |mut rx: UnboundedReceiver<GalleryMessage>| async move {
        while let Some(GalleryMessage::Load(files)) = rx.next().await {
            let mut failed = false;
            for file in files {
                let name = file.name();
                status.set(Some(format!("Reading {name}…")));
                match read_file(file).await {
                    Ok(entry) => {
                        info!("loaded {} ({})", entry.name, format_bytes(entry.len));
                        loaded.with_mut(|l| l.push(entry));
                    }
                    Err(e) => {
                        warn!("{e}");
                        status.set(Some(format!("Could not read {name}: {e}")));
                        failed = true;
                    }
                }
            }
            if !failed {
                status.set(None);
            }
        }
    });

    let browse = picker.clone();

    rsx! {
        div { class: "gallery-page",
            header { class: "gallery-header",
                h1 { "Upload gallery" }
                p { "Drag images onto the board, or browse for them with the button." }
            }

            div { class: "gallery-controls",
                SizePicker { value: size(), on_select: move |s| size.set(s) }
                button {
                    class: "browse-button",
                    onclick: move |_e| browse.open(),
                    "Browse…"
                }
            }

            UploadSurface {
                size: size(),
                label: "Drop images to add them",
                class: "gallery-board",
                open: picker.clone(),
                accept: Accept::images(),
                max_files: 4,
                on_files: move |files: Vec<FileData>| {
                    last_error.set(None);
                    loader.send(GalleryMessage::Load(files));
                },
                on_error: move |err: UploadError| {
                    last_error.set(Some(err));
                },

                div { class: "gallery-grid",
                    if loaded.read().is_empty() {
                        p { class: "gallery-empty", "Nothing here yet." }
                    }
                    for entry in loaded.read().iter() {
                        div { class: "gallery-card",
                            span { class: "gallery-card-name", "{entry.name}" }
                            span { class: "gallery-card-size", "{format_bytes(entry.len)}" }
                        }
                    }
                }
            }

            if let Some(err) = last_error() {
                div { class: "error-banner",
                    strong { "{err}" }
                    if let Some(details) = rejection_details(&err) {
                        Disclosure { summary: "Rejected files",
                            pre { class: "error-details", "{details}" }
                        }
                    }
                }
            }

            if let Some(line) = status() {
                p { class: "status-line", "{line}" }
            }
        }
    }
}

fn rejection_details(err: &UploadError) -> Option<String> {
    let rejections = err.rejections()?;
    serde_json::to_string_pretty(rejections).ok()
}
