//! Drag-and-drop upload surface.

use std::fmt;

use dioxus::html::FileData;
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

use crate::dropzone::{use_dropzone, Accept, DropzoneOptions, OpenHandle};
use crate::error::{FileRejection, UploadError};
use crate::utils::cn;

/// Overlay scale tier. Conversion from an unrecognized string falls back to
/// [`SurfaceSize::Md`], so a bogus value renders exactly like the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl SurfaceSize {
    pub fn icon_class(self) -> &'static str {
        match self {
            SurfaceSize::Sm => "upload-icon--sm",
            SurfaceSize::Md => "upload-icon--md",
            SurfaceSize::Lg => "upload-icon--lg",
            SurfaceSize::Xl => "upload-icon--xl",
        }
    }

    pub fn label_class(self) -> &'static str {
        match self {
            SurfaceSize::Sm => "upload-label--sm",
            SurfaceSize::Md => "upload-label--md",
            SurfaceSize::Lg => "upload-label--lg",
            SurfaceSize::Xl => "upload-label--xl",
        }
    }
}

impl From<&str> for SurfaceSize {
    fn from(value: &str) -> Self {
        match value {
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            _ => Self::Md,
        }
    }
}

impl fmt::Display for SurfaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        };
        write!(f, "{name}")
    }
}

/// Drag and drop zone for uploading files.
///
/// Renders `children` normally and cross-fades to an icon-and-label prompt
/// while a file drag hovers the surface. Clicking the surface itself does
/// nothing; the picker opens only through the caller's [`OpenHandle`].
/// Accepted selections arrive through `on_files` in the order the engine
/// reports them; rejections and dialog failures are logged and reported
/// through `on_error`.
#[component]
pub fn UploadSurface(
    /// Overlay icon and label scale.
    #[props(into, default)]
    size: SurfaceSize,
    /// Extra classes appended to the content layer.
    #[props(into, default)]
    class: String,
    /// Prompt shown while a drag hovers the surface.
    #[props(into, default = "Upload File".to_string())]
    label: String,
    /// Caller-owned handle bound to the file picker after mount.
    open: OpenHandle,
    /// Accepted MIME patterns, images by default.
    #[props(default)]
    accept: Accept,
    /// Most files one selection may carry.
    #[props(default = 1)]
    max_files: usize,
    /// Receives each accepted selection.
    #[props(default)]
    on_files: Option<Callback<Vec<FileData>>>,
    /// Receives rejections and engine failures.
    #[props(default)]
    on_error: Option<Callback<UploadError>>,
    children: Element,
) -> Element {
    let on_drop_rejected = use_callback(move |rejections: Vec<FileRejection>| {
        let err = UploadError::rejected(rejections);
        warn!("upload rejected: {err}");
        if let Some(cb) = on_error {
            cb.call(err);
        }
    });
    let on_engine_error = use_callback(move |err: UploadError| {
        error!("upload engine failed: {err}");
        if let Some(cb) = on_error {
            cb.call(err);
        }
    });

    let dropzone = use_dropzone(DropzoneOptions {
        accept: accept.clone(),
        max_files,
        no_click: true,
        on_drop_accepted: on_files,
        on_drop_rejected: Some(on_drop_rejected),
        on_error: Some(on_engine_error),
    });

    // Bind the picker opener once the surface exists, and disarm the handle
    // when the surface goes away so stale invocations stay harmless.
    let opener = dropzone.open;
    let bind_handle = open.clone();
    use_effect(move || {
        bind_handle.bind(move || opener.call(()));
    });
    let release_handle = open;
    use_drop(move || release_handle.release());

    let active = dropzone.is_drag_active();
    let content_class = cn([
        "upload-content",
        class.as_str(),
        if active { "upload-content--hidden" } else { "" },
    ]);
    let overlay_class = cn([
        "upload-overlay",
        if active { "upload-overlay--visible" } else { "" },
    ]);

    rsx! {
        div {
            class: "upload-surface",
            ondragover: move |evt| dropzone.on_drag_over.call(evt),
            ondragleave: move |evt| dropzone.on_drag_leave.call(evt),
            ondrop: move |evt| dropzone.on_drop.call(evt),
            onclick: move |evt| dropzone.on_click.call(evt),

            input {
                id: dropzone.input_id(),
                class: "upload-input",
                r#type: "file",
                accept: accept.to_attr(),
                multiple: max_files > 1,
                onchange: move |evt| dropzone.on_input_change.call(evt),
            }

            div { class: "{content_class}", {children} }

            div { class: "{overlay_class}",
                UploadIcon { class: size.icon_class() }
                h6 { class: cn(["upload-label", size.label_class()]), "{label}" }
            }
        }
    }
}

/// Cloud-arrow glyph shown by the drag overlay.
#[component]
fn UploadIcon(#[props(into, default)] class: String) -> Element {
    rsx! {
        svg {
            class: cn(["upload-icon", class.as_str()]),
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M20 16.6A4.5 4.5 0 0 0 17.5 8.5h-1.8A7 7 0 1 0 4 14.9" }
            path { d: "M12 12v9" }
            path { d: "m8 16 4-4 4 4" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_size_renders_like_md() {
        let bogus = SurfaceSize::from("bogus");
        assert_eq!(bogus, SurfaceSize::Md);
        assert_eq!(bogus.icon_class(), SurfaceSize::Md.icon_class());
        assert_eq!(bogus.label_class(), SurfaceSize::Md.label_class());
    }

    #[test]
    fn known_tiers_parse() {
        assert_eq!(SurfaceSize::from("sm"), SurfaceSize::Sm);
        assert_eq!(SurfaceSize::from("md"), SurfaceSize::Md);
        assert_eq!(SurfaceSize::from("lg"), SurfaceSize::Lg);
        assert_eq!(SurfaceSize::from("xl"), SurfaceSize::Xl);
    }

    #[test]
    fn icon_and_label_tiers_scale_together() {
        let tiers = [
            SurfaceSize::Sm,
            SurfaceSize::Md,
            SurfaceSize::Lg,
            SurfaceSize::Xl,
        ];
        for pair in tiers.windows(2) {
            assert_ne!(pair[0].icon_class(), pair[1].icon_class());
            assert_ne!(pair[0].label_class(), pair[1].label_class());
        }
        for tier in tiers {
            let suffix = tier.to_string();
            assert!(tier.icon_class().ends_with(&suffix));
            assert!(tier.label_class().ends_with(&suffix));
        }
    }
}
