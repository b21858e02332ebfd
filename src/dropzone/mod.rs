//! Drag-and-drop detection engine.
//!
//! [`use_dropzone`] owns the moving parts behind an upload surface: the drag
//! phase, the hidden file input and its programmatic opener, and the
//! screening that settles a drop or picker selection into exactly one
//! accepted or rejected outcome. Components wire the returned [`Dropzone`]
//! bindings onto their own markup, so the engine stays independent of any
//! particular look.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

mod accept;
mod handle;
mod state;

pub use accept::Accept;
pub use handle::OpenHandle;
pub use state::{DragPhase, DragUpdate};

use crate::error::{FileRejection, RejectionReason, UploadError};

/// Engine configuration, captured fresh on every render.
///
/// `max_files` values below 1 are treated as 1. With `no_click` set, clicks
/// on the root binding do nothing and the picker opens only through
/// [`Dropzone::open`].
#[derive(Clone, Default)]
pub struct DropzoneOptions {
    pub accept: Accept,
    pub max_files: usize,
    pub no_click: bool,
    pub on_drop_accepted: Option<Callback<Vec<FileData>>>,
    pub on_drop_rejected: Option<Callback<Vec<FileRejection>>>,
    pub on_error: Option<Callback<UploadError>>,
}

/// Live bindings returned by [`use_dropzone`].
///
/// The event callbacks go onto the root element and the hidden input; they
/// are plain [`Callback`]s, so cloning the struct is cheap and handlers can
/// be attached field by field.
#[derive(Clone)]
pub struct Dropzone {
    phase: Signal<DragPhase>,
    input_id: String,
    pub on_drag_over: Callback<Event<DragData>>,
    pub on_drag_leave: Callback<Event<DragData>>,
    pub on_drop: Callback<Event<DragData>>,
    pub on_click: Callback<Event<MouseData>>,
    pub on_input_change: Callback<Event<FormData>>,
    /// Programmatically open the native file picker.
    pub open: Callback<()>,
}

impl Dropzone {
    /// True exactly while a file drag hovers the bound root element.
    pub fn is_drag_active(&self) -> bool {
        self.phase.read().is_active()
    }

    /// DOM id the hidden file input must carry for [`Dropzone::open`] to
    /// reach it. Unique per hook instance.
    pub fn input_id(&self) -> String {
        self.input_id.clone()
    }
}

static NEXT_INPUT_ID: AtomicU64 = AtomicU64::new(0);

/// Hook version of the detection engine.
///
/// The handlers read the options passed on the current render, so changing
/// `accept` or `max_files` between renders applies to the next settle
/// without remounting.
pub fn use_dropzone(options: DropzoneOptions) -> Dropzone {
    let phase = use_signal(DragPhase::default);
    let input_id = use_hook(|| {
        format!(
            "dropsurface-input-{}",
            NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed)
        )
    });

    let on_drag_over = use_callback(move |evt: Event<DragData>| {
        evt.prevent_default();
        advance(phase, DragUpdate::Enter);
    });
    let on_drag_leave = use_callback(move |_evt: Event<DragData>| {
        advance(phase, DragUpdate::Leave);
    });

    let drop_options = options.clone();
    let on_drop = use_callback(move |evt: Event<DragData>| {
        evt.prevent_default();
        advance(phase, DragUpdate::Drop);
        settle(&drop_options, evt.files());
    });

    let change_options = options.clone();
    let on_input_change = use_callback(move |evt: Event<FormData>| {
        settle(&change_options, evt.files());
    });

    let open_id = input_id.clone();
    let on_error = options.on_error;
    let open = use_callback(move |_: ()| {
        let js = format!("document.getElementById({:?}).click();", open_id);
        spawn(async move {
            if let Err(err) = document::eval(&js).await {
                if let Some(cb) = on_error {
                    cb.call(UploadError::Dialog(err.to_string()));
                }
            }
        });
    });

    let no_click = options.no_click;
    let on_click = use_callback(move |_evt: Event<MouseData>| {
        if !no_click {
            open.call(());
        }
    });

    Dropzone {
        phase,
        input_id,
        on_drag_over,
        on_drag_leave,
        on_drop,
        on_click,
        on_input_change,
        open,
    }
}

fn advance(mut phase: Signal<DragPhase>, update: DragUpdate) {
    let current = *phase.peek();
    let next = current.apply(update);
    if next != current {
        phase.set(next);
    }
}

#[derive(Debug, PartialEq)]
enum Screen {
    Accepted,
    Rejected(Vec<FileRejection>),
}

/// Apply the count and type rules to a selection by file name. `None` means
/// the selection was empty and nothing should fire.
fn screen(names: &[String], accept: &Accept, max_files: usize) -> Option<Screen> {
    if names.is_empty() {
        return None;
    }
    if names.len() > max_files.max(1) {
        // Over the limit, the whole selection is turned away.
        return Some(Screen::Rejected(
            names
                .iter()
                .map(|n| FileRejection::new(n.clone(), RejectionReason::TooManyFiles))
                .collect(),
        ));
    }
    let rejections: Vec<FileRejection> = names
        .iter()
        .filter(|n| !accept.allows(n))
        .map(|n| FileRejection::new(n.clone(), RejectionReason::InvalidType))
        .collect();
    if rejections.is_empty() {
        Some(Screen::Accepted)
    } else {
        Some(Screen::Rejected(rejections))
    }
}

/// Route a settled selection to exactly one of the outcome callbacks.
fn settle(options: &DropzoneOptions, files: Vec<FileData>) {
    let names: Vec<String> = files.iter().map(|f| f.name()).collect();
    match screen(&names, &options.accept, options.max_files) {
        None => debug!("selection settled with no files"),
        Some(Screen::Accepted) => {
            debug!("accepted {} file(s)", files.len());
            if let Some(cb) = options.on_drop_accepted {
                cb.call(files);
            }
        }
        Some(Screen::Rejected(rejections)) => {
            debug!("rejected {} of {} file(s)", rejections.len(), files.len());
            if let Some(cb) = options.on_drop_rejected {
                cb.call(rejections);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_selection_settles_silently() {
        assert_eq!(screen(&[], &Accept::images(), 1), None);
    }

    #[test]
    fn single_matching_image_is_accepted() {
        let outcome = screen(&names(&["photo.png"]), &Accept::images(), 1);
        assert_eq!(outcome, Some(Screen::Accepted));
    }

    #[test]
    fn full_batch_up_to_the_limit_is_accepted() {
        let outcome = screen(
            &names(&["a.png", "b.png", "c.png"]),
            &Accept::images(),
            3,
        );
        assert_eq!(outcome, Some(Screen::Accepted));
    }

    #[test]
    fn over_the_limit_rejects_every_file() {
        let outcome = screen(&names(&["a.png", "b.png"]), &Accept::images(), 1);
        let Some(Screen::Rejected(rejections)) = outcome else {
            panic!("expected a rejection");
        };
        assert_eq!(rejections.len(), 2);
        assert!(rejections
            .iter()
            .all(|r| r.reason == RejectionReason::TooManyFiles));
    }

    #[test]
    fn mime_mismatch_rejects_only_the_offenders() {
        let outcome = screen(
            &names(&["a.png", "doc.pdf", "b.png"]),
            &Accept::images(),
            5,
        );
        let Some(Screen::Rejected(rejections)) = outcome else {
            panic!("expected a rejection");
        };
        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].file, "doc.pdf");
        assert_eq!(rejections[0].reason, RejectionReason::InvalidType);
    }

    #[test]
    fn single_mismatch_is_rejected() {
        let outcome = screen(&names(&["doc.pdf"]), &Accept::images(), 1);
        let Some(Screen::Rejected(rejections)) = outcome else {
            panic!("expected a rejection");
        };
        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].reason, RejectionReason::InvalidType);
    }

    #[test]
    fn count_rule_wins_over_the_type_rule() {
        let outcome = screen(&names(&["doc.pdf", "a.png"]), &Accept::images(), 1);
        let Some(Screen::Rejected(rejections)) = outcome else {
            panic!("expected a rejection");
        };
        assert!(rejections
            .iter()
            .all(|r| r.reason == RejectionReason::TooManyFiles));
    }

    #[test]
    fn zero_max_files_still_admits_one_file() {
        let outcome = screen(&names(&["photo.png"]), &Accept::images(), 0);
        assert_eq!(outcome, Some(Screen::Accepted));
    }
}
