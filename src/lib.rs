//! Drag-and-drop upload surface components for Dioxus.
//!
//! [`UploadSurface`] renders its children normally and cross-fades to an
//! upload prompt while files hover over it; [`use_dropzone`] is the engine
//! behind it and can be wired onto custom surfaces directly.

use dioxus::prelude::*;

pub mod dropzone;
pub mod error;
mod ui;
mod utils;

pub use dropzone::{use_dropzone, Accept, DragPhase, DragUpdate, Dropzone, DropzoneOptions, OpenHandle};
pub use error::{FileRejection, RejectionReason, UploadError};
pub use ui::{SurfaceSize, UploadSurface};

use ui::home::Home;
use ui::test_panel::TestPanel;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/test")]
    TestPanel {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
