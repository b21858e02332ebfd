use dioxus::{logger::tracing::info, prelude::*};

/// Placeholder page for checking that routing and logging are wired up.
#[component]
pub fn TestPanel() -> Element {
    use_effect(|| {
        info!("test panel mounted");
    });

    rsx! {
        div {
            h1 { "Test Panel" }
        }
    }
}
