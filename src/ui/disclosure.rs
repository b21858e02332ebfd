use dioxus::prelude::*;

#[component]
pub fn Disclosure(
    #[props(into)] summary: String,
    #[props(default)] open: bool,
    children: Element,
) -> Element {
    let mut expanded = use_signal(|| open);
    let marker = if expanded() { "▾" } else { "▸" };
    rsx! {
        div { class: "disclosure",
            button {
                class: "disclosure-toggle",
                onclick: move |_e| {
                    expanded.toggle();
                },
                "{marker} {summary}"
            }
            if expanded() {
                div { class: "disclosure-body", {children} }
            }
        }
    }
}
