use dioxus::prelude::*;

use super::upload_surface::SurfaceSize;

const TIERS: [SurfaceSize; 4] = [
    SurfaceSize::Sm,
    SurfaceSize::Md,
    SurfaceSize::Lg,
    SurfaceSize::Xl,
];

#[component]
pub fn SizePicker(value: SurfaceSize, on_select: Callback<SurfaceSize, ()>) -> Element {
    rsx! {
        div { class: "size-picker",
            {
                TIERS
                    .into_iter()
                    .map(move |tier| {
                        let selected_class = if tier == value { "selected" } else { "" };
                        rsx! {
                            button {
                                class: "size-option {selected_class}",
                                onclick: move |_e| { on_select(tier) },
                                "{tier}"
                            }
                        }
                    })
            }
        }
    }
}
