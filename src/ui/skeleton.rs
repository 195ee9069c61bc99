use dioxus::prelude::*;

/// Placeholder shown while the chat collection is still unresolved.
#[component]
pub fn LoadingSkeleton() -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 0.5rem;",
            for i in 0..7 {
                div { key: "{i}", class: "skeleton-bar" }
            }
        }
    }
}
