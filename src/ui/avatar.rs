use dioxus::prelude::*;

#[component]
pub fn Avatar(src: String, alt: String) -> Element {
    rsx! {
        img {
            style: "
            width: 2rem;
            height: 2rem;
            border-radius: 50%;
            object-fit: cover;
            flex-shrink: 0;
            background: #ddd;
            ",
            src,
            alt,
        }
    }
}
