use dioxus::{logger::tracing::warn, prelude::*};

pub mod api;
pub mod model;
pub mod state;
mod storage;
mod ui;
mod utils;

use model::UserInfo;
use state::ChatState;
use storage::{Storage, get_storage};
use ui::chat_detail::ChatDetail;
use ui::chat_list::ChatList;
use ui::toast::{ToastManager, Toasts};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // The sign-in flow persists the session record; we only read it back.
    let session = use_resource(|| async {
        let storage = match get_storage().await {
            Ok(s) => s,
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                return None;
            }
        };
        match storage.load_user_info().await {
            Ok(info) => info,
            Err(e) => {
                warn!("Could not read stored user info: {e:?}");
                None
            }
        }
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if session.read().is_none() {
            "Loading..."
        } else {
            if let Some(info) = session().flatten() {
                Shell { session: info }
            } else {
                SignedOut {}
            }
        }
    }
}

/// Provides the shared state contexts and mounts the router.
#[component]
fn Shell(session: UserInfo) -> Element {
    use_context_provider(|| ChatState::new(session.clone()));
    use_context_provider(|| Signal::new(ToastManager::default()));
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn SignedOut() -> Element {
    rsx! {
        div { style: "text-align: center; padding: 4rem 1rem; color: #666;",
            "No session found. Sign in first, then come back here."
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
        Toasts {}
    }
}

#[component]
fn Home() -> Element {
    // Flipped by collaborators that change the chat list from the detail
    // side; the panel refetches whenever it changes.
    let fetch_again = use_signal(|| false);
    rsx! {
        div {
            style: "
            display: flex;
            gap: 1rem;
            height: 100vh;
            padding: 1rem;
            box-sizing: border-box;
            background: #ece5dd;
            ",
            ChatList { fetch_again }
            ChatDetail {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
