use dioxus::prelude::*;

use crate::state::ChatState;
use crate::utils;

/// Read-only pane for the open conversation. The message view itself lives
/// elsewhere; this only shows which chat is selected.
#[component]
pub fn ChatDetail() -> Element {
    let state = consume_context::<ChatState>();
    let me = state.user();
    let header = state
        .selected_chat()
        .map(|chat| (utils::chat_title(&chat, &me.id), chat.is_group_chat, chat.users.len()));

    rsx! {
        div {
            style: "
            flex-grow: 1;
            background: white;
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 1rem;
            box-sizing: border-box;
            ",
            if let Some((title, is_group, member_count)) = header {
                h2 { style: "margin: 0 0 0.5rem 0;", "{title}" }
                if is_group {
                    p { style: "color: #666; margin: 0;", "{member_count} members" }
                }
            } else {
                div { style: "text-align: center; color: #666; padding: 4rem 1rem;",
                    "Select a chat to start talking"
                }
            }
        }
    }
}
