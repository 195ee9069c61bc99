//! Conversation list panel.
//!
//! Fetches the current user's chats on mount and whenever the `fetch_again`
//! trigger flips, replaces the shared collection with the server's response,
//! and renders one clickable row per chat. A failed fetch leaves the
//! collection untouched and surfaces a single auto-dismissing toast.

use std::sync::Arc;

use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    api::ApiClient,
    model::{Chat, UserInfo},
    state::{ChatState, resolve_fetch},
    storage::{Storage, get_storage},
    ui::toast::ToastManager,
    utils,
};

use super::{avatar::Avatar, group_modal::GroupChatModal, skeleton::LoadingSkeleton};

#[component]
pub fn ChatList(fetch_again: Signal<bool>) -> Element {
    let state = consume_context::<ChatState>();
    let mut logged_user: Signal<Option<UserInfo>> = use_signal(|| None);
    // Bumped at the start of every fetch so a superseded fetch cannot
    // overwrite state with stale results.
    let mut generation: Signal<u64> = use_signal(|| 0);

    let _ = use_resource(move || async move {
        let _ = fetch_again(); // re-run whenever the refresh trigger flips
        let mut state = consume_context::<ChatState>();
        let mut toasts = consume_context::<Signal<ToastManager>>();
        let api = consume_context::<Arc<ApiClient>>();

        let seq = {
            let mut g = generation.write();
            *g += 1;
            *g
        };

        // Secondary identity snapshot, used only for deriving row labels.
        // The session user in context keeps driving the request itself.
        match get_storage().await {
            Ok(stg) => match stg.load_user_info().await {
                Ok(info) => logged_user.set(info),
                Err(e) => warn!("Could not read stored user info: {e:?}"),
            },
            Err(e) => warn!("Could not get storage: {e:?}"),
        }

        let token = state.user().token;
        let fetched = api.fetch_chats(&token).await;
        if *generation.peek() != seq {
            return;
        }
        let (next, err) = resolve_fetch(state.chats(), fetched);
        state.set_chats(next);
        if let Some(e) = err {
            warn!("Could not fetch chats: {e:?}");
            toasts.with_mut(|t| {
                t.error("Something went wrong", "Couldn't load your chats");
            });
        }
    });

    let me = state.user();
    let chats = state.chats();
    let selected = state.selected();
    let label_id = logged_user()
        .map(|u| u.id)
        .unwrap_or_else(|| me.id.clone());

    rsx! {
        div {
            style: "
            display: flex;
            flex-direction: column;
            width: 30%;
            min-width: 16rem;
            background: white;
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 0.75rem;
            box-sizing: border-box;
            ",
            div {
                style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 0 0.25rem 0.75rem 0.25rem;
                ",
                h2 { style: "margin: 0; font-size: 1.25rem;", "My chats" }
                GroupChatModal {
                    button {
                        style: "
                        border: 1px solid #ddd;
                        border-radius: 4px;
                        background: #f0f0f0;
                        padding: 0.375rem 0.75rem;
                        cursor: pointer;
                        ",
                        "+ New group"
                    }
                }
            }
            div {
                style: "
                flex-grow: 1;
                background: #f8f8f8;
                border-radius: 8px;
                padding: 0.75rem;
                overflow-y: auto;
                ",
                if let Some(chats) = chats {
                    if chats.is_empty() {
                        div { style: "text-align: center; color: #666; padding: 2rem;",
                            "No chats yet"
                        }
                    } else {
                        div { style: "display: flex; flex-direction: column; gap: 0.5rem;",
                            for chat in chats.iter() {
                                ChatRow {
                                    key: "{chat.id}",
                                    chat: chat.clone(),
                                    selected: selected.as_deref() == Some(chat.id.as_str()),
                                    viewer_id: me.id.clone(),
                                    label_id: label_id.clone(),
                                }
                            }
                        }
                    }
                } else {
                    LoadingSkeleton {}
                }
            }
        }
    }
}

#[component]
fn ChatRow(chat: Chat, selected: bool, viewer_id: String, label_id: String) -> Element {
    let mut state = consume_context::<ChatState>();
    let title = utils::chat_title(&chat, &label_id);
    let avatar = utils::chat_avatar(&chat, &viewer_id);
    let preview = chat.last_message.as_ref().map(|lm| {
        (
            lm.sender.name.clone(),
            utils::truncate_with_ellipsis(&lm.content, utils::PREVIEW_LIMIT),
        )
    });
    let (bg, fg) = if selected {
        ("goldenrod", "white")
    } else {
        ("#e8e8e8", "black")
    };
    let chat_id = chat.id.clone();

    rsx! {
        div {
            style: "
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 0.5rem 0.75rem;
            border-radius: 8px;
            cursor: pointer;
            background: {bg};
            color: {fg};
            ",
            onclick: move |_| {
                state.select(chat_id.clone());
            },
            Avatar { src: avatar, alt: title.clone() }
            div { style: "min-width: 0;",
                div { style: "font-weight: 500;", "{title}" }
                if let Some((sender, content)) = preview {
                    div { style: "font-size: 0.8rem; opacity: 0.85;",
                        b { "{sender} " }
                        "{content}"
                    }
                }
            }
        }
    }
}
