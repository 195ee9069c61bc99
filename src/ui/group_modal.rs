//! Create-group modal.
//!
//! The chat-list panel only hosts the trigger; everything about group
//! creation lives here. The modal collects a name, searches users to pick
//! members, and submits; the new chat is prepended to the shared collection
//! and selected.

use std::sync::Arc;

use dioxus::{logger::tracing::warn, prelude::*};

use crate::{api::ApiClient, model::User, state::ChatState, ui::toast::ToastManager};

/// Wraps its children as the click target that opens the modal.
#[component]
pub fn GroupChatModal(children: Element) -> Element {
    let mut open = use_signal(|| false);
    rsx! {
        span {
            onclick: move |_| {
                open.set(true);
            },
            {children}
        }
        if open() {
            ModalBody { open }
        }
    }
}

#[component]
fn ModalBody(mut open: Signal<bool>) -> Element {
    let mut name = use_signal(String::new);
    let mut results: Signal<Vec<User>> = use_signal(Vec::new);
    let mut members: Signal<Vec<User>> = use_signal(Vec::new);
    let mut busy = use_signal(|| false);
    // Searches carry the same guard as the chat fetch: a slower, older
    // response must not overwrite a newer one.
    let mut search_seq: Signal<u64> = use_signal(|| 0);

    let mut run_search = move |query: String| {
        let seq = {
            let mut s = search_seq.write();
            *s += 1;
            *s
        };
        spawn(async move {
            let query = query.trim().to_string();
            if query.is_empty() {
                apply_search_results(results, search_seq, seq, vec![]);
                return;
            }
            let state = consume_context::<ChatState>();
            let api = consume_context::<Arc<ApiClient>>();
            let token = state.user().token;
            match api.search_users(&token, &query).await {
                Ok(users) => apply_search_results(results, search_seq, seq, users),
                Err(e) => warn!("Could not search users: {e:?}"),
            }
        });
    };

    let mut add_member = move |user: User| {
        members.with_mut(|m| {
            if !m.iter().any(|u| u.id == user.id) {
                m.push(user);
            }
        });
    };

    let mut remove_member = move |id: String| {
        members.with_mut(|m| m.retain(|u| u.id != id));
    };

    let submit = move |_| async move {
        if busy() {
            return;
        }
        let mut state = consume_context::<ChatState>();
        let api = consume_context::<Arc<ApiClient>>();
        let mut toasts = consume_context::<Signal<ToastManager>>();

        let group_name = name().trim().to_string();
        let member_ids: Vec<String> = members().iter().map(|u| u.id.clone()).collect();
        if group_name.is_empty() || member_ids.len() < 2 {
            toasts.with_mut(|t| {
                t.error("Can't create group", "Pick a name and at least two members");
            });
            return;
        }

        busy.set(true);
        let token = state.user().token;
        match api.create_group_chat(&token, &group_name, &member_ids).await {
            Ok(chat) => {
                let id = chat.id.clone();
                state.prepend_chat(chat);
                state.select(id);
                open.set(false);
            }
            Err(e) => {
                warn!("Could not create group: {e:?}");
                toasts.with_mut(|t| {
                    t.error("Something went wrong", "Couldn't create the group");
                });
            }
        }
        busy.set(false);
    };

    rsx! {
        div {
            style: "
            position: fixed;
            inset: 0;
            background: rgba(0,0,0,.4);
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 900;
            ",
            onclick: move |_| {
                open.set(false);
            },
            div {
                style: "
                background: white;
                border-radius: 8px;
                padding: 1rem;
                width: 24rem;
                max-height: 80vh;
                overflow-y: auto;
                ",
                onclick: move |e: Event<MouseData>| {
                    e.stop_propagation();
                },

                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                    h3 { style: "margin: 0;", "New group chat" }
                    button {
                        style: "
                        background: none;
                        border: none;
                        font-size: 1.2rem;
                        cursor: pointer;
                        padding: 0.25rem;
                        color: #666;
                        ",
                        onclick: move |_| {
                            open.set(false);
                        },
                        "×"
                    }
                }

                label { style: "display: block; margin-bottom: 0.25rem; font-weight: bold;",
                    "Group name"
                }
                input {
                    style: "width: 100%; padding: 0.5rem; border: 1px solid #ddd; border-radius: 3px; box-sizing: border-box; margin-bottom: 1rem;",
                    value: name(),
                    oninput: move |e| {
                        name.set(e.value());
                    },
                }

                label { style: "display: block; margin-bottom: 0.25rem; font-weight: bold;",
                    "Add members"
                }
                input {
                    style: "width: 100%; padding: 0.5rem; border: 1px solid #ddd; border-radius: 3px; box-sizing: border-box;",
                    placeholder: "Search users",
                    oninput: move |e| {
                        run_search(e.value());
                    },
                }

                if !members().is_empty() {
                    div { style: "display: flex; flex-wrap: wrap; gap: 0.25rem; margin-top: 0.5rem;",
                        for member in members().iter() {
                            {
                                let id = member.id.clone();
                                rsx! {
                                    span {
                                        key: "{member.id}",
                                        style: "
                                        background: #6b46c1;
                                        color: white;
                                        border-radius: 10px;
                                        padding: 0.125rem 0.5rem;
                                        font-size: 0.8rem;
                                        cursor: pointer;
                                        ",
                                        onclick: move |_| {
                                            remove_member(id.clone());
                                        },
                                        "{member.name} ×"
                                    }
                                }
                            }
                        }
                    }
                }

                div { style: "margin-top: 0.5rem;",
                    for user in results().iter().take(4) {
                        {
                            let user = user.clone();
                            rsx! {
                                div {
                                    key: "{user.id}",
                                    style: "
                                    padding: 0.375rem 0.5rem;
                                    border-radius: 4px;
                                    cursor: pointer;
                                    background: #f0f0f0;
                                    margin-bottom: 0.25rem;
                                    ",
                                    onclick: move |_| {
                                        add_member(user.clone());
                                    },
                                    "{user.name}"
                                }
                            }
                        }
                    }
                }

                div { style: "display: flex; gap: 0.5rem; justify-content: flex-end; margin-top: 1rem;",
                    button {
                        style: "
                        background: #6c757d;
                        color: white;
                        border: none;
                        padding: 0.5rem 1rem;
                        border-radius: 3px;
                        cursor: pointer;
                        ",
                        onclick: move |_| {
                            open.set(false);
                        },
                        "Cancel"
                    }
                    button {
                        style: "
                        background: #007bff;
                        color: white;
                        border: none;
                        padding: 0.5rem 1rem;
                        border-radius: 3px;
                        cursor: pointer;
                        ",
                        disabled: busy(),
                        onclick: submit,
                        "Create"
                    }
                }
            }
        }
    }
}

/// Applies a search response only if no newer search started while it was
/// in flight.
fn apply_search_results(
    mut results: Signal<Vec<User>>,
    latest: Signal<u64>,
    seq: u64,
    users: Vec<User>,
) {
    if *latest.peek() != seq {
        return;
    }
    results.set(users);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            name: name.into(),
            img: None,
        }
    }

    #[test]
    fn stale_search_responses_are_dropped() {
        fn harness() -> Element {
            let results: Signal<Vec<User>> = Signal::new(vec![]);
            let latest: Signal<u64> = Signal::new(0);
            let first = {
                let mut latest = latest;
                let mut s = latest.write();
                *s += 1;
                *s
            };
            let second = {
                let mut latest = latest;
                let mut s = latest.write();
                *s += 1;
                *s
            };
            // the older response lands after the newer one
            apply_search_results(results, latest, second, vec![user("u2", "Dana")]);
            apply_search_results(results, latest, first, vec![user("u9", "Late")]);
            let got = results.read();
            assert_eq!(got.len(), 1);
            assert_eq!(got[0].id, "u2");
            rsx! {
                div {}
            }
        }
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
    }
}
