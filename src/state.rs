//! Shared UI state for the chat screens.
//!
//! One `ChatState` is provided as context at the top of the tree; its setters
//! are the only mutation path for the chat collection and the selection. The
//! collection is `None` until the first fetch resolves, which is what the
//! panel keys its skeleton on.

use dioxus::prelude::*;

use crate::model::{Chat, UserInfo};

#[derive(Clone, Copy)]
pub struct ChatState {
    user: Signal<UserInfo>,
    chats: Signal<Option<Vec<Chat>>>,
    selected: Signal<Option<String>>,
}

impl ChatState {
    pub fn new(user: UserInfo) -> Self {
        Self {
            user: Signal::new(user),
            chats: Signal::new(None),
            selected: Signal::new(None),
        }
    }

    /// The session user driving API requests.
    pub fn user(&self) -> UserInfo {
        self.user.read().clone()
    }

    pub fn chats(&self) -> Option<Vec<Chat>> {
        self.chats.read().clone()
    }

    pub fn set_chats(&mut self, chats: Option<Vec<Chat>>) {
        self.chats.set(chats);
    }

    /// Put a freshly created chat at the front of the collection.
    pub fn prepend_chat(&mut self, chat: Chat) {
        self.chats.with_mut(|c| {
            c.get_or_insert_with(Vec::new).insert(0, chat);
        });
    }

    pub fn selected(&self) -> Option<String> {
        self.selected.read().clone()
    }

    /// Make `chat_id` the open conversation. At most one chat is selected at
    /// a time; selection is never persisted.
    pub fn select(&mut self, chat_id: String) {
        self.selected.set(Some(chat_id));
    }

    /// The selected chat's full record, if it is still in the collection.
    pub fn selected_chat(&self) -> Option<Chat> {
        let selected = self.selected.read();
        let id = selected.as_deref()?;
        self.chats
            .read()
            .as_ref()?
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }
}

/// Replace-on-success transition for the chat collection.
///
/// A successful fetch replaces the whole collection with the server's
/// response; a failed one leaves the previous value in place and hands the
/// error back for notification.
pub fn resolve_fetch(
    previous: Option<Vec<Chat>>,
    fetched: anyhow::Result<Vec<Chat>>,
) -> (Option<Vec<Chat>>, Option<anyhow::Error>) {
    match fetched {
        Ok(chats) => (Some(chats), None),
        Err(e) => (previous, Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn chat(id: &str) -> Chat {
        Chat {
            id: id.into(),
            is_group_chat: false,
            chat_name: String::new(),
            users: vec![],
            last_message: None,
        }
    }

    #[test]
    fn success_replaces_the_whole_collection() {
        let previous = Some(vec![chat("c1"), chat("c2")]);
        let (next, err) = resolve_fetch(previous, Ok(vec![chat("c3")]));
        assert!(err.is_none());
        let next = next.unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "c3");
    }

    #[test]
    fn success_applies_even_from_unresolved() {
        let (next, err) = resolve_fetch(None, Ok(vec![]));
        assert!(err.is_none());
        assert_eq!(next, Some(vec![]));
    }

    #[test]
    fn failure_leaves_previous_collection_untouched() {
        let previous = Some(vec![chat("c1")]);
        let (next, err) = resolve_fetch(previous.clone(), Err(anyhow!("boom")));
        assert!(err.is_some());
        assert_eq!(next, previous);
    }

    #[test]
    fn failure_before_first_fetch_stays_unresolved() {
        let (next, err) = resolve_fetch(None, Err(anyhow!("boom")));
        assert!(err.is_some());
        assert!(next.is_none());
    }

    // Signals need a live runtime, so state tests run inside a VirtualDom.
    fn run_in_dom(app: fn() -> Element) {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }

    fn session() -> UserInfo {
        UserInfo {
            id: "me".into(),
            name: "Me".into(),
            img: None,
            token: "tok".into(),
        }
    }

    #[test]
    fn selecting_a_chat_replaces_the_previous_selection() {
        fn harness() -> Element {
            let mut state = ChatState::new(session());
            state.set_chats(Some(vec![chat("c1"), chat("c2")]));
            state.select("c1".into());
            state.select("c2".into());
            assert_eq!(state.selected().as_deref(), Some("c2"));
            assert_eq!(state.selected_chat().unwrap().id, "c2");
            rsx! {
                div {}
            }
        }
        run_in_dom(harness);
    }

    #[test]
    fn selection_does_not_resolve_once_the_chat_is_gone() {
        fn harness() -> Element {
            let mut state = ChatState::new(session());
            state.set_chats(Some(vec![chat("c1"), chat("c2")]));
            state.select("c2".into());
            state.set_chats(Some(vec![chat("c1")]));
            assert_eq!(state.selected().as_deref(), Some("c2"));
            assert!(state.selected_chat().is_none());
            rsx! {
                div {}
            }
        }
        run_in_dom(harness);
    }
}
