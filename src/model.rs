//! Wire types for the chat backend.
//!
//! Field names follow the backend's JSON contract (`_id`, `isGroupChat`,
//! `chatName`, `lastMessage`). The client holds read-only snapshots of these;
//! the server owns them.

use serde::{Deserialize, Serialize};

/// A chat member as returned inside a chat object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// The authenticated identity driving API requests.
///
/// Also the shape of the locally persisted `chatUserInfo` record written by
/// the sign-in flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LastMessage {
    pub sender: User,
    pub content: String,
}

/// A conversation, either one-to-one or a named group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub is_group_chat: bool,
    #[serde(default)]
    pub chat_name: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<LastMessage>,
}

impl Chat {
    /// The member of a one-to-one chat that is not `me`.
    pub fn other_participant(&self, me: &str) -> Option<&User> {
        match self.users.as_slice() {
            [] => None,
            [only] if only.id == me => None,
            [first, second, ..] if first.id == me => Some(second),
            [first, ..] => Some(first),
        }
    }
}

/// The chat-list endpoint may answer with a single chat object or with an
/// array of them. Both normalize to a `Vec<Chat>`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ChatsPayload {
    Many(Vec<Chat>),
    One(Box<Chat>),
}

impl From<ChatsPayload> for Vec<Chat> {
    fn from(payload: ChatsPayload) -> Self {
        match payload {
            ChatsPayload::Many(chats) => chats,
            ChatsPayload::One(chat) => vec![*chat],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            name: name.into(),
            img: None,
        }
    }

    #[test]
    fn parses_backend_field_names() {
        let chat: Chat = serde_json::from_value(json!({
            "_id": "c1",
            "isGroupChat": true,
            "chatName": "Weekend Trip",
            "users": [{"_id": "u1", "name": "Dana"}],
            "lastMessage": {
                "sender": {"_id": "u1", "name": "Dana"},
                "content": "see you there"
            }
        }))
        .unwrap();
        assert!(chat.is_group_chat);
        assert_eq!(chat.chat_name, "Weekend Trip");
        assert_eq!(chat.users[0].name, "Dana");
        assert_eq!(chat.last_message.unwrap().content, "see you there");
    }

    #[test]
    fn missing_optional_fields_default() {
        let chat: Chat = serde_json::from_value(json!({"_id": "c1"})).unwrap();
        assert!(!chat.is_group_chat);
        assert!(chat.users.is_empty());
        assert!(chat.last_message.is_none());
    }

    #[test]
    fn payload_normalizes_single_object_and_array() {
        let one: ChatsPayload = serde_json::from_value(json!({"_id": "c1"})).unwrap();
        let one: Vec<Chat> = one.into();
        assert_eq!(one.len(), 1);

        let many: ChatsPayload =
            serde_json::from_value(json!([{"_id": "c1"}, {"_id": "c2"}])).unwrap();
        let many: Vec<Chat> = many.into();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].id, "c2");
    }

    #[test]
    fn other_participant_skips_me() {
        let chat = Chat {
            id: "c1".into(),
            is_group_chat: false,
            chat_name: String::new(),
            users: vec![user("me", "Me"), user("u2", "Dana")],
            last_message: None,
        };
        assert_eq!(chat.other_participant("me").unwrap().id, "u2");
        assert_eq!(chat.other_participant("u2").unwrap().id, "me");
    }

    #[test]
    fn other_participant_handles_degenerate_member_lists() {
        let empty = Chat {
            id: "c1".into(),
            is_group_chat: false,
            chat_name: String::new(),
            users: vec![],
            last_message: None,
        };
        assert!(empty.other_participant("me").is_none());

        let only_me = Chat {
            users: vec![user("me", "Me")],
            ..empty
        };
        assert!(only_me.other_participant("me").is_none());
    }
}
