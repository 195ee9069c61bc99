//! Display helpers for chat rows.
//!
//! Pure functions mapping a chat (plus the viewer's identity) to the label,
//! preview, and avatar URL a row renders. Placeholder avatars are derived
//! deterministically from ids/names so the same chat always gets the same
//! image.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::model::Chat;

/// Group names get cut at this many characters in the list.
pub const GROUP_NAME_LIMIT: usize = 25;
/// Last-message previews get cut at this many characters.
pub const PREVIEW_LIMIT: usize = 30;

/// First `max` characters plus "..." when the input is longer, the input
/// unchanged otherwise. Char-based, so multibyte text never gets split.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

/// Generated placeholder avatar for a user without an explicit image.
pub fn placeholder_avatar(user_id: &str) -> String {
    format!("https://robohash.org/{user_id}?set=set4")
}

/// Name-initials placeholder avatar for a group chat.
pub fn initials_avatar(group_name: &str) -> String {
    let encoded = utf8_percent_encode(group_name, NON_ALPHANUMERIC);
    format!("https://avatars.dicebear.com/api/initials/{encoded}.svg")
}

/// Row label: the other participant's name for one-to-one chats, the
/// (possibly truncated) group name otherwise.
pub fn chat_title(chat: &Chat, me: &str) -> String {
    if chat.is_group_chat {
        truncate_with_ellipsis(&chat.chat_name, GROUP_NAME_LIMIT)
    } else {
        chat.other_participant(me)
            .map(|u| u.name.clone())
            .unwrap_or_default()
    }
}

/// Row avatar URL: the other participant's image (or their generated
/// placeholder) for one-to-one chats, the initials placeholder for groups.
pub fn chat_avatar(chat: &Chat, me: &str) -> String {
    if chat.is_group_chat {
        initials_avatar(&chat.chat_name)
    } else {
        match chat.other_participant(me) {
            Some(u) => u.img.clone().unwrap_or_else(|| placeholder_avatar(&u.id)),
            None => placeholder_avatar(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn direct_chat(users: Vec<User>) -> Chat {
        Chat {
            id: "c1".into(),
            is_group_chat: false,
            chat_name: String::new(),
            users,
            last_message: None,
        }
    }

    fn group_chat(name: &str) -> Chat {
        Chat {
            id: "g1".into(),
            is_group_chat: true,
            chat_name: name.into(),
            users: vec![],
            last_message: None,
        }
    }

    fn user(id: &str, name: &str, img: Option<&str>) -> User {
        User {
            id: id.into(),
            name: name.into(),
            img: img.map(Into::into),
        }
    }

    #[test]
    fn short_input_renders_unabridged() {
        assert_eq!(truncate_with_ellipsis("hello", 30), "hello");
        let exactly_30 = "a".repeat(30);
        assert_eq!(truncate_with_ellipsis(&exactly_30, 30), exactly_30);
    }

    #[test]
    fn long_input_is_cut_then_ellipsized() {
        let s = "a".repeat(31);
        assert_eq!(
            truncate_with_ellipsis(&s, 30),
            format!("{}...", "a".repeat(30))
        );
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let s = "ש".repeat(26);
        assert_eq!(
            truncate_with_ellipsis(&s, 25),
            format!("{}...", "ש".repeat(25))
        );
    }

    #[test]
    fn group_title_matches_25_char_rule() {
        // 31 chars, cut to the first 25 plus the ellipsis
        let chat = group_chat("Weekend Trip Planning Committee");
        assert_eq!(chat_title(&chat, "me"), "Weekend Trip Planning Com...");

        let short = group_chat("Weekend Trip");
        assert_eq!(chat_title(&short, "me"), "Weekend Trip");
    }

    #[test]
    fn direct_title_is_other_participant() {
        let chat = direct_chat(vec![user("me", "Me", None), user("u2", "Dana", None)]);
        assert_eq!(chat_title(&chat, "me"), "Dana");
    }

    #[test]
    fn placeholder_avatar_is_deterministic_per_id() {
        assert_eq!(placeholder_avatar("u2"), placeholder_avatar("u2"));
        assert_ne!(placeholder_avatar("u2"), placeholder_avatar("u3"));
        assert_eq!(placeholder_avatar("u2"), "https://robohash.org/u2?set=set4");
    }

    #[test]
    fn explicit_image_wins_over_placeholder() {
        let chat = direct_chat(vec![
            user("me", "Me", None),
            user("u2", "Dana", Some("https://cdn.example/dana.png")),
        ]);
        assert_eq!(chat_avatar(&chat, "me"), "https://cdn.example/dana.png");
    }

    #[test]
    fn missing_image_falls_back_to_participant_keyed_placeholder() {
        let chat = direct_chat(vec![user("me", "Me", None), user("u2", "Dana", None)]);
        assert_eq!(chat_avatar(&chat, "me"), placeholder_avatar("u2"));
    }

    #[test]
    fn group_avatar_encodes_the_name() {
        assert_eq!(
            initials_avatar("Weekend Trip"),
            "https://avatars.dicebear.com/api/initials/Weekend%20Trip.svg"
        );
    }
}
