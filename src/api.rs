//! HTTP client for the chat backend.
//!
//! One client instance is built at launch and handed to components through
//! launch context. Every request carries the session's bearer token; non-2xx
//! responses and transport errors both surface as `Err`, classification is
//! left to the caller (in practice: a toast).

use anyhow::Context;
use serde_json::json;

use crate::model::{Chat, ChatsPayload, User};

#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Backend base URL from `CONVO_API_URL` on native builds; same-origin
    /// relative URLs on the web.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let base = std::env::var("CONVO_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        Self::new(base)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::new("")
    }

    /// `GET /api/chat` — the current user's conversations. The endpoint may
    /// answer with a single chat object or an array; both come back as a
    /// `Vec<Chat>`.
    pub async fn fetch_chats(&self, token: &str) -> anyhow::Result<Vec<Chat>> {
        let payload: ChatsPayload = self
            .http
            .get(format!("{}/api/chat", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .context("chat list request failed")?
            .error_for_status()
            .context("chat list request rejected")?
            .json()
            .await
            .context("malformed chat list payload")?;
        Ok(payload.into())
    }

    /// `GET /api/user?search=` — users matching a name/email fragment, for
    /// picking group members.
    pub async fn search_users(&self, token: &str, query: &str) -> anyhow::Result<Vec<User>> {
        let users = self
            .http
            .get(format!("{}/api/user", self.base_url))
            .query(&[("search", query)])
            .bearer_auth(token)
            .send()
            .await
            .context("user search request failed")?
            .error_for_status()
            .context("user search request rejected")?
            .json()
            .await
            .context("malformed user search payload")?;
        Ok(users)
    }

    /// `POST /api/chat/group` — create a named group chat with the given
    /// members. Member ids go over the wire as a JSON array.
    pub async fn create_group_chat(
        &self,
        token: &str,
        name: &str,
        member_ids: &[String],
    ) -> anyhow::Result<Chat> {
        let chat = self
            .http
            .post(format!("{}/api/chat/group", self.base_url))
            .bearer_auth(token)
            .json(&json!({ "name": name, "users": member_ids }))
            .send()
            .await
            .context("group creation request failed")?
            .error_for_status()
            .context("group creation request rejected")?
            .json()
            .await
            .context("malformed group creation payload")?;
        Ok(chat)
    }
}
