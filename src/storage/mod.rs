//! Locally persisted session record.
//!
//! The sign-in flow writes a single `chatUserInfo`-style record; the app
//! reads it at startup to bootstrap the session and the chat-list panel
//! re-reads it on every refresh cycle as a secondary identity snapshot.

use async_trait::async_trait;

use crate::model::UserInfo;

#[cfg(target_arch = "wasm32")]
mod browser_storage;
#[cfg(not(target_arch = "wasm32"))]
mod file_storage;

#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub type AppStorage = browser_storage::IdbStorage;

#[async_trait(?Send)]
pub trait Storage {
    async fn save_user_info(&self, info: &UserInfo) -> anyhow::Result<()>;
    async fn load_user_info(&self) -> anyhow::Result<Option<UserInfo>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    use directories_next::ProjectDirs;
    use std::path::PathBuf;

    let base = if let Some(proj_dirs) = ProjectDirs::from("dev", "convo", "convo") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    Ok(AppStorage::new(base))
}

#[cfg(target_arch = "wasm32")]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    let storage = AppStorage::new().await?;
    Ok(storage)
}
