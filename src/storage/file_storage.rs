use anyhow::Result;
use std::path::PathBuf;
use tokio::fs;

use crate::model::UserInfo;

pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn user_info_path(&self) -> PathBuf {
        self.base.join("chat_user_info.json")
    }
}

#[async_trait::async_trait(?Send)]
impl super::Storage for FileStorage {
    async fn save_user_info(&self, info: &UserInfo) -> Result<()> {
        fs::create_dir_all(&self.base).await?;
        let json = serde_json::to_string_pretty(info)?;
        fs::write(self.user_info_path(), json).await?;
        Ok(())
    }

    async fn load_user_info(&self) -> Result<Option<UserInfo>> {
        match fs::read_to_string(self.user_info_path()).await {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(_) => Ok(None),
        }
    }
}
