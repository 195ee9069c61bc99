use anyhow::anyhow;
use idb::{Database, DatabaseEvent, Factory, ObjectStoreParams, TransactionMode};
use js_sys::wasm_bindgen::JsValue;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;

use super::Storage;
use crate::model::UserInfo;

const STORE: &str = "user_info";
const RECORD_KEY: &str = "chatUserInfo";

#[derive(Debug)]
pub struct IdbStorage {
    db: Database,
}

impl IdbStorage {
    pub async fn new() -> anyhow::Result<Self> {
        let db = Self::create_db().await?;
        Ok(Self { db })
    }

    async fn create_db() -> anyhow::Result<Database> {
        let factory = Factory::new().map_err(|e| anyhow!("{e:?}"))?;

        let mut open_request = factory
            .open("convo_storage", Some(1))
            .map_err(|e| anyhow!("{e:?}"))?;

        open_request.on_upgrade_needed(|event| {
            let database = event.database().unwrap();
            let mut store_params = ObjectStoreParams::new();
            store_params.auto_increment(false);
            let _store = database.create_object_store(STORE, store_params).unwrap();
        });

        let db = open_request.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(db)
    }
}

#[async_trait::async_trait(?Send)]
impl Storage for IdbStorage {
    async fn save_user_info(&self, info: &UserInfo) -> anyhow::Result<()> {
        let transaction = self
            .db
            .transaction(&[STORE], TransactionMode::ReadWrite)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store(STORE)
            .map_err(|e| anyhow!("{e:?}"))?;

        let doc = info
            .serialize(&Serializer::json_compatible())
            .map_err(|e| anyhow!("{e:?}"))?;
        store
            .put(&doc, Some(&JsValue::from_str(RECORD_KEY)))
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        transaction
            .commit()
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        Ok(())
    }

    async fn load_user_info(&self) -> anyhow::Result<Option<UserInfo>> {
        let transaction = self
            .db
            .transaction(&[STORE], TransactionMode::ReadOnly)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store(STORE)
            .map_err(|e| anyhow!("{e:?}"))?;

        let stored: Option<JsValue> = store
            .get(JsValue::from_str(RECORD_KEY))
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;

        let info = stored
            .map(|v| serde_wasm_bindgen::from_value(v).map_err(|e| anyhow!("{e:?}")))
            .transpose()?;

        transaction.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(info)
    }
}
