//! REST adapter for the `preorders` table.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maktaba_core::{NewPreorder, Preorder, PreorderCategory, PreorderId, PreorderStatus, UserId};

use crate::client::{RestDatastore, SelectQuery};
use crate::error::DatastoreError;
use crate::ports::PreorderRepository;

const TABLE: &str = "preorders";

/// Raw row as stored. Early rows can miss quantity and status.
#[derive(Debug, Deserialize)]
struct PreorderRow {
    id: Uuid,
    user_id: Option<Uuid>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    item_name: String,
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    status: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<PreorderRow> for Preorder {
    fn from(row: PreorderRow) -> Self {
        Self {
            id: PreorderId::new(row.id),
            user_id: row.user_id.map(UserId::new),
            name: row.name,
            phone: row.phone,
            item_name: row.item_name,
            category: PreorderCategory::BookOriginal,
            quantity: row.quantity.unwrap_or(1).max(1),
            details: row.details.filter(|d| !d.is_empty()),
            status: PreorderStatus::from_stored(row.status.as_deref()),
            created_at: row.created_at,
        }
    }
}

/// Insert shape; id, status, and timestamp are assigned by the store.
#[derive(Debug, Serialize)]
struct InsertPreorderRow<'a> {
    user_id: Option<Uuid>,
    name: &'a str,
    phone: &'a str,
    item_name: &'a str,
    item_type: &'static str,
    quantity: u32,
    details: Option<&'a str>,
}

impl<'a> InsertPreorderRow<'a> {
    fn from_new(preorder: &'a NewPreorder) -> Self {
        Self {
            user_id: preorder.user_id.map(|id| id.as_uuid()),
            name: &preorder.name,
            phone: &preorder.phone,
            item_name: &preorder.item_name,
            item_type: preorder.category.as_str(),
            quantity: preorder.quantity,
            details: preorder.details.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: &'static str,
}

/// [`PreorderRepository`] backed by the hosted store.
pub struct RestPreorders {
    client: Arc<RestDatastore>,
}

impl RestPreorders {
    #[must_use]
    pub fn new(client: Arc<RestDatastore>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PreorderRepository for RestPreorders {
    async fn insert(&self, preorder: &NewPreorder) -> Result<(), DatastoreError> {
        let row = InsertPreorderRow::from_new(preorder);
        self.client.insert(TABLE, &[row]).await
    }

    async fn list_all(&self) -> Result<Vec<Preorder>, DatastoreError> {
        let rows: Vec<PreorderRow> = self
            .client
            .select(TABLE, &SelectQuery::new().order_desc("created_at"))
            .await?;
        Ok(rows.into_iter().map(Preorder::from).collect())
    }

    async fn set_status(
        &self,
        id: PreorderId,
        status: PreorderStatus,
    ) -> Result<(), DatastoreError> {
        let patch = StatusPatch {
            status: status.as_str(),
        };
        self.client.update(TABLE, id.as_uuid(), &patch).await
    }

    async fn delete(&self, id: PreorderId) -> Result<(), DatastoreError> {
        self.client.delete(TABLE, id.as_uuid()).await
    }
}
