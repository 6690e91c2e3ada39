//! Domain methods for the Upcdn API client.
//!
//! Thin wrappers over the generic HTTP helpers in `lib.rs`: one method per
//! REST operation on files, groups, webhooks, and the project resource.
//! Pagination cursors, retries, and upload chunking are the caller's
//! concern.

use anyhow::Result;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    BatchFileResponse, FileInfo, FileList, GroupInfo, GroupList, ProjectInfo, WebhookEvent,
    WebhookInfo, WebhookRequest,
};
use crate::{api_prefix, ApiClient};

impl ApiClient {
    /// Get a single file by UUID.
    pub async fn file_info(&self, uuid: Uuid) -> Result<FileInfo> {
        debug!(%uuid, "fetching file info");
        self.get(&format!("{}/files/{}/", api_prefix(), uuid), &[])
            .await
    }

    /// List one page of files.
    pub async fn list_files(
        &self,
        limit: Option<u32>,
        ordering: Option<&str>,
    ) -> Result<FileList> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(l) = limit {
            query.push(("limit", l.to_string()));
        }
        if let Some(o) = ordering {
            query.push(("ordering", o.to_string()));
        }
        self.get(&format!("{}/files/", api_prefix()), &query).await
    }

    /// Store a file permanently (files are temporary until stored).
    pub async fn store_file(&self, uuid: Uuid) -> Result<FileInfo> {
        debug!(%uuid, "storing file");
        self.put(&format!("{}/files/{}/storage/", api_prefix(), uuid))
            .await
    }

    /// Delete a file.
    pub async fn delete_file(&self, uuid: Uuid) -> Result<()> {
        debug!(%uuid, "deleting file");
        self.delete(&format!("{}/files/{}/storage/", api_prefix(), uuid))
            .await
    }

    /// Store up to 100 files in one request.
    pub async fn batch_store_files(&self, uuids: &[Uuid]) -> Result<BatchFileResponse> {
        debug!(count = uuids.len(), "batch storing files");
        self.put_json(&format!("{}/files/storage/", api_prefix()), &uuids)
            .await
    }

    /// Delete up to 100 files in one request.
    pub async fn batch_delete_files(&self, uuids: &[Uuid]) -> Result<BatchFileResponse> {
        debug!(count = uuids.len(), "batch deleting files");
        self.delete_json(&format!("{}/files/storage/", api_prefix()), &uuids)
            .await
    }

    /// Get a file group by its `{uuid}~{count}` identifier.
    pub async fn group_info(&self, group_id: &str) -> Result<GroupInfo> {
        debug!(group_id, "fetching group info");
        self.get(
            &format!(
                "{}/groups/{}/",
                api_prefix(),
                urlencoding::encode(group_id)
            ),
            &[],
        )
        .await
    }

    /// List one page of groups.
    pub async fn list_groups(&self, limit: Option<u32>) -> Result<GroupList> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(l) = limit {
            query.push(("limit", l.to_string()));
        }
        self.get(&format!("{}/groups/", api_prefix()), &query).await
    }

    /// Store all files in a group.
    pub async fn store_group(&self, group_id: &str) -> Result<GroupInfo> {
        debug!(group_id, "storing group");
        self.put(&format!(
            "{}/groups/{}/storage/",
            api_prefix(),
            urlencoding::encode(group_id)
        ))
        .await
    }

    /// List registered webhooks.
    pub async fn list_webhooks(&self) -> Result<Vec<WebhookInfo>> {
        self.get(&format!("{}/webhooks/", api_prefix()), &[]).await
    }

    /// Subscribe a target URL to an event.
    pub async fn create_webhook(
        &self,
        event: WebhookEvent,
        target_url: &str,
        is_active: bool,
    ) -> Result<WebhookInfo> {
        debug!(%event, target_url, "creating webhook");
        let body = WebhookRequest {
            event,
            target_url: target_url.to_string(),
            is_active,
        };
        self.post_json(&format!("{}/webhooks/", api_prefix()), &body)
            .await
    }

    /// Update an existing webhook subscription.
    pub async fn update_webhook(
        &self,
        webhook_id: i64,
        event: WebhookEvent,
        target_url: &str,
        is_active: bool,
    ) -> Result<WebhookInfo> {
        debug!(webhook_id, %event, "updating webhook");
        let body = WebhookRequest {
            event,
            target_url: target_url.to_string(),
            is_active,
        };
        self.put_json(&format!("{}/webhooks/{}/", api_prefix(), webhook_id), &body)
            .await
    }

    /// Remove a webhook subscription.
    pub async fn delete_webhook(&self, webhook_id: i64) -> Result<()> {
        debug!(webhook_id, "deleting webhook");
        self.delete(&format!("{}/webhooks/{}/", api_prefix(), webhook_id))
            .await
    }

    /// Get project (account) information for the configured keys.
    pub async fn project_info(&self) -> Result<ProjectInfo> {
        self.get(&format!("{}/project/", api_prefix()), &[]).await
    }
}
