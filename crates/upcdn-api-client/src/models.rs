//! Typed resource models for the Upcdn REST API.
//!
//! These mirror the service's JSON wire format. They are plain data
//! carriers; nothing here is persisted client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use uuid::Uuid;

/// A stored file resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub uuid: Uuid,
    pub original_filename: String,
    pub size: u64,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub is_image: Option<bool>,
    #[serde(default)]
    pub is_ready: bool,
    #[serde(default)]
    pub datetime_uploaded: Option<DateTime<Utc>>,
    #[serde(default)]
    pub datetime_stored: Option<DateTime<Utc>>,
    #[serde(default)]
    pub datetime_removed: Option<DateTime<Utc>>,
    /// CDN delivery URL, if the service included one
    #[serde(default)]
    pub original_file_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One page of the file listing. Cursor handling is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    pub results: Vec<FileInfo>,
}

/// An immutable group of files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Group identifier of the form `{uuid}~{count}`
    pub id: String,
    #[serde(default)]
    pub datetime_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub datetime_stored: Option<DateTime<Utc>>,
    pub files_count: u32,
    #[serde(default)]
    pub cdn_url: Option<String>,
    #[serde(default)]
    pub files: Vec<FileInfo>,
}

/// One page of the group listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupList {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    pub results: Vec<GroupInfo>,
}

/// Webhook event types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEvent {
    FileUploaded,
    FileStored,
    FileDeleted,
    FileInfected,
    FileInfoUpdated,
}

impl Display for WebhookEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            WebhookEvent::FileUploaded => write!(f, "file.uploaded"),
            WebhookEvent::FileStored => write!(f, "file.stored"),
            WebhookEvent::FileDeleted => write!(f, "file.deleted"),
            WebhookEvent::FileInfected => write!(f, "file.infected"),
            WebhookEvent::FileInfoUpdated => write!(f, "file.info_updated"),
        }
    }
}

impl FromStr for WebhookEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file.uploaded" => Ok(WebhookEvent::FileUploaded),
            "file.stored" => Ok(WebhookEvent::FileStored),
            "file.deleted" => Ok(WebhookEvent::FileDeleted),
            "file.infected" => Ok(WebhookEvent::FileInfected),
            "file.info_updated" => Ok(WebhookEvent::FileInfoUpdated),
            _ => Err(anyhow::anyhow!("Invalid webhook event type: {}", s)),
        }
    }
}

/// A registered webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookInfo {
    pub id: i64,
    pub event: WebhookEvent,
    pub target_url: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

/// Request body for creating or updating a webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRequest {
    pub event: WebhookEvent,
    pub target_url: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Project (account) information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub pub_key: String,
    #[serde(default)]
    pub autostore_enabled: Option<bool>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Batch store/delete response: successful entities plus per-file problems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFileResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub result: Vec<FileInfo>,
    #[serde(default)]
    pub problems: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_info_deserializes_from_service_json() {
        let json = r#"{
            "uuid": "52da3bfc-7cd8-4861-8b05-126fef7a6994",
            "original_filename": "photo.jpg",
            "size": 48237,
            "mime_type": "image/jpeg",
            "is_image": true,
            "is_ready": true,
            "datetime_uploaded": "2021-10-11T23:40:00Z",
            "original_file_url": "https://cdn.upcdn.io/52da3bfc-7cd8-4861-8b05-126fef7a6994/photo.jpg"
        }"#;
        let info: FileInfo = serde_json::from_str(json).unwrap();
        assert_eq!(
            info.uuid.to_string(),
            "52da3bfc-7cd8-4861-8b05-126fef7a6994"
        );
        assert_eq!(info.original_filename, "photo.jpg");
        assert_eq!(info.size, 48237);
        assert_eq!(info.mime_type.as_deref(), Some("image/jpeg"));
        assert!(info.is_ready);
        assert!(info.datetime_removed.is_none());
    }

    #[test]
    fn test_file_list_page() {
        let json = r#"{
            "next": "https://api.upcdn.io/v0/files/?cursor=abc",
            "previous": null,
            "total": 120,
            "results": [{
                "uuid": "52da3bfc-7cd8-4861-8b05-126fef7a6994",
                "original_filename": "photo.jpg",
                "size": 48237
            }]
        }"#;
        let list: FileList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total, Some(120));
        assert_eq!(list.results.len(), 1);
        assert!(list.next.is_some());
        assert!(list.previous.is_none());
    }

    #[test]
    fn test_group_id_shape() {
        let json = r#"{
            "id": "badfc9f7-f88f-4921-9cc0-22e2c08aa2da~12",
            "files_count": 12,
            "cdn_url": "https://cdn.upcdn.io/badfc9f7-f88f-4921-9cc0-22e2c08aa2da~12/"
        }"#;
        let group: GroupInfo = serde_json::from_str(json).unwrap();
        assert!(group.id.ends_with("~12"));
        assert_eq!(group.files_count, 12);
        assert!(group.files.is_empty());
    }

    #[test]
    fn test_webhook_event_roundtrip() {
        for event in [
            WebhookEvent::FileUploaded,
            WebhookEvent::FileStored,
            WebhookEvent::FileDeleted,
            WebhookEvent::FileInfected,
            WebhookEvent::FileInfoUpdated,
        ] {
            let parsed: WebhookEvent = event.to_string().parse().unwrap();
            assert_eq!(parsed, event);
        }
        assert!("file.unknown".parse::<WebhookEvent>().is_err());
    }

    #[test]
    fn test_webhook_info_deserializes() {
        let json = r#"{
            "id": 42,
            "event": "file_uploaded",
            "target_url": "https://example.com/hooks",
            "is_active": true
        }"#;
        let hook: WebhookInfo = serde_json::from_str(json).unwrap();
        assert_eq!(hook.id, 42);
        assert_eq!(hook.event, WebhookEvent::FileUploaded);
        assert!(hook.is_active);
    }

    #[test]
    fn test_project_info_defaults() {
        let json = r#"{"name": "demo", "pub_key": "demopublickey"}"#;
        let project: ProjectInfo = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "demo");
        assert!(project.collaborators.is_empty());
        assert!(project.autostore_enabled.is_none());
    }
}
