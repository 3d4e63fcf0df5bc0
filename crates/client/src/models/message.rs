//! Contact message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use robotech_core::{MessageId, MessagePriority, MessageStatus};

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(alias = "_id")]
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    #[serde(alias = "body")]
    pub message: String,
    #[serde(default)]
    pub status: MessageStatus,
    #[serde(default)]
    pub priority: MessagePriority,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields sent when submitting the contact form.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
