//! Contact message endpoints.
//!
//! `send_message` is the public contact form; everything else is admin
//! inbox management.

use reqwest::Method;

use robotech_core::{MessageId, MessageStatus};

use crate::models::{ContactMessage, ContactPayload};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List contact messages, optionally filtered by read state (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn list_messages(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, ApiError> {
        let mut builder = self.request(Method::GET, &["messages"])?;
        if let Some(status) = status {
            builder = builder.query(&[("status", status.as_str())]);
        }

        let (messages, _) = self.fetch_list(builder).await?;
        Ok(messages)
    }

    /// Fetch a single contact message (admin).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the message does not exist.
    pub async fn get_message(&self, id: &MessageId) -> Result<ContactMessage, ApiError> {
        let builder = self.request(Method::GET, &["messages", id.as_str()])?;
        self.fetch(builder).await
    }

    /// Submit the contact form.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn send_message(&self, payload: &ContactPayload) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, &["messages"])?.json(payload);
        self.execute(builder).await
    }

    /// Mark a message as read (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn mark_message_read(&self, id: &MessageId) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, &["messages", id.as_str(), "read"])?;
        self.execute(builder).await
    }

    /// Archive a message (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn archive_message(&self, id: &MessageId) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, &["messages", id.as_str(), "archive"])?;
        self.execute(builder).await
    }

    /// Delete a message (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn delete_message(&self, id: &MessageId) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &["messages", id.as_str()])?;
        self.execute(builder).await
    }
}
