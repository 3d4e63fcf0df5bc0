//! Review moderation endpoints (admin).

use reqwest::Method;

use robotech_core::{ReviewId, ReviewStatus};

use crate::models::Review;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List reviews, optionally filtered by moderation status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn list_reviews(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<Review>, ApiError> {
        let mut builder = self.request(Method::GET, &["reviews"])?;
        if let Some(status) = status {
            builder = builder.query(&[("status", status.as_str())]);
        }

        let (reviews, _) = self.fetch_list(builder).await?;
        Ok(reviews)
    }

    /// Approve a pending review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn approve_review(&self, id: &ReviewId) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, &["reviews", id.as_str(), "approve"])?;
        self.execute(builder).await
    }

    /// Reject a pending review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn reject_review(&self, id: &ReviewId) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, &["reviews", id.as_str(), "reject"])?;
        self.execute(builder).await
    }

    /// Delete a review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn delete_review(&self, id: &ReviewId) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &["reviews", id.as_str()])?;
        self.execute(builder).await
    }
}
