//! Customer review model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use robotech_core::{ProductId, ReviewId, ReviewStatus};

/// A customer review awaiting or past moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: ReviewId,
    pub product_id: ProductId,
    /// Display name of the reviewer.
    #[serde(alias = "user")]
    pub author: String,
    /// Star rating, 1-5.
    pub rating: u8,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "text")]
    pub comment: String,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pending_by_default() {
        let review: Review = serde_json::from_str(
            r#"{"id": "r1", "productId": "p1", "author": "Dana", "rating": 5, "comment": "Great"}"#,
        )
        .unwrap();
        assert_eq!(review.status, ReviewStatus::Pending);
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn test_deserialize_legacy_field_names() {
        let review: Review = serde_json::from_str(
            r#"{"_id": "r2", "productId": "p1", "user": "Sam", "rating": 3, "text": "Okay", "status": "approved"}"#,
        )
        .unwrap();
        assert_eq!(review.author, "Sam");
        assert_eq!(review.comment, "Okay");
        assert_eq!(review.status, ReviewStatus::Approved);
    }
}
