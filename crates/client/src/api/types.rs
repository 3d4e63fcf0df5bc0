//! Wire envelope and pagination types.

use serde::Deserialize;

/// Response envelope used by every backend endpoint:
/// `{ success, data?, message?, pagination? }`.
///
/// Older endpoints report failures in an `error` field instead of
/// `message`; [`Envelope::message`] checks both.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    /// Human-readable message, from whichever field the backend used.
    pub fn message(&self) -> Option<String> {
        self.message.clone().or_else(|| self.error.clone())
    }
}

/// Pagination block returned by list endpoints, stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl Pagination {
    /// Pagination for an unpaginated response containing `count` items.
    #[must_use]
    pub fn single(count: usize) -> Self {
        Self {
            page: 1,
            limit: u32::try_from(count).unwrap_or(u32::MAX),
            total: u64::try_from(count).unwrap_or(u64::MAX),
            pages: 1,
        }
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// One page of a listing plus its pagination block.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_message_prefers_message_field() {
        let envelope: Envelope<()> = serde_json::from_str(
            r#"{"success": false, "message": "No such product", "error": "legacy"}"#,
        )
        .unwrap();
        assert_eq!(envelope.message().as_deref(), Some("No such product"));
    }

    #[test]
    fn test_envelope_falls_back_to_error_field() {
        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success": false, "error": "Product not found"}"#).unwrap();
        assert_eq!(envelope.message().as_deref(), Some("Product not found"));
    }

    #[test]
    fn test_pagination_single() {
        let pagination = Pagination::single(6);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.total, 6);
        assert!(!pagination.has_next());
    }

    #[test]
    fn test_pagination_has_next() {
        let pagination = Pagination {
            page: 2,
            limit: 12,
            total: 60,
            pages: 5,
        };
        assert!(pagination.has_next());
    }
}
