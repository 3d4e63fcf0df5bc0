//! Status enums for catalog and admin entities.
//!
//! Variants mirror the string values the backend stores and returns, so
//! every enum round-trips through serde without custom glue.

use serde::{Deserialize, Serialize};

/// Product lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    OutOfStock,
    Discontinued,
}

impl ProductStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::OutOfStock => "out_of_stock",
            Self::Discontinued => "discontinued",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "draft" => Ok(Self::Draft),
            "out_of_stock" => Ok(Self::OutOfStock),
            "discontinued" => Ok(Self::Discontinued),
            _ => Err(format!("invalid product status: {s}")),
        }
    }
}

/// Moderation status of a customer review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("invalid review status: {s}")),
        }
    }
}

/// Read state of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
    Archived,
}

impl MessageStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Archived => "archived",
        }
    }
}

impl std::str::FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unread" => Ok(Self::Unread),
            "read" => Ok(Self::Read),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("invalid message status: {s}")),
        }
    }
}

/// Priority assigned to a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessagePriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Role attached to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Store administrator with access to the admin console.
    Admin,
    /// Regular shopper.
    #[default]
    User,
}

/// Sort order for product listings.
///
/// Serialized as the backend's query-parameter values (`price-low`, not
/// `PriceLow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    Popular,
    Rating,
    PriceLow,
    PriceHigh,
    Newest,
}

impl SortKey {
    /// The query-parameter value for this sort order.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
        }
    }

    /// Human-readable label, as shown in the sort dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::Popular => "Most Popular",
            Self::Rating => "Highest Rated",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Newest => "Newest First",
        }
    }

    /// All sort orders, in display order.
    pub const ALL: [Self; 6] = [
        Self::Featured,
        Self::Popular,
        Self::Rating,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Newest,
    ];
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "popular" => Ok(Self::Popular),
            "rating" => Ok(Self::Rating),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "newest" => Ok(Self::Newest),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_roundtrip() {
        for key in SortKey::ALL {
            let parsed: SortKey = key.as_param().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn test_sort_key_serde_kebab_case() {
        let json = serde_json::to_string(&SortKey::PriceLow).unwrap();
        assert_eq!(json, "\"price-low\"");

        let parsed: SortKey = serde_json::from_str("\"price-high\"").unwrap();
        assert_eq!(parsed, SortKey::PriceHigh);
    }

    #[test]
    fn test_sort_key_invalid() {
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_review_status_serde() {
        let json = serde_json::to_string(&ReviewStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        assert_eq!(ReviewStatus::default(), ReviewStatus::Pending);
    }

    #[test]
    fn test_message_status_serde() {
        let parsed: MessageStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, MessageStatus::Archived);
        assert_eq!(MessageStatus::default(), MessageStatus::Unread);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "approved".parse::<ReviewStatus>().unwrap(),
            ReviewStatus::Approved
        );
        assert!("maybe".parse::<ReviewStatus>().is_err());

        assert_eq!(
            "archived".parse::<MessageStatus>().unwrap(),
            MessageStatus::Archived
        );
        assert!("trashed".parse::<MessageStatus>().is_err());

        assert_eq!(
            "out_of_stock".parse::<ProductStatus>().unwrap(),
            ProductStatus::OutOfStock
        );
        assert_eq!(ProductStatus::Draft.to_string(), "draft");
    }

    #[test]
    fn test_user_role() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::User.to_string(), "user");
        assert!("root".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_product_status_serde() {
        let json = serde_json::to_string(&ProductStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out_of_stock\"");
    }
}
