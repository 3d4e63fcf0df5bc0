//! Category endpoints.

use reqwest::Method;
use serde::Serialize;

use robotech_core::CategoryId;

use crate::models::Category;

use super::cache::{CacheValue, keys};
use super::{ApiClient, ApiError};

/// Fields sent when creating or updating a category (admin).
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiClient {
    /// List all categories (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        if let Some(CacheValue::Categories(categories)) = self.cache_get(keys::CATEGORIES).await {
            return Ok(categories);
        }

        let builder = self.request(Method::GET, &["categories"])?;
        let (categories, _) = self.fetch_list::<Category>(builder).await?;

        self.cache_put(keys::CATEGORIES, CacheValue::Categories(categories.clone()))
            .await;
        Ok(categories)
    }

    /// Fetch a single category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the category does not exist.
    pub async fn get_category(&self, id: &CategoryId) -> Result<Category, ApiError> {
        let builder = self.request(Method::GET, &["categories", id.as_str()])?;
        self.fetch(builder).await
    }

    /// Create a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ApiError> {
        let builder = self.request(Method::POST, &["categories"])?.json(payload);
        let category = self.fetch(builder).await?;
        self.invalidate_catalog_caches().await;
        Ok(category)
    }

    /// Update a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn update_category(
        &self,
        id: &CategoryId,
        payload: &CategoryPayload,
    ) -> Result<Category, ApiError> {
        let builder = self
            .request(Method::PUT, &["categories", id.as_str()])?
            .json(payload);
        let category = self.fetch(builder).await?;
        self.invalidate_catalog_caches().await;
        Ok(category)
    }

    /// Delete a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &["categories", id.as_str()])?;
        self.execute(builder).await?;
        self.invalidate_catalog_caches().await;
        Ok(())
    }
}
