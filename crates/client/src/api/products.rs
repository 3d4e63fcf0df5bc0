//! Product endpoints.

use reqwest::Method;
use std::path::Path;
use tracing::instrument;

use robotech_core::ProductId;

use crate::catalog::FilterState;
use crate::models::{Product, ProductPayload, RawProduct};

use super::cache::{CacheValue, keys};
use super::types::{Page, Pagination};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List products matching `filter`.
    ///
    /// Filtering, sorting, and pagination are entirely server-side; the
    /// returned page is used as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self, filter))]
    pub async fn list_products(
        &self,
        filter: &FilterState,
        limit: u32,
    ) -> Result<Page<Product>, ApiError> {
        let mut query = filter.to_query_pairs();
        query.push(("limit", limit.to_string()));

        let builder = self.request(Method::GET, &["products"])?.query(&query);
        let (raw, pagination) = self.fetch_list::<RawProduct>(builder).await?;

        let items: Vec<Product> = raw.into_iter().map(Product::from).collect();
        let pagination = pagination.unwrap_or_else(|| Pagination::single(items.len()));

        Ok(Page { items, pagination })
    }

    /// Fetch the featured products for the home page (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn featured_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::Featured(products)) = self.cache_get(keys::FEATURED).await {
            return Ok(products);
        }

        let builder = self.request(Method::GET, &["products", "featured"])?;
        let (raw, _) = self.fetch_list::<RawProduct>(builder).await?;
        let products: Vec<Product> = raw.into_iter().map(Product::from).collect();

        self.cache_put(keys::FEATURED, CacheValue::Featured(products.clone()))
            .await;
        Ok(products)
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the product does not exist.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let builder = self.request(Method::GET, &["products", id.as_str()])?;
        let raw = self.fetch::<RawProduct>(builder).await?;
        Ok(Product::from(raw))
    }

    /// Create a product (admin). Sends multipart when an image is attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or the request fails.
    #[instrument(skip(self, payload, image))]
    pub async fn create_product(
        &self,
        payload: &ProductPayload,
        image: Option<&Path>,
    ) -> Result<Product, ApiError> {
        let builder = self.request(Method::POST, &["products"])?;
        let builder = attach_product_payload(builder, payload, image).await?;

        let raw = self.fetch::<RawProduct>(builder).await?;
        self.invalidate_catalog_caches().await;
        Ok(Product::from(raw))
    }

    /// Update a product (admin). Sends multipart when an image is attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or the request fails.
    #[instrument(skip(self, payload, image))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
        image: Option<&Path>,
    ) -> Result<Product, ApiError> {
        let builder = self.request(Method::PUT, &["products", id.as_str()])?;
        let builder = attach_product_payload(builder, payload, image).await?;

        let raw = self.fetch::<RawProduct>(builder).await?;
        self.invalidate_catalog_caches().await;
        Ok(Product::from(raw))
    }

    /// Delete a product (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &["products", id.as_str()])?;
        self.execute(builder).await?;
        self.invalidate_catalog_caches().await;
        Ok(())
    }
}

/// Attach a product payload as JSON, or as multipart form data when an
/// image file accompanies it.
async fn attach_product_payload(
    builder: reqwest::RequestBuilder,
    payload: &ProductPayload,
    image: Option<&Path>,
) -> Result<reqwest::RequestBuilder, ApiError> {
    let Some(path) = image else {
        return Ok(builder.json(payload));
    };

    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());

    let mut form = reqwest::multipart::Form::new()
        .text("name", payload.name.clone())
        .text("category", payload.category.clone())
        .text("price", payload.price.to_string())
        .text("description", payload.description.clone())
        .text("stock", payload.stock.to_string())
        .text("status", payload.status.as_str())
        .part(
            "image",
            reqwest::multipart::Part::bytes(bytes).file_name(file_name),
        );

    if !payload.features.is_empty() {
        form = form.text("features", payload.features.join(","));
    }

    Ok(builder.multipart(form))
}
