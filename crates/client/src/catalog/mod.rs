//! Product catalog browsing: filter state and the query controller.

mod debounce;
mod filter;

pub use debounce::Debouncer;
pub use filter::FilterState;

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use tracing::instrument;

use robotech_core::{CategoryId, SortKey};

use crate::api::{ApiClient, ApiError, Page, Pagination};
use crate::models::Product;

/// Drives the product listing: owns the [`FilterState`], re-fetches when
/// it changes, and holds the most recent page of results.
///
/// Requests are tagged with a monotonic sequence number; a response is
/// applied only if it belongs to the latest issued request, so a slow
/// response can never overwrite the results of a newer filter change.
pub struct CatalogController {
    api: ApiClient,
    page_size: u32,
    filter: RwLock<FilterState>,
    results: RwLock<Option<Page<Product>>>,
    issued: AtomicU64,
}

impl CatalogController {
    /// Create a controller with default filter state.
    #[must_use]
    pub fn new(api: ApiClient, page_size: u32) -> Self {
        Self::with_filter(api, page_size, FilterState::default())
    }

    /// Create a controller with filter state restored from a URL.
    #[must_use]
    pub fn with_filter(api: ApiClient, page_size: u32, filter: FilterState) -> Self {
        Self {
            api,
            page_size,
            filter: RwLock::new(filter),
            results: RwLock::new(None),
            issued: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current filter state.
    #[must_use]
    pub fn filter(&self) -> FilterState {
        self.filter
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// The most recently applied page of results, if any fetch has
    /// completed.
    #[must_use]
    pub fn results(&self) -> Option<Page<Product>> {
        self.results
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Pagination of the current results, verbatim from the backend.
    #[must_use]
    pub fn pagination(&self) -> Option<Pagination> {
        self.results().map(|page| page.pagination)
    }

    /// Fetch the listing for the current filter state.
    ///
    /// Returns `true` if the response was applied, `false` if it was
    /// discarded as stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<bool, ApiError> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = self.filter();

        let page = self.api.list_products(&filter, self.page_size).await?;
        Ok(self.apply_if_latest(ticket, page))
    }

    /// Apply a fetched page unless a newer request has been issued.
    fn apply_if_latest(&self, ticket: u64, page: Page<Product>) -> bool {
        if ticket != self.issued.load(Ordering::SeqCst) {
            tracing::debug!(ticket, "discarding stale product listing response");
            return false;
        }

        let mut results = self
            .results
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *results = Some(page);
        true
    }

    async fn update_and_refresh(
        &self,
        apply: impl FnOnce(&mut FilterState),
    ) -> Result<(), ApiError> {
        {
            let mut filter = self
                .filter
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            apply(&mut filter);
        }
        self.refresh().await.map(|_| ())
    }

    // =========================================================================
    // Setters - each resets the page (except set_page) and re-fetches
    // =========================================================================

    /// Filter by category and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-fetch fails.
    pub async fn set_category(&self, category: Option<CategoryId>) -> Result<(), ApiError> {
        self.update_and_refresh(|f| f.set_category(category)).await
    }

    /// Filter by price range and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-fetch fails.
    pub async fn set_price_range(
        &self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> Result<(), ApiError> {
        self.update_and_refresh(|f| f.set_price_range(min, max))
            .await
    }

    /// Filter by minimum rating and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-fetch fails.
    pub async fn set_rating(&self, min_rating: Option<u8>) -> Result<(), ApiError> {
        self.update_and_refresh(|f| f.set_rating(min_rating)).await
    }

    /// Set the search term and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-fetch fails.
    pub async fn set_search(&self, search: Option<String>) -> Result<(), ApiError> {
        self.update_and_refresh(|f| f.set_search(search)).await
    }

    /// Filter by stock availability and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-fetch fails.
    pub async fn set_in_stock(&self, in_stock: Option<bool>) -> Result<(), ApiError> {
        self.update_and_refresh(|f| f.set_in_stock(in_stock)).await
    }

    /// Change the sort order and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-fetch fails.
    pub async fn set_sort(&self, sort: SortKey) -> Result<(), ApiError> {
        self.update_and_refresh(|f| f.set_sort(sort)).await
    }

    /// Move to another page of the current results and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-fetch fails.
    pub async fn set_page(&self, page: u32) -> Result<(), ApiError> {
        self.update_and_refresh(|f| f.set_page(page)).await
    }

    /// Reset every filter to its default and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-fetch fails.
    pub async fn clear_filters(&self) -> Result<(), ApiError> {
        self.update_and_refresh(FilterState::clear).await
    }
}
