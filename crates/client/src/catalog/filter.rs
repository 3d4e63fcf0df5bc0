//! Product listing filter state.

use std::str::FromStr;

use rust_decimal::Decimal;

use robotech_core::{CategoryId, SortKey};

/// The set of query parameters driving the product listing fetch.
///
/// Single source of truth for what is fetched: every field change other
/// than the page number resets `page` to 1, so a narrowed result set is
/// always viewed from its first page.
///
/// Reconstructed from the URL query string on navigation and serialized
/// back on change; never persisted anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<CategoryId>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Minimum star rating, 1-5.
    pub min_rating: Option<u8>,
    pub search: Option<String>,
    pub in_stock: Option<bool>,
    pub sort: SortKey,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            min_price: None,
            max_price: None,
            min_rating: None,
            search: None,
            in_stock: None,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl FilterState {
    /// Whether every field still has its default value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    // =========================================================================
    // Setters - anything but the page number resets the page
    // =========================================================================

    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_price_range(&mut self, min: Option<Decimal>, max: Option<Decimal>) {
        self.min_price = min;
        self.max_price = max;
        self.page = 1;
    }

    pub fn set_rating(&mut self, min_rating: Option<u8>) {
        self.min_rating = min_rating.map(|r| r.clamp(1, 5));
        self.page = 1;
    }

    /// Set the search term; blank input clears it.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search.filter(|s| !s.trim().is_empty());
        self.page = 1;
    }

    pub fn set_in_stock(&mut self, in_stock: Option<bool>) {
        self.in_stock = in_stock;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    /// Change the page without touching the other fields.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Reset everything to defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // =========================================================================
    // Wire / URL representation
    // =========================================================================

    /// Query pairs for the backend list endpoint.
    ///
    /// Only non-empty fields are included; defaults (featured sort,
    /// page 1) are omitted.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(category) = &self.category {
            pairs.push(("category", category.as_str().to_owned()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        if let Some(rating) = self.min_rating {
            pairs.push(("rating", rating.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(in_stock) = self.in_stock {
            pairs.push(("inStock", in_stock.to_string()));
        }
        if self.sort != SortKey::default() {
            pairs.push(("sort", self.sort.as_param().to_owned()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }

        pairs
    }

    /// Serialize to a URL query string (no leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Reconstruct filter state from a URL query string.
    ///
    /// The query string is untrusted navigation input: unknown keys and
    /// unparseable values are ignored rather than rejected.
    #[must_use]
    pub fn from_query_string(query: &str) -> Self {
        let mut state = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "category" if !value.is_empty() => {
                    state.category = Some(CategoryId::new(value.as_ref()));
                }
                "minPrice" => state.min_price = Decimal::from_str(&value).ok(),
                "maxPrice" => state.max_price = Decimal::from_str(&value).ok(),
                "rating" => {
                    state.min_rating = value.parse::<u8>().ok().filter(|r| (1..=5).contains(r));
                }
                "search" if !value.trim().is_empty() => {
                    state.search = Some(value.into_owned());
                }
                "inStock" => state.in_stock = value.parse::<bool>().ok(),
                "sort" => {
                    if let Ok(sort) = value.parse::<SortKey>() {
                        state.sort = sort;
                    }
                }
                "page" => {
                    if let Ok(page) = value.parse::<u32>() {
                        state.page = page.max(1);
                    }
                }
                _ => {}
            }
        }

        state
    }
}
