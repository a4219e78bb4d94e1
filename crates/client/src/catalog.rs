//! Catalog browsing.
//!
//! The remote catalog is an external collaborator: it takes a
//! [`FoodFilters`] descriptor and returns matching foods. This module defines
//! that seam, a JSON-backed reference implementation, and the
//! [`CatalogBrowser`] that holds the filter selection for a screen.

use std::future::Future;
use std::path::Path;

use foodcart_core::{FilterAction, FilterPatch, Food, FoodFilters, category_options};
use tracing::{debug, instrument, warn};

use crate::error::CatalogError;

/// Provider of foods matching a filter descriptor.
///
/// Caching and retry belong to the implementation, not to callers.
pub trait CatalogSource: Send + Sync {
    fn query(
        &self,
        filters: &FoodFilters,
    ) -> impl Future<Output = Result<Vec<Food>, CatalogError>> + Send;
}

/// A fixed list of foods, filtered locally.
///
/// - `category`: exact match; empty matches everything
/// - `min_price` / `max_price`: inclusive bounds
/// - `search`: case-insensitive substring of the name
/// - `sort_by`: `price` or `price_asc`, `price_desc`, `name`; anything else
///   keeps catalog order
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    foods: Vec<Food>,
}

impl InMemoryCatalog {
    #[must_use]
    pub const fn new(foods: Vec<Food>) -> Self {
        Self { foods }
    }

    /// Parse a JSON array of foods.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] if the JSON is not a list of foods.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Read a JSON array of foods from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument]
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;
        debug!(foods = catalog.foods.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Find a food by ID regardless of filters.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|food| food.id.as_str() == id)
    }

    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    fn matches(filters: &FoodFilters, food: &Food) -> bool {
        let price = food.price.amount();
        let search = filters.search.trim().to_lowercase();

        (filters.category.is_empty() || food.category == filters.category)
            && price >= filters.min_price
            && price <= filters.max_price
            && (search.is_empty() || food.name.to_lowercase().contains(&search))
    }
}

impl CatalogSource for InMemoryCatalog {
    async fn query(&self, filters: &FoodFilters) -> Result<Vec<Food>, CatalogError> {
        let mut foods: Vec<Food> = self
            .foods
            .iter()
            .filter(|food| Self::matches(filters, food))
            .cloned()
            .collect();

        match filters.sort_by.as_str() {
            "price" | "price_asc" => foods.sort_by_key(|food| food.price),
            "price_desc" => foods.sort_by_key(|food| std::cmp::Reverse(food.price)),
            "name" => foods.sort_by_key(|food| food.name.to_lowercase()),
            _ => {}
        }
        Ok(foods)
    }
}

/// Filter selection plus the most recent catalog result.
///
/// The selection is the only input to the catalog query. The browser does no
/// caching of its own: [`CatalogBrowser::refresh`] always asks the source.
#[derive(Debug)]
pub struct CatalogBrowser<C> {
    source: C,
    filters: FoodFilters,
    foods: Vec<Food>,
}

impl<C: CatalogSource> CatalogBrowser<C> {
    /// A browser with default filters and no results yet.
    pub fn new(source: C) -> Self {
        Self {
            source,
            filters: FoodFilters::default(),
            foods: Vec::new(),
        }
    }

    /// Apply a filter transition. Call [`CatalogBrowser::refresh`] to re-query.
    pub fn dispatch(&mut self, action: FilterAction) {
        self.filters.apply(action);
    }

    /// Merge `patch` into the selection.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.dispatch(FilterAction::Set(patch));
    }

    /// Restore the default selection.
    pub fn reset_filters(&mut self) {
        self.dispatch(FilterAction::Reset);
    }

    /// Query the source with the current selection.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the previous result is kept.
    #[instrument(skip(self), fields(filters = ?self.filters))]
    pub async fn refresh(&mut self) -> Result<&[Food], CatalogError> {
        let result = self.source.query(&self.filters).await;
        match result {
            Ok(foods) => {
                debug!(count = foods.len(), "Catalog refreshed");
                self.foods = foods;
                Ok(&self.foods)
            }
            Err(e) => {
                warn!(error = %e, "Catalog query failed");
                Err(e)
            }
        }
    }

    #[must_use]
    pub const fn filters(&self) -> &FoodFilters {
        &self.filters
    }

    /// The most recent successful result.
    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// "All" followed by the distinct categories of the last result.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        category_options(&self.foods)
    }

    #[must_use]
    pub const fn source(&self) -> &C {
        &self.source
    }
}
