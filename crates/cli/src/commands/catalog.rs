//! Catalog browsing command.

use foodcart_client::{CatalogBrowser, InMemoryCatalog};
use foodcart_core::{FilterAction, FilterPatch};

use super::{CommandError, render};
use crate::config::CliConfig;

/// Query the catalog with `patch` merged over the default filters.
///
/// `category` may be the "All" chip label, which clears the category.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn browse(
    config: &CliConfig,
    category: Option<String>,
    patch: FilterPatch,
) -> Result<(), CommandError> {
    let catalog = InMemoryCatalog::load(&config.catalog_path).await?;
    let mut browser = CatalogBrowser::new(catalog);

    browser.set_filters(patch);
    if let Some(label) = category {
        browser.dispatch(FilterAction::SelectCategory(label));
    }
    browser.refresh().await?;

    render::catalog(
        browser.foods(),
        &browser.categories(),
        browser.filters(),
        config.currency,
    );
    Ok(())
}
