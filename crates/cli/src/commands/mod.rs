//! CLI command implementations.

use foodcart_client::CatalogError;
use thiserror::Error;

pub mod cart;
pub mod catalog;
mod render;

/// A command could not run.
///
/// Cart persistence faults are not errors here: they are printed with the
/// cart and the command still succeeds.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("no food with id {0:?} in the catalog")]
    UnknownFood(String),
}
