//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! foodcart add f1          # add one unit of catalog item f1
//! foodcart adjust f1 -- -1 # step quantity down, removing at zero
//! foodcart set f1 4
//! foodcart remove f1
//! foodcart clear
//! foodcart show
//! ```

use foodcart_client::{CartEngine, FileStore, InMemoryCatalog};
use foodcart_core::CartAction;
use tracing::{info, warn};

use super::{CommandError, render};
use crate::config::CliConfig;

/// One cart operation.
#[derive(Debug, Clone)]
pub enum CartCommand {
    Show,
    Add { id: String },
    Remove { id: String },
    Set { id: String, quantity: i64 },
    Adjust { id: String, delta: i64 },
    Clear,
}

/// Open the stored cart, apply `command`, wait for the write, print the cart.
///
/// # Errors
///
/// Returns an error if `add` cannot resolve the food in the catalog.
/// Storage faults are reported in the printed cart instead.
pub async fn run(config: &CliConfig, command: CartCommand) -> Result<(), CommandError> {
    let action = match command {
        CartCommand::Show => None,
        CartCommand::Add { id } => {
            let catalog = InMemoryCatalog::load(&config.catalog_path).await?;
            let food = catalog
                .get(&id)
                .cloned()
                .ok_or(CommandError::UnknownFood(id))?;
            if !food.is_available {
                warn!(id = %food.id, "Adding an item marked unavailable");
            }
            Some(CartAction::Add(food))
        }
        CartCommand::Remove { id } => Some(CartAction::Remove(id.into())),
        CartCommand::Set { id, quantity } => Some(CartAction::SetQuantity {
            id: id.into(),
            quantity,
        }),
        CartCommand::Adjust { id, delta } => Some(CartAction::AdjustQuantity {
            id: id.into(),
            delta,
        }),
        CartCommand::Clear => Some(CartAction::Clear),
    };

    let store = FileStore::new(&config.data_dir);
    let engine = CartEngine::open(store, config.cart.clone()).await;

    if let Some(action) = action {
        info!(action = action.name(), "Applying cart action");
        engine.dispatch(action);
        engine.flush().await;
    }

    render::cart(&engine.snapshot(), config.currency);
    Ok(())
}
