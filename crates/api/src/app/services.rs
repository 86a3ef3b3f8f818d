//! Service wiring: repositories, account directory and report settings.

use std::sync::Arc;

use gastro_accounts::{AccountDirectory, AccountService, InMemoryAccountDirectory, SessionIssuer};
use gastro_infra::{InMemoryRepository, Repository};
use gastro_inventory::Ingredient;
use gastro_recipes::Recipe;

use crate::config::AppConfig;

/// Shared state handed to every handler through an `Extension`.
pub struct AppServices {
    pub ingredients: Arc<dyn Repository<Ingredient>>,
    pub recipes: Arc<dyn Repository<Recipe>>,
    pub accounts: AccountService<Arc<dyn AccountDirectory>>,
    /// Stock below this level is reported as low unless a request overrides it.
    pub low_stock_threshold: f64,
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices")
            .field("ingredients", &self.ingredients.count())
            .field("recipes", &self.recipes.count())
            .field("low_stock_threshold", &self.low_stock_threshold)
            .finish_non_exhaustive()
    }
}

pub fn build_services(config: &AppConfig) -> AppServices {
    let ingredients: Arc<dyn Repository<Ingredient>> = Arc::new(InMemoryRepository::<Ingredient>::new());
    let recipes: Arc<dyn Repository<Recipe>> = Arc::new(InMemoryRepository::<Recipe>::new());

    let directory: Arc<dyn AccountDirectory> = Arc::new(InMemoryAccountDirectory::new());
    let sessions = SessionIssuer::new(config.secret_key.as_bytes(), config.session_ttl);

    tracing::info!(
        low_stock_threshold = config.low_stock_threshold,
        session_ttl_minutes = config.session_ttl.num_minutes(),
        "services initialized (in-memory storage)"
    );

    AppServices {
        ingredients,
        recipes,
        accounts: AccountService::new(directory, sessions),
        low_stock_threshold: config.low_stock_threshold,
    }
}
