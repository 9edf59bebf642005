//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database,
    domain::{
        cart_taxes::{
            CartTaxesService, DefaultCartTaxesService, repository::PgCartTaxesRepository,
        },
        delivery_groups::{
            DefaultDeliveryGroupsService, DeliveryGroupsService,
            repository::PgDeliveryGroupsRepository,
        },
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

/// Services shared by every request, each wired to its own store gateway.
#[derive(Clone)]
pub struct AppContext {
    pub cart_taxes: Arc<dyn CartTaxesService>,
    pub delivery_groups: Arc<dyn DeliveryGroupsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        cart_taxes: Arc<dyn CartTaxesService>,
        delivery_groups: Arc<dyn DeliveryGroupsService>,
    ) -> Self {
        Self {
            cart_taxes,
            delivery_groups,
        }
    }

    /// Build application context from a database URL, applying any pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating
    /// it fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::new(
            Arc::new(DefaultCartTaxesService::new(Arc::new(
                PgCartTaxesRepository::new(pool.clone()),
            ))),
            Arc::new(DefaultDeliveryGroupsService::new(Arc::new(
                PgDeliveryGroupsRepository::new(pool),
            ))),
        ))
    }
}
