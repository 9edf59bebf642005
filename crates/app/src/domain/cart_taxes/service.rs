//! Cart taxes service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{error, info, warn};
use validator::Validate;

use crate::domain::cart_taxes::{
    data::NewCartTax,
    errors::CartTaxesServiceError,
    records::{CartTaxRecord, CartTaxUuid},
    repository::CartTaxesRepository,
};

#[derive(Clone)]
pub struct DefaultCartTaxesService {
    repository: Arc<dyn CartTaxesRepository>,
}

impl DefaultCartTaxesService {
    #[must_use]
    pub fn new(repository: Arc<dyn CartTaxesRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CartTaxesService for DefaultCartTaxesService {
    async fn add_cart_tax(
        &self,
        cart_tax: NewCartTax,
    ) -> Result<CartTaxRecord, CartTaxesServiceError> {
        cart_tax.validate()?;

        info!(
            cart_id = %cart_tax.cart_id,
            cart_item_id = %cart_tax.cart_item_id,
            "adding a new cart tax entry"
        );

        let document = cart_tax.into_document(Timestamp::now());

        let saved = self.repository.save(None, document).await?;

        info!(
            uuid = %saved.uuid,
            cart_id = %saved.document.cart_id,
            cart_item_id = %saved.document.cart_item_id,
            "added cart tax entry"
        );

        Ok(saved)
    }

    async fn get_cart_tax(
        &self,
        cart_tax: CartTaxUuid,
    ) -> Result<CartTaxRecord, CartTaxesServiceError> {
        info!(uuid = %cart_tax, "fetching cart tax entry");

        let Some(record) = self.repository.find_by_id(cart_tax).await? else {
            warn!(uuid = %cart_tax, "cart tax entry not found");

            return Err(CartTaxesServiceError::NotFound(cart_tax));
        };

        info!(uuid = %cart_tax, "cart tax entry found");

        Ok(record)
    }

    async fn update_cart_tax(
        &self,
        cart_tax: CartTaxUuid,
        update: NewCartTax,
    ) -> Result<CartTaxRecord, CartTaxesServiceError> {
        update.validate()?;

        info!(uuid = %cart_tax, "updating cart tax entry");

        let Some(existing) = self.repository.find_by_id(cart_tax).await? else {
            error!(uuid = %cart_tax, "cart tax entry not found for update");

            return Err(CartTaxesServiceError::NotFound(cart_tax));
        };

        let created_date = update
            .created_date
            .unwrap_or(existing.document.created_date);

        let updated = self
            .repository
            .save(Some(cart_tax), update.into_document(created_date))
            .await?;

        info!(uuid = %cart_tax, "updated cart tax entry");

        Ok(updated)
    }

    async fn delete_cart_tax(
        &self,
        cart_tax: CartTaxUuid,
    ) -> Result<(), CartTaxesServiceError> {
        info!(uuid = %cart_tax, "deleting cart tax entry");

        if self.repository.find_by_id(cart_tax).await?.is_none() {
            error!(uuid = %cart_tax, "cart tax entry not found for deletion");

            return Err(CartTaxesServiceError::NotFound(cart_tax));
        }

        self.repository.delete_by_id(cart_tax).await?;

        info!(uuid = %cart_tax, "deleted cart tax entry");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartTaxesService: Send + Sync {
    /// Validates and stores a new entry. The creation date is always stamped
    /// with the current time, whatever the caller supplied.
    async fn add_cart_tax(
        &self,
        cart_tax: NewCartTax,
    ) -> Result<CartTaxRecord, CartTaxesServiceError>;

    /// Retrieve a single entry.
    async fn get_cart_tax(
        &self,
        cart_tax: CartTaxUuid,
    ) -> Result<CartTaxRecord, CartTaxesServiceError>;

    /// Replaces the whole entry stored under `cart_tax`, which must already exist.
    async fn update_cart_tax(
        &self,
        cart_tax: CartTaxUuid,
        update: NewCartTax,
    ) -> Result<CartTaxRecord, CartTaxesServiceError>;

    /// Deletes an existing entry.
    async fn delete_cart_tax(
        &self,
        cart_tax: CartTaxUuid,
    ) -> Result<(), CartTaxesServiceError>;
}
