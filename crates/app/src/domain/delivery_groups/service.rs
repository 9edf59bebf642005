//! Cart delivery groups service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use crate::domain::delivery_groups::{
    data::{DeliveryGroupFilter, DeliveryGroupUpdate, NewDeliveryGroup},
    errors::DeliveryGroupsServiceError,
    records::{DeliveryGroupRecord, DeliveryGroupUuid},
    repository::DeliveryGroupsRepository,
    validation::ensure_non_negative_amounts,
};

#[derive(Clone)]
pub struct DefaultDeliveryGroupsService {
    repository: Arc<dyn DeliveryGroupsRepository>,
}

impl DefaultDeliveryGroupsService {
    #[must_use]
    pub fn new(repository: Arc<dyn DeliveryGroupsRepository>) -> Self {
        Self { repository }
    }

    async fn search(
        &self,
        filter: DeliveryGroupFilter,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError> {
        info!(?filter, "searching delivery groups");

        let groups = self.repository.find_by(filter).await?;

        info!(count = groups.len(), "delivery group search complete");

        Ok(groups)
    }
}

#[async_trait]
impl DeliveryGroupsService for DefaultDeliveryGroupsService {
    async fn insert_delivery_group(
        &self,
        group: NewDeliveryGroup,
    ) -> Result<DeliveryGroupRecord, DeliveryGroupsServiceError> {
        ensure_non_negative_amounts(&group)?;

        info!(cart_id = %group.cart_id, "inserting delivery group");

        let inserted = self
            .repository
            .save(None, group.into_document(Timestamp::now()))
            .await?;

        info!(uuid = %inserted.uuid, "inserted delivery group");

        Ok(inserted)
    }

    async fn get_delivery_group(
        &self,
        group: DeliveryGroupUuid,
    ) -> Result<Option<DeliveryGroupRecord>, DeliveryGroupsServiceError> {
        info!(uuid = %group, "fetching delivery group");

        let record = self.repository.find_by_id(group).await?;

        if record.is_some() {
            info!(uuid = %group, "delivery group found");
        } else {
            warn!(uuid = %group, "delivery group not found");
        }

        Ok(record)
    }

    async fn update_delivery_group(
        &self,
        group: DeliveryGroupUuid,
        update: DeliveryGroupUpdate,
    ) -> Result<DeliveryGroupRecord, DeliveryGroupsServiceError> {
        info!(uuid = %group, "updating delivery group");

        let Some(DeliveryGroupRecord { mut document, .. }) =
            self.repository.find_by_id(group).await?
        else {
            warn!(uuid = %group, "delivery group not found");

            return Err(DeliveryGroupsServiceError::NotFound(group));
        };

        update.apply_to(&mut document);

        let updated = self.repository.save(Some(group), document).await?;

        info!(uuid = %group, "updated delivery group");

        Ok(updated)
    }

    async fn delete_delivery_group(
        &self,
        group: DeliveryGroupUuid,
    ) -> Result<bool, DeliveryGroupsServiceError> {
        info!(uuid = %group, "deleting delivery group");

        if self.repository.find_by_id(group).await?.is_none() {
            warn!(uuid = %group, "delivery group not found for deletion");

            return Ok(false);
        }

        self.repository.delete_by_id(group).await?;

        info!(uuid = %group, "deleted delivery group");

        Ok(true)
    }

    async fn search_by_cart_id(
        &self,
        cart_id: String,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError> {
        self.search(DeliveryGroupFilter::CartId(cart_id)).await
    }

    async fn search_by_customer_name(
        &self,
        customer_name: String,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError> {
        self.search(DeliveryGroupFilter::CustomerName(customer_name))
            .await
    }

    async fn search_by_delivery_method_id(
        &self,
        delivery_method_id: String,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError> {
        self.search(DeliveryGroupFilter::DeliveryMethodId(delivery_method_id))
            .await
    }

    async fn search_by_ship_to_phone_number(
        &self,
        ship_to_phone_number: String,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError> {
        self.search(DeliveryGroupFilter::ShipToPhoneNumber(ship_to_phone_number))
            .await
    }
}

#[automock]
#[async_trait]
pub trait DeliveryGroupsService: Send + Sync {
    /// Stores a new group stamped with the current time. Negative amounts are
    /// rejected before anything is written.
    async fn insert_delivery_group(
        &self,
        group: NewDeliveryGroup,
    ) -> Result<DeliveryGroupRecord, DeliveryGroupsServiceError>;

    async fn get_delivery_group(
        &self,
        group: DeliveryGroupUuid,
    ) -> Result<Option<DeliveryGroupRecord>, DeliveryGroupsServiceError>;

    /// Copies the updatable fields onto the stored group.
    async fn update_delivery_group(
        &self,
        group: DeliveryGroupUuid,
        update: DeliveryGroupUpdate,
    ) -> Result<DeliveryGroupRecord, DeliveryGroupsServiceError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete_delivery_group(
        &self,
        group: DeliveryGroupUuid,
    ) -> Result<bool, DeliveryGroupsServiceError>;

    async fn search_by_cart_id(
        &self,
        cart_id: String,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError>;

    /// Case-insensitive match on the customer name.
    async fn search_by_customer_name(
        &self,
        customer_name: String,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError>;

    async fn search_by_delivery_method_id(
        &self,
        delivery_method_id: String,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError>;

    async fn search_by_ship_to_phone_number(
        &self,
        ship_to_phone_number: String,
    ) -> Result<Vec<DeliveryGroupRecord>, DeliveryGroupsServiceError>;
}
