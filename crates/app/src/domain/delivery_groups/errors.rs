//! Cart delivery groups service errors.

use thiserror::Error;

use crate::domain::{delivery_groups::records::DeliveryGroupUuid, store::StoreError};

#[derive(Debug, Error)]
pub enum DeliveryGroupsServiceError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("CartDeliveryGroup not found")]
    NotFound(DeliveryGroupUuid),

    #[error(transparent)]
    Store(#[from] StoreError),
}
