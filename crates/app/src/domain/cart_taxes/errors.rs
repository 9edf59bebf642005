//! Cart taxes service errors.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::{
    cart_taxes::records::CartTaxUuid, store::StoreError, validation::FieldErrors,
};

#[derive(Debug, Error)]
pub enum CartTaxesServiceError {
    #[error("invalid cart tax entry: {0}")]
    Validation(FieldErrors),

    #[error("Cart tax entry not found with ID: {0}")]
    NotFound(CartTaxUuid),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationErrors> for CartTaxesServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.into())
    }
}
