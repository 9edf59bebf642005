//! Cart Tax Errors

use salvo::prelude::*;
use tracing::error;

use cartkit_app::domain::cart_taxes::CartTaxesServiceError;

use crate::validation::render_field_errors;

/// Validation failures get a field map body; everything else becomes a `400`
/// with an `ERROR:` brief.
pub(crate) fn render_error(
    res: &mut Response,
    error: CartTaxesServiceError,
) -> Result<StatusCode, StatusError> {
    match error {
        CartTaxesServiceError::Validation(errors) => Ok(render_field_errors(res, errors)),
        error => Err(into_status_error(&error)),
    }
}

pub(crate) fn into_status_error(error: &CartTaxesServiceError) -> StatusError {
    if let CartTaxesServiceError::Store(source) = error {
        error!("cart tax store failure: {source}");
    }

    StatusError::bad_request().brief(format!("ERROR: {error}"))
}

/// Deleting an absent entry is a `404`, unlike the other operations.
pub(crate) fn into_delete_status_error(error: &CartTaxesServiceError) -> StatusError {
    match error {
        CartTaxesServiceError::NotFound(uuid) => absent_on_delete(&uuid.to_string()),
        CartTaxesServiceError::Validation(_) | CartTaxesServiceError::Store(_) => {
            into_status_error(error)
        }
    }
}

/// A path id that is not a UUID names no stored entry, so the absent responses
/// take the raw text.
pub(crate) fn absent_on_get(id: &str) -> StatusError {
    StatusError::bad_request().brief(format!("ERROR: Cart tax with ID {id} not found"))
}

pub(crate) fn absent_on_update(id: &str) -> StatusError {
    StatusError::bad_request().brief(format!("ERROR: Cart tax entry not found with ID: {id}"))
}

pub(crate) fn absent_on_delete(id: &str) -> StatusError {
    StatusError::not_found().brief(format!("Error: Cart tax entry not found with ID: {id}"))
}
