//! Cart Delivery Group Errors

use salvo::http::StatusError;
use tracing::error;

use cartkit_app::domain::delivery_groups::DeliveryGroupsServiceError;

pub(crate) const GROUP_NOT_FOUND: &str = "Cart delivery group not found";
pub(crate) const DELETE_FAILED: &str = "Error occurred while deleting cart delivery group";
pub(crate) const UPDATE_NOT_FOUND: &str = "CartDeliveryGroup not found";

pub(crate) fn into_status_error(error: &DeliveryGroupsServiceError) -> StatusError {
    match error {
        DeliveryGroupsServiceError::InvalidArgument(message) => {
            StatusError::bad_request().brief(message.clone())
        }
        DeliveryGroupsServiceError::NotFound(uuid) => {
            error!(%uuid, "cart delivery group not found");

            StatusError::bad_request().brief(UPDATE_NOT_FOUND)
        }
        DeliveryGroupsServiceError::Store(source) => {
            error!("cart delivery group store failure: {source}");

            StatusError::internal_server_error().brief(format!("An error occurred: {source}"))
        }
    }
}
