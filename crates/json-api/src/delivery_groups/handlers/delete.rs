//! Delete Cart Delivery Group Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use cartkit_app::domain::delivery_groups::records::DeliveryGroupUuid;

use crate::{
    delivery_groups::errors::{DELETE_FAILED, into_status_error},
    extensions::*,
};

/// Delete Cart Delivery Group Handler
#[endpoint(
    tags("cart-delivery-group"),
    summary = "Delete Cart Delivery Group",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Delivery group deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Delivery group not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    let Ok(uuid) = id.parse::<DeliveryGroupUuid>() else {
        return Err(StatusError::not_found().brief(DELETE_FAILED));
    };

    let deleted = state
        .app
        .delivery_groups
        .delete_delivery_group(uuid)
        .await
        .map_err(|error| into_status_error(&error))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusError::not_found().brief(DELETE_FAILED))
    }
}
