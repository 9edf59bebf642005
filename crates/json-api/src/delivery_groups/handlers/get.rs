//! Get Cart Delivery Group Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use cartkit_app::domain::delivery_groups::records::DeliveryGroupUuid;

use crate::{
    delivery_groups::{
        errors::{GROUP_NOT_FOUND, into_status_error},
        models::DeliveryGroupResponse,
    },
    extensions::*,
};

/// Get Cart Delivery Group Handler
///
/// A stored group is answered with `302 Found` and the group as the body.
#[endpoint(
    tags("cart-delivery-group"),
    summary = "Get Cart Delivery Group",
    responses(
        (status_code = StatusCode::FOUND, description = "Delivery group", body = DeliveryGroupResponse),
        (status_code = StatusCode::NOT_FOUND, description = "Delivery group not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    let Ok(uuid) = id.parse::<DeliveryGroupUuid>() else {
        return Err(StatusError::not_found().brief(GROUP_NOT_FOUND));
    };

    let record = state
        .app
        .delivery_groups
        .get_delivery_group(uuid)
        .await
        .map_err(|error| into_status_error(&error))?
        .ok_or_else(|| StatusError::not_found().brief(GROUP_NOT_FOUND))?;

    res.render(Json(DeliveryGroupResponse::from(record)));

    Ok(StatusCode::FOUND)
}
