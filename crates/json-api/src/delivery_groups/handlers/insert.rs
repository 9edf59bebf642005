//! Insert Cart Delivery Group Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use cartkit_app::domain::delivery_groups::data::NewDeliveryGroup;

use crate::{
    delivery_groups::{
        errors::into_status_error,
        models::{DeliveryGroupRequest, DeliveryGroupResponse},
    },
    extensions::*,
    validation::{ValidationErrorResponse, render_field_errors},
};

/// Insert Cart Delivery Group Handler
///
/// Missing fields are reported together before the amounts are checked.
#[endpoint(
    tags("cart-delivery-group"),
    summary = "Insert Cart Delivery Group",
    responses(
        (status_code = StatusCode::CREATED, description = "Delivery group created", body = DeliveryGroupResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing fields or negative amount", body = ValidationErrorResponse),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<DeliveryGroupRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    let group = match NewDeliveryGroup::try_from(json.into_inner()) {
        Ok(group) => group,
        Err(errors) => return Ok(render_field_errors(res, errors)),
    };

    let record = state
        .app
        .delivery_groups
        .insert_delivery_group(group)
        .await
        .map_err(|error| into_status_error(&error))?;

    res.render(Json(DeliveryGroupResponse::from(record)));

    Ok(StatusCode::CREATED)
}
