//! Search Cart Delivery Group Handlers
//!
//! The cart id and customer name searches answer `204 No Content` when nothing
//! matches; the delivery method and phone number searches always answer `200`.

use salvo::{oapi::extract::PathParam, prelude::*};

use cartkit_app::domain::delivery_groups::records::DeliveryGroupRecord;

use crate::{
    delivery_groups::{errors::into_status_error, models::DeliveryGroupResponse},
    extensions::*,
};

fn render_groups(res: &mut Response, groups: Vec<DeliveryGroupRecord>) -> StatusCode {
    let groups: Vec<DeliveryGroupResponse> =
        groups.into_iter().map(DeliveryGroupResponse::from).collect();

    res.render(Json(groups));

    StatusCode::OK
}

fn render_groups_or_no_content(res: &mut Response, groups: Vec<DeliveryGroupRecord>) -> StatusCode {
    if groups.is_empty() {
        StatusCode::NO_CONTENT
    } else {
        render_groups(res, groups)
    }
}

/// Search By Cart Id Handler
#[endpoint(
    tags("cart-delivery-group"),
    summary = "Search Cart Delivery Groups By Cart Id",
    responses(
        (status_code = StatusCode::OK, description = "Matching delivery groups", body = Vec<DeliveryGroupResponse>),
        (status_code = StatusCode::NO_CONTENT, description = "No matching delivery groups"),
    ),
)]
pub(crate) async fn by_cart_id(
    cart_id: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    let groups = state
        .app
        .delivery_groups
        .search_by_cart_id(cart_id.into_inner())
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(render_groups_or_no_content(res, groups))
}

/// Search By Customer Name Handler
///
/// Matches the customer name ignoring case.
#[endpoint(
    tags("cart-delivery-group"),
    summary = "Search Cart Delivery Groups By Customer Name",
    responses(
        (status_code = StatusCode::OK, description = "Matching delivery groups", body = Vec<DeliveryGroupResponse>),
        (status_code = StatusCode::NO_CONTENT, description = "No matching delivery groups"),
    ),
)]
pub(crate) async fn by_customer_name(
    customer_name: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    let groups = state
        .app
        .delivery_groups
        .search_by_customer_name(customer_name.into_inner())
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(render_groups_or_no_content(res, groups))
}

/// Search By Delivery Method Handler
#[endpoint(
    tags("cart-delivery-group"),
    summary = "Search Cart Delivery Groups By Delivery Method",
    responses(
        (status_code = StatusCode::OK, description = "Matching delivery groups", body = Vec<DeliveryGroupResponse>),
    ),
)]
pub(crate) async fn by_delivery_method_id(
    delivery_method_id: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    let groups = state
        .app
        .delivery_groups
        .search_by_delivery_method_id(delivery_method_id.into_inner())
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(render_groups(res, groups))
}

/// Search By Phone Number Handler
#[endpoint(
    tags("cart-delivery-group"),
    summary = "Search Cart Delivery Groups By Phone Number",
    responses(
        (status_code = StatusCode::OK, description = "Matching delivery groups", body = Vec<DeliveryGroupResponse>),
    ),
)]
pub(crate) async fn by_ship_to_phone_number(
    ship_to_phone_number: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    let groups = state
        .app
        .delivery_groups
        .search_by_ship_to_phone_number(ship_to_phone_number.into_inner())
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(render_groups(res, groups))
}
