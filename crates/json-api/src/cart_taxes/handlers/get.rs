//! Get Cart Tax Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use cartkit_app::domain::cart_taxes::{CartTaxesServiceError, records::CartTaxUuid};

use crate::{
    cart_taxes::{
        errors::{absent_on_get, into_status_error},
        models::CartTaxResponse,
    },
    extensions::*,
};

/// Get Cart Tax Handler
#[endpoint(
    tags("cart-tax"),
    summary = "Get Cart Tax Entry",
    responses(
        (status_code = StatusCode::OK, description = "Cart tax entry", body = CartTaxResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart tax entry not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartTaxResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = id.into_inner();

    let Ok(uuid) = id.parse::<CartTaxUuid>() else {
        return Err(absent_on_get(&id));
    };

    match state.app.cart_taxes.get_cart_tax(uuid).await {
        Ok(record) => Ok(Json(record.into())),
        Err(CartTaxesServiceError::NotFound(_)) => Err(absent_on_get(&id)),
        Err(error) => Err(into_status_error(&error)),
    }
}
