//! Create Cart Tax Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use cartkit_app::domain::cart_taxes::data::NewCartTax;

use crate::{
    cart_taxes::{
        errors::render_error,
        models::{CartTaxRequest, CartTaxResponse},
    },
    extensions::*,
    validation::ValidationErrorResponse,
};

/// Create Cart Tax Handler
///
/// Stores a new cart tax entry. The creation date is always stamped by the
/// server.
#[endpoint(
    tags("cart-tax"),
    summary = "Add Cart Tax Entry",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart tax entry created", body = CartTaxResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart tax entry", body = ValidationErrorResponse),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartTaxRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let cart_tax = NewCartTax::try_from(json.into_inner())?;

    match state.app.cart_taxes.add_cart_tax(cart_tax).await {
        Ok(record) => {
            res.render(Json(CartTaxResponse::from(record)));

            Ok(StatusCode::CREATED)
        }
        Err(error) => render_error(res, error),
    }
}
