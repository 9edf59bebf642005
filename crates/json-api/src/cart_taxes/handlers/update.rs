//! Update Cart Tax Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use validator::Validate;

use cartkit_app::domain::cart_taxes::{data::NewCartTax, records::CartTaxUuid};

use crate::{
    cart_taxes::{
        errors::{absent_on_update, render_error},
        models::{CartTaxRequest, CartTaxResponse},
    },
    extensions::*,
    validation::{ValidationErrorResponse, render_field_errors},
};

/// Update Cart Tax Handler
///
/// Replaces the stored entry. When no creation date is supplied the stored one
/// is kept.
#[endpoint(
    tags("cart-tax"),
    summary = "Update Cart Tax Entry",
    responses(
        (status_code = StatusCode::OK, description = "Cart tax entry updated", body = CartTaxResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid or unknown cart tax entry", body = ValidationErrorResponse),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<CartTaxRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = id.into_inner();
    let update = NewCartTax::try_from(json.into_inner())?;

    // Field errors take precedence over the missing entry, as in the service.
    let Ok(uuid) = id.parse::<CartTaxUuid>() else {
        return match update.validate() {
            Ok(()) => Err(absent_on_update(&id)),
            Err(errors) => Ok(render_field_errors(res, errors.into())),
        };
    };

    match state.app.cart_taxes.update_cart_tax(uuid, update).await {
        Ok(record) => {
            res.render(Json(CartTaxResponse::from(record)));

            Ok(StatusCode::OK)
        }
        Err(error) => render_error(res, error),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use cartkit_app::domain::{
        cart_taxes::{CartTaxesServiceError, MockCartTaxesService, records::CartTaxUuid},
        validation::FieldErrors,
    };

    use crate::test_helpers::cart_taxes_service;

    use super::{super::tests::*, *};

    fn make_service(cart_taxes: MockCartTaxesService) -> Service {
        cart_taxes_service(cart_taxes, Router::with_path("api/cart-tax/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_returns_200() -> TestResult {
        let uuid = CartTaxUuid::new();
        let record = make_record(uuid);

        let mut cart_taxes = MockCartTaxesService::new();

        cart_taxes
            .expect_update_cart_tax()
            .once()
            .withf(move |id, update| *id == uuid && *update == sales_tax())
            .return_once(move |_, _| Ok(record));

        let mut res = TestClient::put(format!("http://example.com/api/cart-tax/{uuid}"))
            .json(&sales_tax_json())
            .send(&make_service(cart_taxes))
            .await;

        let body: CartTaxResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_entry_returns_400() -> TestResult {
        let uuid = CartTaxUuid::new();

        let mut cart_taxes = MockCartTaxesService::new();

        cart_taxes
            .expect_update_cart_tax()
            .once()
            .return_once(move |_, _| Err(CartTaxesServiceError::NotFound(uuid)));

        let res = TestClient::put(format!("http://example.com/api/cart-tax/{uuid}"))
            .json(&sales_tax_json())
            .send(&make_service(cart_taxes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_validation_failure_returns_field_errors() -> TestResult {
        let uuid = CartTaxUuid::new();
        let errors: FieldErrors =
            [("tax_rate", "Tax rate must be greater than 0")].into_iter().collect();

        let mut cart_taxes = MockCartTaxesService::new();

        cart_taxes
            .expect_update_cart_tax()
            .once()
            .return_once(move |_, _| Err(CartTaxesServiceError::Validation(errors)));

        let mut res = TestClient::put(format!("http://example.com/api/cart-tax/{uuid}"))
            .json(&json!({ "tax_rate": 0 }))
            .send(&make_service(cart_taxes))
            .await;

        let body: ValidationErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.errors.get("tax_rate").map(String::as_str),
            Some("Tax rate must be greater than 0")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_non_uuid_id_returns_400() -> TestResult {
        let mut cart_taxes = MockCartTaxesService::new();

        cart_taxes.expect_update_cart_tax().never();

        let mut res = TestClient::put("http://example.com/api/cart-tax/missing-id")
            .json(&sales_tax_json())
            .send(&make_service(cart_taxes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string()
                .await?
                .contains("ERROR: Cart tax entry not found with ID: missing-id")
        );

        Ok(())
    }
}
