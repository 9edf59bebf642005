//! Delete Cart Tax Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use cartkit_app::domain::cart_taxes::records::CartTaxUuid;

use crate::{
    cart_taxes::errors::{absent_on_delete, into_delete_status_error},
    extensions::*,
};

/// Delete Cart Tax Handler
#[endpoint(
    tags("cart-tax"),
    summary = "Delete Cart Tax Entry",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart tax entry deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart tax entry not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = id.into_inner();

    let Ok(uuid) = id.parse::<CartTaxUuid>() else {
        return Err(absent_on_delete(&id));
    };

    state
        .app
        .cart_taxes
        .delete_cart_tax(uuid)
        .await
        .map_err(|error| into_delete_status_error(&error))?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cartkit_app::domain::cart_taxes::{CartTaxesServiceError, MockCartTaxesService};

    use crate::test_helpers::cart_taxes_service;

    use super::*;

    fn make_service(cart_taxes: MockCartTaxesService) -> Service {
        cart_taxes_service(
            cart_taxes,
            Router::with_path("api/cart-tax/{id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_returns_204() -> TestResult {
        let uuid = CartTaxUuid::new();

        let mut cart_taxes = MockCartTaxesService::new();

        cart_taxes
            .expect_delete_cart_tax()
            .once()
            .withf(move |id| *id == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/api/cart-tax/{uuid}"))
            .send(&make_service(cart_taxes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_entry_returns_404() -> TestResult {
        let uuid = CartTaxUuid::new();

        let mut cart_taxes = MockCartTaxesService::new();

        cart_taxes
            .expect_delete_cart_tax()
            .once()
            .return_once(move |_| Err(CartTaxesServiceError::NotFound(uuid)));

        let res = TestClient::delete(format!("http://example.com/api/cart-tax/{uuid}"))
            .send(&make_service(cart_taxes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_non_uuid_id_returns_404() -> TestResult {
        let mut cart_taxes = MockCartTaxesService::new();

        cart_taxes.expect_delete_cart_tax().never();

        let mut res = TestClient::delete("http://example.com/api/cart-tax/missing-id")
            .send(&make_service(cart_taxes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(
            res.take_string()
                .await?
                .contains("Error: Cart tax entry not found with ID: missing-id")
        );

        Ok(())
    }
}
