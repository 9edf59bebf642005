//! App Router

use salvo::Router;

use crate::{cart_taxes, delivery_groups};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("api/cart-tax")
                .post(cart_taxes::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(cart_taxes::get::handler)
                        .put(cart_taxes::update::handler)
                        .delete(cart_taxes::delete::handler),
                ),
        )
        .push(
            Router::with_path("cartsdeliverygroup")
                .push(Router::with_path("insert").post(delivery_groups::insert::handler))
                .push(Router::with_path("get/{id}").get(delivery_groups::get::handler))
                .push(Router::with_path("update/{id}").put(delivery_groups::update::handler))
                .push(Router::with_path("delete/{id}").delete(delivery_groups::delete::handler))
                .push(
                    Router::with_path("searchBycartId/{cart_id}")
                        .get(delivery_groups::search::by_cart_id),
                )
                .push(
                    Router::with_path("searchBycustomerName/{customer_name}")
                        .get(delivery_groups::search::by_customer_name),
                )
                .push(
                    Router::with_path("searchBydeliveryMethodId/{delivery_method_id}")
                        .get(delivery_groups::search::by_delivery_method_id),
                )
                .push(
                    Router::with_path("searchByshipToPhone/{ship_to_phone_number}")
                        .get(delivery_groups::search::by_ship_to_phone_number),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use cartkit_app::domain::{
        cart_taxes::MockCartTaxesService, delivery_groups::MockDeliveryGroupsService,
    };

    use crate::test_helpers::state_with;

    use super::*;

    fn make_service() -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with(
                    MockCartTaxesService::new(),
                    MockDeliveryGroupsService::new(),
                )))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_non_uuid_ids_are_treated_as_absent() -> TestResult {
        let cases = [
            (
                TestClient::delete("http://example.com/api/cart-tax/missing-id"),
                "Error: Cart tax entry not found with ID: missing-id",
            ),
            (
                TestClient::get("http://example.com/cartsdeliverygroup/get/missing-id"),
                "Cart delivery group not found",
            ),
            (
                TestClient::delete("http://example.com/cartsdeliverygroup/delete/missing-id"),
                "Error occurred while deleting cart delivery group",
            ),
        ];

        for (request, brief) in cases {
            let mut res = request.send(&make_service()).await;

            assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
            assert!(res.take_string().await?.contains(brief));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_reports_missing_fields_before_calling_service() -> TestResult {
        let mut res = TestClient::post("http://example.com/cartsdeliverygroup/insert")
            .json(&json!({}))
            .send(&make_service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body["errors"]["grand_total_amount"],
            json!("Grand Total Amount is required")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() -> TestResult {
        let res = TestClient::get("http://example.com/cartsdeliverygroup/unknown")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
