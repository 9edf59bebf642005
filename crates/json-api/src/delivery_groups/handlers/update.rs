//! Update Cart Delivery Group Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use cartkit_app::domain::delivery_groups::{
    data::DeliveryGroupUpdate, records::DeliveryGroupUuid,
};

use crate::{
    delivery_groups::{
        errors::{UPDATE_NOT_FOUND, into_status_error},
        models::{DeliveryGroupResponse, DeliveryGroupUpdateRequest},
    },
    extensions::*,
};

/// Update Cart Delivery Group Handler
///
/// Copies the delivery address, date, grand total and shipping instructions
/// onto the stored group, leaving every other field as it was.
#[endpoint(
    tags("cart-delivery-group"),
    summary = "Update Cart Delivery Group",
    responses(
        (status_code = StatusCode::OK, description = "Delivery group updated", body = DeliveryGroupResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Delivery group not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<DeliveryGroupUpdateRequest>,
    depot: &mut Depot,
) -> Result<Json<DeliveryGroupResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let update = DeliveryGroupUpdate::try_from(json.into_inner())?;

    let Ok(uuid) = id.parse::<DeliveryGroupUuid>() else {
        return Err(StatusError::bad_request().brief(UPDATE_NOT_FOUND));
    };

    let record = state
        .app
        .delivery_groups
        .update_delivery_group(uuid, update)
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use cartkit_app::domain::delivery_groups::{
        DeliveryGroupsServiceError, MockDeliveryGroupsService, records::DeliveryGroupUuid,
    };

    use crate::test_helpers::delivery_groups_service;

    use super::{super::tests::make_record, *};

    fn make_service(delivery_groups: MockDeliveryGroupsService) -> Service {
        delivery_groups_service(
            delivery_groups,
            Router::with_path("cartsdeliverygroup/update/{id}").put(handler),
        )
    }

    fn update_json() -> Value {
        json!({
            "deliver_to_address": "2 High Street",
            "desired_delivery_date": "2026-04-01T09:00:00Z",
            "grand_total_amount": 75.5,
            "shipping_instructions": "Ring twice"
        })
    }

    #[tokio::test]
    async fn test_update_returns_200_with_merged_group() -> TestResult {
        let uuid = DeliveryGroupUuid::new();
        let mut record = make_record(uuid);

        record.document.deliver_to_address = "2 High Street".to_string();

        let mut delivery_groups = MockDeliveryGroupsService::new();

        delivery_groups
            .expect_update_delivery_group()
            .once()
            .withf(move |id, update| {
                *id == uuid
                    && update.deliver_to_address == "2 High Street"
                    && update.grand_total_amount == Decimal::new(755, 1)
                    && update.shipping_instructions == "Ring twice"
            })
            .return_once(move |_, _| Ok(record));

        let mut res =
            TestClient::put(format!("http://example.com/cartsdeliverygroup/update/{uuid}"))
                .json(&update_json())
                .send(&make_service(delivery_groups))
                .await;

        let body: DeliveryGroupResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.deliver_to_address, "2 High Street");
        assert_eq!(body.cart_id, "cart-1");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_absent_group_returns_400() -> TestResult {
        let uuid = DeliveryGroupUuid::new();

        let mut delivery_groups = MockDeliveryGroupsService::new();

        delivery_groups
            .expect_update_delivery_group()
            .once()
            .return_once(move |_, _| Err(DeliveryGroupsServiceError::NotFound(uuid)));

        let res = TestClient::put(format!("http://example.com/cartsdeliverygroup/update/{uuid}"))
            .json(&update_json())
            .send(&make_service(delivery_groups))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_non_uuid_id_returns_400() -> TestResult {
        let mut delivery_groups = MockDeliveryGroupsService::new();

        delivery_groups.expect_update_delivery_group().never();

        let mut res =
            TestClient::put("http://example.com/cartsdeliverygroup/update/missing-id")
                .json(&update_json())
                .send(&make_service(delivery_groups))
                .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(res.take_string().await?.contains(UPDATE_NOT_FOUND));

        Ok(())
    }
}
