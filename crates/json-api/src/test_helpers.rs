//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use cartkit_app::{
    context::AppContext,
    domain::{cart_taxes::MockCartTaxesService, delivery_groups::MockDeliveryGroupsService},
};

use crate::state::State;

fn strict_cart_taxes_mock() -> MockCartTaxesService {
    let mut cart_taxes = MockCartTaxesService::new();

    cart_taxes.expect_add_cart_tax().never();
    cart_taxes.expect_get_cart_tax().never();
    cart_taxes.expect_update_cart_tax().never();
    cart_taxes.expect_delete_cart_tax().never();

    cart_taxes
}

fn strict_delivery_groups_mock() -> MockDeliveryGroupsService {
    let mut delivery_groups = MockDeliveryGroupsService::new();

    delivery_groups.expect_insert_delivery_group().never();
    delivery_groups.expect_get_delivery_group().never();
    delivery_groups.expect_update_delivery_group().never();
    delivery_groups.expect_delete_delivery_group().never();
    delivery_groups.expect_search_by_cart_id().never();
    delivery_groups.expect_search_by_customer_name().never();
    delivery_groups.expect_search_by_delivery_method_id().never();
    delivery_groups.expect_search_by_ship_to_phone_number().never();

    delivery_groups
}

pub(crate) fn state_with(
    cart_taxes: MockCartTaxesService,
    delivery_groups: MockDeliveryGroupsService,
) -> Arc<State> {
    State::from_app_context(AppContext::new(
        Arc::new(cart_taxes),
        Arc::new(delivery_groups),
    ))
}

pub(crate) fn cart_taxes_service(cart_taxes: MockCartTaxesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(cart_taxes, strict_delivery_groups_mock())))
            .push(route),
    )
}

pub(crate) fn delivery_groups_service(
    delivery_groups: MockDeliveryGroupsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_cart_taxes_mock(), delivery_groups)))
            .push(route),
    )
}
