//! Cart delivery group validation.

use rust_decimal::Decimal;

use crate::domain::delivery_groups::{data::NewDeliveryGroup, errors::DeliveryGroupsServiceError};

const AMOUNT_NEGATIVE: &str = "Amount should be greater than 0";

/// Rejects a group whose grand total or total amount is negative.
///
/// # Errors
///
/// Returns [`DeliveryGroupsServiceError::InvalidArgument`] when either amount
/// is below zero.
pub fn ensure_non_negative_amounts(
    group: &NewDeliveryGroup,
) -> Result<(), DeliveryGroupsServiceError> {
    let negative = group.grand_total_amount < Decimal::ZERO
        || group.total_amount.is_some_and(|amount| amount < Decimal::ZERO);

    if negative {
        return Err(DeliveryGroupsServiceError::InvalidArgument(
            AMOUNT_NEGATIVE.to_string(),
        ));
    }

    Ok(())
}
