//! Cart Delivery Group Models

use std::collections::BTreeMap;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use cartkit_app::domain::{
    delivery_groups::{
        data::{DeliveryGroupUpdate, NewDeliveryGroup},
        records::DeliveryGroupRecord,
    },
    validation::FieldErrors,
};

use crate::extensions::*;

const DELIVERY_DATE_REQUIRED: &str = "Delivery Date is required";
const DELIVERY_DATE_MALFORMED: &str = "Delivery Date must be an RFC 3339 timestamp";
const GRAND_TOTAL_REQUIRED: &str = "Grand Total Amount is required";
const PHONE_NUMBER_REQUIRED: &str = "Phone number of recipient is required";

/// Cart Delivery Group Request
///
/// Absent strings deserialize as empty and absent dates, amounts and phone
/// numbers as `None`, so that all of them are reported as field errors.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct DeliveryGroupRequest {
    pub cart_id: String,

    pub deliver_to_first_name: String,

    pub deliver_to_last_name: String,

    /// Recipient's full name
    pub deliver_to_name: String,

    pub deliver_to_address: String,

    /// RFC 3339 timestamp
    pub desired_delivery_date: Option<String>,

    /// Must not be negative
    #[salvo(schema(value_type = Option<f64>))]
    pub grand_total_amount: Option<Decimal>,

    /// Must not be negative when present
    #[salvo(schema(value_type = Option<f64>))]
    pub total_amount: Option<Decimal>,

    pub customer_name: String,

    pub delivery_method_id: String,

    pub is_default: bool,

    pub ship_to_phone_number: Option<String>,

    pub shipping_instructions: String,
}

impl TryFrom<DeliveryGroupRequest> for NewDeliveryGroup {
    type Error = FieldErrors;

    fn try_from(request: DeliveryGroupRequest) -> Result<Self, Self::Error> {
        let mut missing = BTreeMap::new();

        let desired_delivery_date = match request.desired_delivery_date {
            None => {
                missing.insert("desired_delivery_date", DELIVERY_DATE_REQUIRED);
                None
            }
            Some(value) => {
                let parsed = value.parse::<Timestamp>().ok();

                if parsed.is_none() {
                    missing.insert("desired_delivery_date", DELIVERY_DATE_MALFORMED);
                }

                parsed
            }
        };

        if request.grand_total_amount.is_none() {
            missing.insert("grand_total_amount", GRAND_TOTAL_REQUIRED);
        }

        if request.ship_to_phone_number.is_none() {
            missing.insert("ship_to_phone_number", PHONE_NUMBER_REQUIRED);
        }

        let group = NewDeliveryGroup {
            cart_id: request.cart_id,
            deliver_to_first_name: request.deliver_to_first_name,
            deliver_to_last_name: request.deliver_to_last_name,
            deliver_to_name: request.deliver_to_name,
            deliver_to_address: request.deliver_to_address,
            desired_delivery_date: desired_delivery_date.unwrap_or(Timestamp::UNIX_EPOCH),
            grand_total_amount: request.grand_total_amount.unwrap_or_default(),
            total_amount: request.total_amount,
            customer_name: request.customer_name,
            delivery_method_id: request.delivery_method_id,
            is_default: request.is_default,
            ship_to_phone_number: request.ship_to_phone_number.unwrap_or_default(),
            shipping_instructions: request.shipping_instructions,
        };

        let mut errors = group
            .validate()
            .err()
            .map(|errors| FieldErrors::from(errors).into_inner())
            .unwrap_or_default();

        errors.extend(
            missing
                .into_iter()
                .map(|(field, message)| (field.to_string(), message.to_string())),
        );

        if errors.is_empty() {
            Ok(group)
        } else {
            Err(errors.into_iter().collect())
        }
    }
}

/// Cart Delivery Group Update Request
///
/// Only these four fields are copied onto the stored group; anything else in
/// the body is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeliveryGroupUpdateRequest {
    pub deliver_to_address: String,

    /// RFC 3339 timestamp
    pub desired_delivery_date: String,

    #[salvo(schema(value_type = f64))]
    pub grand_total_amount: Decimal,

    pub shipping_instructions: String,
}

impl TryFrom<DeliveryGroupUpdateRequest> for DeliveryGroupUpdate {
    type Error = StatusError;

    fn try_from(request: DeliveryGroupUpdateRequest) -> Result<Self, Self::Error> {
        Ok(DeliveryGroupUpdate {
            deliver_to_address: request.deliver_to_address,
            desired_delivery_date: request
                .desired_delivery_date
                .into_timestamp("desired_delivery_date")?,
            grand_total_amount: request.grand_total_amount,
            shipping_instructions: request.shipping_instructions,
        })
    }
}

/// Cart Delivery Group Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeliveryGroupResponse {
    /// Store-assigned identifier
    pub id: Uuid,

    pub cart_id: String,

    /// When the group was inserted
    pub created_on: String,

    pub deliver_to_first_name: String,

    pub deliver_to_last_name: String,

    pub deliver_to_name: String,

    pub deliver_to_address: String,

    pub desired_delivery_date: String,

    #[salvo(schema(value_type = f64))]
    pub grand_total_amount: Decimal,

    #[salvo(schema(value_type = Option<f64>))]
    pub total_amount: Option<Decimal>,

    pub customer_name: String,

    pub delivery_method_id: String,

    pub is_default: bool,

    pub ship_to_phone_number: String,

    pub shipping_instructions: String,
}

impl From<DeliveryGroupRecord> for DeliveryGroupResponse {
    fn from(record: DeliveryGroupRecord) -> Self {
        let document = record.document;

        Self {
            id: record.uuid.into_uuid(),
            cart_id: document.cart_id,
            created_on: document.created_on.to_string(),
            deliver_to_first_name: document.deliver_to_first_name,
            deliver_to_last_name: document.deliver_to_last_name,
            deliver_to_name: document.deliver_to_name,
            deliver_to_address: document.deliver_to_address,
            desired_delivery_date: document.desired_delivery_date.to_string(),
            grand_total_amount: document.grand_total_amount,
            total_amount: document.total_amount,
            customer_name: document.customer_name,
            delivery_method_id: document.delivery_method_id,
            is_default: document.is_default,
            ship_to_phone_number: document.ship_to_phone_number,
            shipping_instructions: document.shipping_instructions,
        }
    }
}
