//! Cart Delivery Group Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Cart Delivery Group UUID
pub type DeliveryGroupUuid = TypedUuid<DeliveryGroupRecord>;

/// Delivery group fields as held in the `cart_delivery_groups` collection.
/// Amounts are stored as strings so no digits are lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryGroupDocument {
    pub cart_id: String,
    pub created_on: Timestamp,
    pub deliver_to_first_name: String,
    pub deliver_to_last_name: String,
    pub deliver_to_name: String,
    pub deliver_to_address: String,
    pub desired_delivery_date: Timestamp,
    #[serde(with = "rust_decimal::serde::str")]
    pub grand_total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub total_amount: Option<Decimal>,
    pub customer_name: String,
    pub delivery_method_id: String,
    pub is_default: bool,
    pub ship_to_phone_number: String,
    pub shipping_instructions: String,
}

/// Cart Delivery Group Record
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryGroupRecord {
    pub uuid: DeliveryGroupUuid,
    pub document: DeliveryGroupDocument,
}
