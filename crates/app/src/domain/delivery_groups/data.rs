//! Cart Delivery Group Data

use jiff::Timestamp;
use rust_decimal::Decimal;
use validator::Validate;

use crate::domain::delivery_groups::records::DeliveryGroupDocument;

/// Delivery group as supplied to insert.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewDeliveryGroup {
    #[validate(length(min = 1, message = "Cart Id is required"))]
    pub cart_id: String,
    #[validate(length(min = 1, message = "First name of the recipient is required"))]
    pub deliver_to_first_name: String,
    #[validate(length(min = 1, message = "Last Name of the recipient is required"))]
    pub deliver_to_last_name: String,
    #[validate(length(min = 1, message = "Full name of the recipient is required"))]
    pub deliver_to_name: String,
    #[validate(length(min = 1, message = "Address for delivery is required"))]
    pub deliver_to_address: String,
    pub desired_delivery_date: Timestamp,
    pub grand_total_amount: Decimal,
    pub total_amount: Option<Decimal>,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "Delivery method is required"))]
    pub delivery_method_id: String,
    pub is_default: bool,
    pub ship_to_phone_number: String,
    #[validate(length(min = 1, message = "Shipping instructions are required"))]
    pub shipping_instructions: String,
}

impl NewDeliveryGroup {
    pub(crate) fn into_document(self, created_on: Timestamp) -> DeliveryGroupDocument {
        DeliveryGroupDocument {
            cart_id: self.cart_id,
            created_on,
            deliver_to_first_name: self.deliver_to_first_name,
            deliver_to_last_name: self.deliver_to_last_name,
            deliver_to_name: self.deliver_to_name,
            deliver_to_address: self.deliver_to_address,
            desired_delivery_date: self.desired_delivery_date,
            grand_total_amount: self.grand_total_amount,
            total_amount: self.total_amount,
            customer_name: self.customer_name,
            delivery_method_id: self.delivery_method_id,
            is_default: self.is_default,
            ship_to_phone_number: self.ship_to_phone_number,
            shipping_instructions: self.shipping_instructions,
        }
    }
}

/// The fields an update may change. Everything else on a stored group is
/// kept as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryGroupUpdate {
    pub deliver_to_address: String,
    pub desired_delivery_date: Timestamp,
    pub grand_total_amount: Decimal,
    pub shipping_instructions: String,
}

impl DeliveryGroupUpdate {
    pub(crate) fn apply_to(self, document: &mut DeliveryGroupDocument) {
        document.deliver_to_address = self.deliver_to_address;
        document.desired_delivery_date = self.desired_delivery_date;
        document.grand_total_amount = self.grand_total_amount;
        document.shipping_instructions = self.shipping_instructions;
    }
}

/// Search predicate over stored delivery groups. All comparisons are exact
/// except the customer name, which ignores case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryGroupFilter {
    CartId(String),
    CustomerName(String),
    DeliveryMethodId(String),
    ShipToPhoneNumber(String),
}
