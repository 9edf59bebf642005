//! Cart Tax Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::uuids::TypedUuid;

/// Cart Tax UUID
pub type CartTaxUuid = TypedUuid<CartTaxRecord>;

/// Cart tax fields as held in the `cart_taxes` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTaxDocument {
    pub cart_id: String,
    pub cart_item_id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
    pub tax_type: SmallVec<[String; 2]>,
    pub created_date: Timestamp,
    pub created_by: String,
    pub tax_calculation_date: Option<Timestamp>,
}

/// Cart Tax Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartTaxRecord {
    pub uuid: CartTaxUuid,
    pub document: CartTaxDocument,
}
