//! Cart Tax Models

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cartkit_app::domain::cart_taxes::{data::NewCartTax, records::CartTaxRecord};

use crate::extensions::*;

/// Cart Tax Request
///
/// Missing fields fall back to empty values so that they are reported as
/// field validation errors rather than rejected as malformed JSON.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct CartTaxRequest {
    /// Cart the tax applies to
    pub cart_id: String,

    /// Cart item the tax applies to
    pub cart_item_id: String,

    /// Tax name, 3 to 100 characters
    pub name: String,

    /// Up to 250 characters
    pub description: String,

    /// Tax rate, strictly positive
    #[salvo(schema(value_type = f64))]
    pub tax_rate: Decimal,

    /// Tax type labels, at least one
    pub tax_type: Vec<String>,

    /// RFC 3339 timestamp, not in the future
    pub created_date: Option<String>,

    pub created_by: String,

    /// RFC 3339 timestamp, not in the future
    pub tax_calculation_date: Option<String>,
}

impl TryFrom<CartTaxRequest> for NewCartTax {
    type Error = StatusError;

    fn try_from(request: CartTaxRequest) -> Result<Self, Self::Error> {
        Ok(NewCartTax {
            cart_id: request.cart_id,
            cart_item_id: request.cart_item_id,
            name: request.name,
            description: request.description,
            tax_rate: request.tax_rate,
            tax_type: request.tax_type,
            created_date: request.created_date.into_timestamp("created_date")?,
            created_by: request.created_by,
            tax_calculation_date: request
                .tax_calculation_date
                .into_timestamp("tax_calculation_date")?,
        })
    }
}

/// Cart Tax Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartTaxResponse {
    /// Store-assigned identifier
    pub id: Uuid,

    pub cart_id: String,

    pub cart_item_id: String,

    pub name: String,

    pub description: String,

    #[salvo(schema(value_type = f64))]
    pub tax_rate: Decimal,

    pub tax_type: Vec<String>,

    /// When the entry was first stored
    pub created_date: String,

    pub created_by: String,

    pub tax_calculation_date: Option<String>,
}

impl From<CartTaxRecord> for CartTaxResponse {
    fn from(record: CartTaxRecord) -> Self {
        let document = record.document;

        Self {
            id: record.uuid.into_uuid(),
            cart_id: document.cart_id,
            cart_item_id: document.cart_item_id,
            name: document.name,
            description: document.description,
            tax_rate: document.tax_rate,
            tax_type: document.tax_type.into_vec(),
            created_date: document.created_date.to_string(),
            created_by: document.created_by,
            tax_calculation_date: document
                .tax_calculation_date
                .as_ref()
                .map(ToString::to_string),
        }
    }
}
