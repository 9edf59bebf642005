//! Cart Tax Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use smallvec::smallvec;

    use cartkit_app::domain::cart_taxes::{
        data::NewCartTax,
        records::{CartTaxDocument, CartTaxRecord, CartTaxUuid},
    };

    pub(super) fn sales_tax_json() -> Value {
        json!({
            "cart_id": "cart123",
            "cart_item_id": "item123",
            "name": "Sales Tax",
            "description": "Sales tax applied",
            "tax_rate": 7.5,
            "tax_type": ["STATE_TAX"],
            "created_by": "adminUser"
        })
    }

    pub(super) fn sales_tax() -> NewCartTax {
        NewCartTax {
            cart_id: "cart123".to_string(),
            cart_item_id: "item123".to_string(),
            name: "Sales Tax".to_string(),
            description: "Sales tax applied".to_string(),
            tax_rate: Decimal::new(75, 1),
            tax_type: vec!["STATE_TAX".to_string()],
            created_date: None,
            created_by: "adminUser".to_string(),
            tax_calculation_date: None,
        }
    }

    pub(super) fn make_record(uuid: CartTaxUuid) -> CartTaxRecord {
        CartTaxRecord {
            uuid,
            document: CartTaxDocument {
                cart_id: "cart123".to_string(),
                cart_item_id: "item123".to_string(),
                name: "Sales Tax".to_string(),
                description: "Sales tax applied".to_string(),
                tax_rate: Decimal::new(75, 1),
                tax_type: smallvec!["STATE_TAX".to_string()],
                created_date: Timestamp::UNIX_EPOCH,
                created_by: "adminUser".to_string(),
                tax_calculation_date: None,
            },
        }
    }
}
