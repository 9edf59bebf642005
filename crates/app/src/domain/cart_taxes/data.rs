//! Cart Tax Data

use jiff::Timestamp;
use rust_decimal::Decimal;
use validator::Validate;

use crate::domain::cart_taxes::records::CartTaxDocument;

/// Candidate cart tax entry, as supplied to add or update.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewCartTax {
    #[validate(custom(
        function = "crate::domain::validation::not_blank",
        message = "Cart ID cannot be empty"
    ))]
    pub cart_id: String,
    #[validate(custom(
        function = "crate::domain::validation::not_blank",
        message = "Cart Item ID cannot be empty"
    ))]
    pub cart_item_id: String,
    #[validate(
        custom(
            function = "crate::domain::validation::not_blank",
            message = "Name cannot be empty"
        ),
        length(
            min = 3,
            max = 100,
            message = "Name must be between 3 and 100 characters"
        )
    )]
    pub name: String,
    #[validate(
        custom(
            function = "crate::domain::validation::not_empty",
            message = "Description must contain at least one value"
        ),
        length(max = 250, message = "Description cannot exceed 250 characters")
    )]
    pub description: String,
    #[validate(custom(
        function = "crate::domain::validation::positive",
        message = "Tax rate must be greater than 0"
    ))]
    pub tax_rate: Decimal,
    #[validate(length(min = 1, message = "Tax type must contain at least one value"))]
    pub tax_type: Vec<String>,
    #[validate(custom(
        function = "crate::domain::validation::past_or_present",
        message = "Created date must be in the past or present"
    ))]
    pub created_date: Option<Timestamp>,
    #[validate(custom(
        function = "crate::domain::validation::not_blank",
        message = "Created By cannot be empty"
    ))]
    pub created_by: String,
    #[validate(custom(
        function = "crate::domain::validation::past_or_present",
        message = "Tax calculation date must be in the past or present"
    ))]
    pub tax_calculation_date: Option<Timestamp>,
}

impl NewCartTax {
    /// Build the persisted document, stamping the given creation date.
    pub(crate) fn into_document(self, created_date: Timestamp) -> CartTaxDocument {
        CartTaxDocument {
            cart_id: self.cart_id,
            cart_item_id: self.cart_item_id,
            name: self.name,
            description: self.description,
            tax_rate: self.tax_rate,
            tax_type: self.tax_type.into(),
            created_date,
            created_by: self.created_by,
            tax_calculation_date: self.tax_calculation_date,
        }
    }
}
