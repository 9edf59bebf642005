//! Cart Domain Concerns

pub mod cart_taxes;
pub mod delivery_groups;
pub mod store;
pub mod validation;
