//! Cart Delivery Groups

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;
mod validation;

pub use errors::DeliveryGroupsServiceError;
pub use service::*;
pub use validation::ensure_non_negative_amounts;
