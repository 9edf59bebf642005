//! Cart Delivery Groups

mod errors;
mod handlers;
mod models;

pub(crate) use handlers::*;
