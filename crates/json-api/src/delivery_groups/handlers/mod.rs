//! Cart Delivery Group Handlers

pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod insert;
pub(crate) mod search;
pub(crate) mod update;
