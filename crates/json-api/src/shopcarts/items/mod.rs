//! Cart Item Endpoints

pub(crate) mod handlers;
