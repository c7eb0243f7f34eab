//! Public tee-time listing endpoint.

pub mod handlers;
pub mod models;
pub mod routes;
