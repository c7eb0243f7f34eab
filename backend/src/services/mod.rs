//! Central module for business logic services.
//!
//! Services sit between the HTTP handlers and the repositories and own all
//! domain rules.

pub mod user_service;
