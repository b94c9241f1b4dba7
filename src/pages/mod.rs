//! Page components, one per routed view.

pub mod account;
pub mod auth;
