//! Network boundary: wire types and REST calls to the auth endpoints.

pub mod api;
pub mod types;
