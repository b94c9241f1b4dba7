//! Shared client-side state.
//!
//! DESIGN
//! ======
//! One module per domain; for this app the only domain is the session.
//! The store is provided once via context and mutated only through its
//! own transitions, keeping the single-writer discipline visible.

pub mod session;
