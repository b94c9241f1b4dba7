//! Small utilities shared across modules.

pub mod storage;
