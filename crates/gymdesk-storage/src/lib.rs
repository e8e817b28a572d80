//! gymdesk-storage
//!
//! Object storage for gymdesk records. S3 in production, an in-memory map for
//! tests and local runs, and a typed JSON record layer on top of either.

pub mod client;
pub mod error;
pub mod objects;
pub mod records;
pub mod seed;
pub mod store;
