//! gymdesk-core
//!
//! Pure domain types, fixtures, query filters, statistics and S3 key
//! conventions. No AWS SDK dependency; this is the shared vocabulary of the
//! gymdesk system.

pub mod dataset;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod models;
pub mod s3_keys;
pub mod stats;
pub mod validate;
