//! gymdesk-audit
//!
//! Application-level audit events for record mutations, emitted through
//! `tracing` so they land in the same structured log stream as requests.

pub mod events;
