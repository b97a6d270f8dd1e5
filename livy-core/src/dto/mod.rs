//! Data Transfer Objects
//!
//! Request bodies sent to the service and the envelopes it wraps responses in.

pub mod job;
pub mod query;
pub mod statement;
