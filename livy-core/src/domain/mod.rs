//! Core domain types
//!
//! These structures mirror the entities the remote service owns. The client never
//! holds an authoritative copy of any of them: every value is the result of a
//! fresh query and is identified only by its server-assigned id.

pub mod batch;
pub mod log;
pub mod session;
pub mod statement;
