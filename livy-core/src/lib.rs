//! Livy Core
//!
//! Wire types for the Livy REST job-execution service.
//!
//! This crate contains:
//! - Domain types: Entities owned by the service (Session, Statement, Batch, logs)
//! - DTOs: Request and response envelopes exchanged with the service

pub mod domain;
pub mod dto;
