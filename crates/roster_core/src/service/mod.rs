//! Roster use-case services.
//!
//! # Responsibility
//! - Own one roster session: record store plus persistence adapter.
//! - Keep callers decoupled from storage and snapshot bookkeeping.
//!
//! # See also
//! - `crate::store` for the mutation rules themselves.

pub mod roster_service;
