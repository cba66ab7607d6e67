//! `paperdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod date;
pub mod error;

pub use date::parse_iso_date;
pub use error::{DomainError, DomainResult};
