//! `paperdesk-quotes` — quote history and keyword search.
//!
//! Past quotes are reference material for pricing new requests: the search
//! surface exists so a salesperson can pull up how similar jobs were quoted
//! before committing to a number.

pub mod history;
pub mod record;

pub use history::QuoteHistory;
pub use record::{NewQuote, QuoteRecord};
