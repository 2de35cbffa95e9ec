//! Theater invoicing: per-performance pricing, volume credits and statements.
//!
//! This crate contains the billing rules implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage). Callers load the invoice and the
//! play catalog however they like and hand them in by reference.

pub mod invoice;
pub mod play;
pub mod pricing;
pub mod statement;

pub use invoice::{Invoice, Performance};
pub use play::{Catalog, Play, PlayCategory};
pub use pricing::PricingRules;
pub use statement::{generate, Statement, StatementGenerator, StatementLine, LINE_ENDING};
