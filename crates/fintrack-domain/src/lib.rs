//! fintrack-domain
//!
//! Pure domain models (Transaction, Goal, category vocabularies).
//! No I/O, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod goal;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use goal::*;
pub use transaction::*;
