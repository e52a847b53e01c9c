//! fintrack-core
//!
//! Derivation engine and services for fintrack: aggregation over transaction
//! snapshots, goal progress, validated record creation, and formatting.
//! Depends on fintrack-domain. No terminal I/O, no direct storage access.

pub mod currency;
pub mod error;
pub mod goal_service;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod transaction_service;

pub use error::CoreError;
pub use goal_service::*;
pub use storage::*;
pub use summary_service::*;
pub use time::*;
pub use transaction_service::*;
