//! showroom-core
//!
//! Ledger projection, receivable/payable aggregation and the services that
//! feed them from a data source.
//! Depends on showroom-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod aggregator;
pub mod error;
pub mod ordering;
pub mod projector;
pub mod source;
pub mod statement_service;
pub mod summary_service;
pub mod validation;

pub use aggregator::*;
pub use error::CoreError;
pub use ordering::*;
pub use projector::*;
pub use source::*;
pub use statement_service::*;
pub use summary_service::*;
pub use validation::*;
