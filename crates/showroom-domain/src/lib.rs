//! showroom-domain
//!
//! Pure domain models (Account, Movement, Receipt, Dataset, balances and summaries).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod account;
pub mod balance;
pub mod common;
pub mod dataset;
pub mod movement;
pub mod summary;

pub use account::*;
pub use balance::*;
pub use common::*;
pub use dataset::*;
pub use movement::*;
pub use summary::*;
