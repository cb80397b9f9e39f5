//! Idempotent table presence bootstrap.
//!
//! Ensures every table the application needs exists before the server
//! accepts traffic. Each table is checked against the store catalog and
//! created only when absent; existing tables are never dropped or altered.
//!
//! ## Core Types
//!
//! - [`TableSpec`] — Table name paired with its creation statement
//! - [`Store`] — Catalog lookup and statement execution (injected)
//! - [`Bootstrapper`] — Runs the check-then-create routine per table
//! - [`BootstrapResult`] — Outcome of one table's routine
//! - [`Report`] — All results of one run
//! - [`Policy`] — Continue past failures, or abort at the first one
mod bootstrapper;
mod error;
mod outcome;
mod policy;
mod report;
mod store;
mod table;

#[cfg(test)]
mod memory;

pub use bootstrapper::*;
pub use error::*;
pub use outcome::*;
pub use policy::*;
pub use report::*;
pub use store::*;
pub use table::*;
