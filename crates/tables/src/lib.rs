//! Schema definitions for every courier table.
//!
//! One unit type per table, each describing its DDL through [`Schema`].
//! No table references another, so tables can be bootstrapped in any
//! order and concurrently.
//!
//! - [`catalog()`] — Every table's [`TableSpec`], in a stable order
//! - [`lookup()`] — One table's [`TableSpec`] by name
mod accounts;
mod delivery;
mod fleet;

pub use accounts::*;
pub use delivery::*;
pub use fleet::*;

use courier_bootstrap::TableSpec;

/// Every table the application needs.
pub fn catalog() -> Vec<TableSpec> {
    vec![
        TableSpec::of::<AdminDetails>(),
        TableSpec::of::<DriverDetails>(),
        TableSpec::of::<Customers>(),
        TableSpec::of::<Vehicles>(),
        TableSpec::of::<Tours>(),
        TableSpec::of::<Deliveries>(),
        TableSpec::of::<RouteSegments>(),
        TableSpec::of::<Notifications>(),
    ]
}

/// The [`TableSpec`] for `name`, if it is one of ours.
pub fn lookup(name: &str) -> Option<TableSpec> {
    catalog().into_iter().find(|spec| spec.name() == name)
}
