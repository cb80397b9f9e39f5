//! PostgreSQL connectivity and table metadata.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a URL
//! - [`connect()`] — Same, without the log line, for tests and tools
//!
//! ## Metadata
//!
//! - [`Schema`] — Table name and DDL for one table
//!
//! ## Table Names
//!
//! Constants for every persistent entity of the delivery tracker: admins,
//! drivers, vehicles, customers, tours, deliveries, route segments and
//! notifications.
mod schema;

pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
/// The connection driver is spawned onto the current tokio runtime.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    connect(url).await
}

/// Connects without TLS and quiets server NOTICE chatter.
pub async fn connect(url: &str) -> Result<Arc<Client>, PgErr> {
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for administrator accounts.
#[rustfmt::skip]
pub const ADMIN_DETAILS:  &str = "admin_details";
/// Table for customers receiving deliveries.
#[rustfmt::skip]
pub const CUSTOMERS:      &str = "customers";
/// Table for individual deliveries and their status.
#[rustfmt::skip]
pub const DELIVERIES:     &str = "deliveries";
/// Table for driver profiles and contact details.
#[rustfmt::skip]
pub const DRIVER_DETAILS: &str = "driver_details";
/// Table for SMS and push notifications sent to customers.
#[rustfmt::skip]
pub const NOTIFICATIONS:  &str = "notifications";
/// Table for estimated legs between consecutive stops of a tour.
#[rustfmt::skip]
pub const ROUTE_SEGMENTS: &str = "route_segments";
/// Table for tours assigned to drivers.
#[rustfmt::skip]
pub const TOURS:          &str = "tours";
/// Table for the vehicle fleet.
#[rustfmt::skip]
pub const VEHICLES:       &str = "vehicles";
