use courier_pg::PgErr;
use std::sync::Arc;
use tokio_postgres::Client;

/// Failure reported by a [`Store`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or refused the session.
    #[error("store unreachable: {0}")]
    Connectivity(String),
    /// The store was reached but rejected the query or statement.
    #[error("{0}")]
    Rejected(String),
}

/// Store defines the two operations table bootstrap needs.
/// Implemented for the live PostgreSQL client and for in-memory fakes.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Whether `table` is present in the connected schema.
    async fn exists(&self, table: &str) -> Result<bool, StoreError>;
    /// Executes a creation statement (possibly several `;`-separated statements).
    async fn execute(&self, sql: &str) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl Store for Client {
    async fn exists(&self, table: &str) -> Result<bool, StoreError> {
        // pg_class lists every relation, including ones this role holds no grants on
        let sql = "SELECT 1 FROM pg_catalog.pg_class     c
                   JOIN   pg_catalog.pg_namespace n ON n.oid = c.relnamespace
                   WHERE  n.nspname = current_schema()
                   AND    c.relname = $1
                   AND    c.relkind IN ('r', 'p')";
        self.query_opt(sql, &[&table])
            .await
            .map(|row| row.is_some())
            .map_err(StoreError::from)
    }
    async fn execute(&self, sql: &str) -> Result<(), StoreError> {
        // multi-statement simple queries run as one implicit transaction
        self.batch_execute(sql).await.map_err(StoreError::from)
    }
}

#[async_trait::async_trait]
impl<S> Store for Arc<S>
where
    S: Store + ?Sized,
{
    async fn exists(&self, table: &str) -> Result<bool, StoreError> {
        self.as_ref().exists(table).await
    }
    async fn execute(&self, sql: &str) -> Result<(), StoreError> {
        self.as_ref().execute(sql).await
    }
}

impl From<PgErr> for StoreError {
    fn from(e: PgErr) -> Self {
        let message = describe(&e);
        match e.as_db_error() {
            Some(db) if disconnected(db.code().code()) => Self::Connectivity(message),
            Some(_) => Self::Rejected(message),
            None if e.is_closed() || io(&e) => Self::Connectivity(message),
            None => Self::Rejected(message),
        }
    }
}

/// Server errors as `SEVERITY: message (SQLSTATE)`, anything else with its cause.
/// The driver's own `Display` stops at "db error".
fn describe(e: &PgErr) -> String {
    match e.as_db_error() {
        Some(db) => match db.detail() {
            Some(detail) => format!(
                "{}: {} ({}): {}",
                db.severity(),
                db.message(),
                db.code().code(),
                detail
            ),
            None => format!("{}: {} ({})", db.severity(), db.message(), db.code().code()),
        },
        None => match std::error::Error::source(e) {
            Some(source) => format!("{}: {}", e, source),
            None => e.to_string(),
        },
    }
}

fn io(e: &PgErr) -> bool {
    std::error::Error::source(e)
        .map(|source| source.is::<std::io::Error>())
        .unwrap_or(false)
}

/// SQLSTATEs meaning the session itself is gone or was never authorized:
/// class 08 (connection exception), class 28 (invalid authorization) and
/// the 57P0x shutdown family.
fn disconnected(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("28") || matches!(code, "57P01" | "57P02" | "57P03")
}
