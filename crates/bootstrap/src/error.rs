use super::*;

/// Step of a table's routine in which an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Catalog lookup for the table's presence.
    Check,
    /// Execution of the creation statement.
    Create,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "check"),
            Self::Create => write!(f, "create"),
        }
    }
}

/// Why a table's routine failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    /// The store could not be reached or authenticated against.
    #[error("store unreachable during {phase}: {message}")]
    Connectivity { phase: Phase, message: String },
    /// The existence check failed for a reason other than connectivity.
    #[error("catalog query failed: {0}")]
    CatalogQuery(String),
    /// The creation statement was rejected (syntax, privilege, conflicting object).
    #[error("creation statement failed: {0}")]
    CreationStatement(String),
}

impl BootstrapError {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Connectivity { phase, .. } => *phase,
            Self::CatalogQuery(_) => Phase::Check,
            Self::CreationStatement(_) => Phase::Create,
        }
    }
    pub(crate) fn checking(e: StoreError) -> Self {
        match e {
            StoreError::Connectivity(message) => Self::Connectivity {
                phase: Phase::Check,
                message,
            },
            StoreError::Rejected(message) => Self::CatalogQuery(message),
        }
    }
    pub(crate) fn creating(e: StoreError) -> Self {
        match e {
            StoreError::Connectivity(message) => Self::Connectivity {
                phase: Phase::Create,
                message,
            },
            StoreError::Rejected(message) => Self::CreationStatement(message),
        }
    }
}

/// A run under [`Policy::Abort`] stopped at a failing table.
///
/// Carries every result produced up to and including the failure;
/// tables after it were never started.
#[derive(Debug, thiserror::Error)]
#[error("bootstrap aborted at table ({table}): {cause}")]
pub struct Aborted {
    report: Report,
    table: String,
    cause: BootstrapError,
}

impl Aborted {
    pub(crate) fn new(report: Report, table: String, cause: BootstrapError) -> Self {
        Self {
            report,
            table,
            cause,
        }
    }
    pub fn report(&self) -> &Report {
        &self.report
    }
    pub fn table(&self) -> &str {
        &self.table
    }
    pub fn cause(&self) -> &BootstrapError {
        &self.cause
    }
}
