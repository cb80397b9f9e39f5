use super::*;

/// Terminal summary of one table's routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    AlreadyExisted,
    Created,
    Failed,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExisted => write!(f, "already_existed"),
            Self::Created => write!(f, "created"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Per-table, per-run state.
///
/// ```text
/// Unknown ─┬─> Exists
///          ├─> Absent ─┬─> Created
///          │           └─> CreationFailed
///          └─> CheckFailed
/// ```
///
/// Transitions that do not apply to the current state leave it unchanged,
/// so terminal states absorb every further event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    #[default]
    Unknown,
    Absent,
    Exists,
    Created,
    CreationFailed,
    CheckFailed,
}

impl State {
    /// The catalog answered.
    pub fn observe(self, present: bool) -> Self {
        match self {
            Self::Unknown if present => Self::Exists,
            Self::Unknown => Self::Absent,
            state => state,
        }
    }
    /// The creation statement succeeded.
    pub fn created(self) -> Self {
        match self {
            Self::Absent => Self::Created,
            state => state,
        }
    }
    /// The current step failed.
    pub fn failed(self) -> Self {
        match self {
            Self::Unknown => Self::CheckFailed,
            Self::Absent => Self::CreationFailed,
            state => state,
        }
    }
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Exists => Some(Outcome::AlreadyExisted),
            Self::Created => Some(Outcome::Created),
            Self::CreationFailed | Self::CheckFailed => Some(Outcome::Failed),
            Self::Unknown | Self::Absent => None,
        }
    }
}

/// Outcome of bootstrapping one table. Produced once per run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapResult {
    table: String,
    state: State,
    outcome: Outcome,
    error: Option<BootstrapError>,
}

impl BootstrapResult {
    pub(crate) fn new(table: &str, state: State, error: Option<BootstrapError>) -> Self {
        Self {
            table: table.to_string(),
            outcome: state.outcome().unwrap_or(Outcome::Failed),
            state,
            error,
        }
    }
    pub fn table(&self) -> &str {
        &self.table
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn error(&self) -> Option<&BootstrapError> {
        self.error.as_ref()
    }
    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failed
    }
}
