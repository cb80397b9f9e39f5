use super::*;
use futures::StreamExt;
use std::collections::HashSet;

/// Runs the check-then-create routine for each table over an injected store.
///
/// One routine per [`TableSpec`]: look the table up in the catalog, and
/// only if it is absent execute its creation statement, exactly once.
/// Routines for different tables share the store and may overlap; within
/// one table, creation always follows that table's own check.
///
/// Two processes bootstrapping the same table at once can both observe
/// absence. The loser's creation statement then fails and is reported
/// like any other creation failure.
pub struct Bootstrapper<S> {
    store: S,
    policy: Policy,
    concurrency: usize,
}

impl<S> Bootstrapper<S>
where
    S: Store,
{
    /// Serial, continue-on-failure bootstrapper.
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: Policy::default(),
            concurrency: 1,
        }
    }
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
    /// Maximum routines in flight under [`Policy::Continue`].
    /// [`Policy::Abort`] always runs one table at a time.
    pub fn concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }
    /// Whether `table` is present. Errors are surfaced, never swallowed.
    pub async fn exists(&self, table: &str) -> Result<bool, BootstrapError> {
        if !TableSpec::is_valid_identifier(table) {
            return Err(BootstrapError::CatalogQuery(format!(
                "invalid table identifier ({})",
                table
            )));
        }
        self.store
            .exists(table)
            .await
            .map_err(BootstrapError::checking)
    }

    /// Brings one table to "exists" if it can. Never fails; failures are
    /// carried in the result.
    pub async fn bootstrap(&self, spec: &TableSpec) -> BootstrapResult {
        log::debug!("checking table ({})", spec.name());
        let state = State::Unknown;
        let state = match self.exists(spec.name()).await {
            Ok(present) => state.observe(present),
            Err(e) => return Self::settle(spec, state.failed(), Some(e)),
        };
        if state.is_terminal() {
            return Self::settle(spec, state, None);
        }
        log::debug!("creating table ({})", spec.name());
        match self.store.execute(spec.creates()).await {
            Ok(()) => Self::settle(spec, state.created(), None),
            Err(e) => Self::settle(spec, state.failed(), Some(BootstrapError::creating(e))),
        }
    }

    /// Bootstraps every table, reporting results in the order given.
    /// A table listed more than once runs once, at its first position.
    ///
    /// Under [`Policy::Continue`] every table is attempted and the report
    /// is returned even if some failed. Under [`Policy::Abort`] the run
    /// stops at the first failure and no later table is started.
    pub async fn run(&self, specs: &[TableSpec]) -> Result<Report, Aborted> {
        let specs = distinct(specs);
        let width = match self.policy {
            Policy::Continue => self.concurrency,
            Policy::Abort => 1,
        };
        log::info!(
            "bootstrapping {} tables ({} on failure, {} at a time)",
            specs.len(),
            self.policy,
            width
        );
        let mut results = Vec::with_capacity(specs.len());
        let stream = futures::stream::iter(specs.clone())
            .map(|spec| self.bootstrap(spec))
            .buffered(width);
        futures::pin_mut!(stream);
        while let Some(result) = stream.next().await {
            let abort = match (self.policy, result.error()) {
                (Policy::Abort, Some(cause)) => Some((result.table().to_string(), cause.clone())),
                _ => None,
            };
            results.push(result);
            if let Some((table, cause)) = abort {
                log::error!(
                    "aborting bootstrap after table ({}), {} tables not attempted",
                    table,
                    specs.len() - results.len()
                );
                return Err(Aborted::new(Report::from(results), table, cause));
            }
        }
        Ok(Report::from(results))
    }

    /// Read-only presence survey. Creates nothing.
    pub async fn status(&self, specs: &[TableSpec]) -> Vec<(String, Result<bool, BootstrapError>)> {
        futures::stream::iter(distinct(specs))
            .map(|spec| async move { (spec.name().to_string(), self.exists(spec.name()).await) })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    fn settle(spec: &TableSpec, state: State, error: Option<BootstrapError>) -> BootstrapResult {
        match (state, error.as_ref()) {
            (State::Exists, _) => log::info!("table ({}) already exists", spec.name()),
            (State::Created, _) => log::info!("created table ({})", spec.name()),
            (_, Some(e)) => log::error!(
                "failed to bootstrap table ({}) during {}: {}",
                spec.name(),
                e.phase(),
                e
            ),
            (_, None) => log::error!("failed to bootstrap table ({})", spec.name()),
        }
        BootstrapResult::new(spec.name(), state, error)
    }
}

/// First occurrence of each table name, in order.
fn distinct(specs: &[TableSpec]) -> Vec<&TableSpec> {
    let mut seen = HashSet::new();
    specs
        .iter()
        .filter(|spec| {
            let fresh = seen.insert(spec.name());
            if !fresh {
                log::warn!("table ({}) listed more than once, running it once", spec.name());
            }
            fresh
        })
        .collect()
}
