use super::*;

/// Results of one bootstrap run, in the order the tables were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report(Vec<BootstrapResult>);

impl From<Vec<BootstrapResult>> for Report {
    fn from(results: Vec<BootstrapResult>) -> Self {
        Self(results)
    }
}

impl Report {
    pub fn results(&self) -> &[BootstrapResult] {
        &self.0
    }
    pub fn created(&self) -> usize {
        self.count(Outcome::Created)
    }
    pub fn existed(&self) -> usize {
        self.count(Outcome::AlreadyExisted)
    }
    pub fn failed(&self) -> usize {
        self.count(Outcome::Failed)
    }
    pub fn failures(&self) -> impl Iterator<Item = &BootstrapResult> {
        self.0.iter().filter(|r| r.is_failure())
    }
    /// Every table exists at the end of the run.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
    fn count(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|r| r.outcome() == outcome).count()
    }
    /// Logs the run as a table, one row per table plus totals.
    pub fn log(&self) {
        log::info!("┌──────────────────────┬─────────────────┐");
        log::info!("│ Table                │ Outcome         │");
        log::info!("├──────────────────────┼─────────────────┤");
        for result in self.0.iter() {
            log::info!(
                "│ {:<20} │ {:<15} │",
                result.table(),
                result.outcome().to_string()
            );
        }
        log::info!("├──────────────────────┼─────────────────┤");
        log::info!("│ Created              │ {:>15} │", self.created());
        log::info!("│ Existed              │ {:>15} │", self.existed());
        log::info!("│ Failed               │ {:>15} │", self.failed());
        log::info!("└──────────────────────┴─────────────────┘");
    }
}
