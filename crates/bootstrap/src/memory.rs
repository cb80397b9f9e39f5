//! In-memory [`Store`] for tests.
use super::*;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Fake catalog that records how often each operation ran.
///
/// `execute` understands just enough DDL to find the table a
/// `CREATE TABLE` statement names, and fails like a real store would when
/// the table is already there.
#[derive(Default)]
pub struct Memory {
    tables: Mutex<BTreeSet<String>>,
    rejects: BTreeSet<String>,
    broken: BTreeSet<String>,
    offline: bool,
    checks: AtomicUsize,
    executes: AtomicUsize,
}

impl Memory {
    pub fn with(tables: &[&str]) -> Self {
        Self {
            tables: Mutex::new(tables.iter().map(|t| t.to_string()).collect()),
            ..Self::default()
        }
    }
    /// Creation statements for `table` fail as if privilege were missing.
    pub fn rejecting(mut self, table: &str) -> Self {
        self.rejects.insert(table.to_string());
        self
    }
    /// Catalog lookups for `table` fail.
    pub fn unreadable(mut self, table: &str) -> Self {
        self.broken.insert(table.to_string());
        self
    }
    /// Every operation fails as if the server were down.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }
    pub fn contains(&self, table: &str) -> bool {
        self.tables.lock().unwrap().contains(table)
    }
    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
    pub fn executes(&self) -> usize {
        self.executes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn exists(&self, table: &str) -> Result<bool, StoreError> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(StoreError::Connectivity("connection refused".into()));
        }
        if self.broken.contains(table) {
            return Err(StoreError::Rejected("permission denied for catalog".into()));
        }
        Ok(self.contains(table))
    }
    async fn execute(&self, sql: &str) -> Result<(), StoreError> {
        self.executes.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(StoreError::Connectivity("connection refused".into()));
        }
        let table = target(sql).ok_or_else(|| StoreError::Rejected("syntax error".into()))?;
        if self.rejects.contains(&table) {
            return Err(StoreError::Rejected("permission denied for schema public".into()));
        }
        let mut tables = self.tables.lock().unwrap();
        if !tables.insert(table.clone()) {
            return Err(StoreError::Rejected(format!(
                "relation \"{}\" already exists",
                table
            )));
        }
        Ok(())
    }
}

/// Table named by the first `CREATE TABLE` in `sql`.
fn target(sql: &str) -> Option<String> {
    let mut words = sql.split_whitespace();
    loop {
        match words.next()? {
            w if w.eq_ignore_ascii_case("create") => match words.next()? {
                w if w.eq_ignore_ascii_case("table") => break,
                _ => continue,
            },
            _ => continue,
        }
    }
    let name = words.next()?;
    let name = match name.eq_ignore_ascii_case("if") {
        true => words.nth(2)?,
        false => name,
    };
    let name = name
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>();
    Some(name).filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_created_table() {
        assert_eq!(target("CREATE TABLE tours (id BIGINT)"), Some("tours".into()));
        assert_eq!(target("create table tours(id BIGINT)"), Some("tours".into()));
        assert_eq!(
            target("CREATE TABLE IF NOT EXISTS tours (id BIGINT)"),
            Some("tours".into())
        );
        assert_eq!(target("CREATE INDEX idx ON tours (id)"), None);
    }
}
