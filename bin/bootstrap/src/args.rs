use clap::Parser;
use courier_bootstrap::Policy;
use courier_bootstrap::TableSpec;
use std::collections::HashSet;

/// Command line, with every option also readable from the environment.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// PostgreSQL connection string
    #[arg(long, env = courier_core::ENV_DB_URL, hide_env_values = true)]
    pub db_url: String,
    /// What to do when one table fails: `continue` or `abort`
    #[arg(long, env = courier_core::ENV_BOOTSTRAP_POLICY, default_value_t = Policy::Continue)]
    pub policy: Policy,
    /// Tables checked or created at once (abort runs one at a time)
    #[arg(
        long,
        env = courier_core::ENV_BOOTSTRAP_CONCURRENCY,
        default_value_t = courier_core::BOOTSTRAP_CONCURRENCY
    )]
    pub concurrency: usize,
    /// Only bootstrap the named table (repeatable)
    #[arg(long = "table", value_name = "NAME")]
    pub tables: Vec<String>,
    /// Report which tables exist without creating any
    #[arg(long)]
    pub status: bool,
}

impl Args {
    /// Specs selected by `--table` in first-seen order, or the whole catalog.
    pub fn specs(&self) -> anyhow::Result<Vec<TableSpec>> {
        if self.tables.is_empty() {
            return Ok(courier_tables::catalog());
        }
        let mut seen = HashSet::new();
        self.tables
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .map(|name| {
                courier_tables::lookup(name)
                    .ok_or_else(|| anyhow::anyhow!("unknown table ({})", name))
            })
            .collect()
    }
}
