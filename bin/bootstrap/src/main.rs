//! Schema Bootstrap Binary
//!
//! Ensures every courier table exists. Run during startup, before the
//! server accepts traffic.
//!
//! Options: --status, --policy, --concurrency, --table
mod args;

use args::Args;
use clap::Parser;
use courier_bootstrap::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    courier_core::log()?;
    let specs = args.specs()?;
    let client = courier_pg::db(&args.db_url).await?;
    let bootstrapper = Bootstrapper::new(client)
        .policy(args.policy)
        .concurrency(args.concurrency);
    if args.status {
        status(&bootstrapper, &specs).await;
        return Ok(());
    }
    match bootstrapper.run(&specs).await {
        Ok(report) => {
            report.log();
            for failure in report.failures() {
                log::warn!("table ({}) still missing, continuing startup", failure.table());
            }
            Ok(())
        }
        Err(aborted) => {
            aborted.report().log();
            Err(aborted.into())
        }
    }
}

async fn status<S: Store>(bootstrapper: &Bootstrapper<S>, specs: &[TableSpec]) {
    let survey = bootstrapper.status(specs).await;
    log::info!("┌──────────────────────┬───────────┐");
    log::info!("│ Table                │ Present   │");
    log::info!("├──────────────────────┼───────────┤");
    for (table, present) in survey.iter() {
        let mark = match present {
            Ok(true) => "✓",
            Ok(false) => " ",
            Err(_) => "?",
        };
        log::info!("│ {:<20} │     {}     │", table, mark);
    }
    log::info!("└──────────────────────┴───────────┘");
    for (table, e) in survey.iter().filter_map(|(t, p)| p.as_ref().err().map(|e| (t, e))) {
        log::error!("could not check table ({}): {}", table, e);
    }
}
