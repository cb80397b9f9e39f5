//! Runtime utilities and shared constants for courier services.
//!
//! Everything a startup binary needs before it touches the database:
//! logger initialization and the defaults its configuration falls back to.

// ============================================================================
// ENVIRONMENT
// ============================================================================
/// Connection string for the relational store.
pub const ENV_DB_URL: &str = "DB_URL";
/// Failure policy for table bootstrap (`continue` or `abort`).
pub const ENV_BOOTSTRAP_POLICY: &str = "BOOTSTRAP_POLICY";
/// Maximum number of table routines in flight at once.
pub const ENV_BOOTSTRAP_CONCURRENCY: &str = "BOOTSTRAP_CONCURRENCY";
/// Directory for timestamped log files.
pub const ENV_LOG_DIR: &str = "LOG_DIR";

// ============================================================================
// DEFAULTS
// ============================================================================
/// Default table routines in flight. Each holds one query on the shared client.
pub const BOOTSTRAP_CONCURRENCY: usize = 4;
/// Default directory for log files when `LOG_DIR` is unset.
pub const LOG_DIR: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates the log directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    let dir = std::env::var(ENV_LOG_DIR).unwrap_or_else(|_| LOG_DIR.to_string());
    std::fs::create_dir_all(&dir)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(std::path::Path::new(&dir).join(format!("{}.log", time)))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
