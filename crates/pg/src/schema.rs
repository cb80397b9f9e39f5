/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL for table creation and indexing. All methods
/// return `&'static str` so implementations can build their statements with
/// [`const_format::concatcp!`] from the table-name constants.
///
/// # Design
///
/// This trait contains no I/O operations—it purely describes table structure.
/// Whether the statements run at all is decided by the bootstrapper, which
/// checks the catalog first.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns the `CREATE TABLE` DDL statement.
    ///
    /// Runs only after the catalog reported the table absent.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX` statements for all indices, or `""` for none.
    fn indices() -> &'static str {
        ""
    }
}
