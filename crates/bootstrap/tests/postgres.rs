//! Live-database checks. Run with `DB_URL` set and `--ignored`.
use courier_bootstrap::*;

async fn client() -> std::sync::Arc<tokio_postgres::Client> {
    let url = std::env::var("DB_URL").expect("DB_URL must be set");
    courier_pg::connect(&url).await.expect("database connection")
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL at DB_URL"]
async fn bootstrap_is_idempotent_against_postgres() {
    let client = client().await;
    let name = format!("bootstrap_probe_{}", std::process::id());
    let spec = TableSpec::new(
        name.as_str(),
        format!(
            "CREATE TABLE {t} (id BIGINT PRIMARY KEY);
             CREATE INDEX idx_{t}_id ON {t} (id);",
            t = name
        ),
    );
    let bootstrapper = Bootstrapper::new(client.clone());
    let first = bootstrapper.bootstrap(&spec).await;
    let again = bootstrapper.bootstrap(&spec).await;
    let present = bootstrapper.exists(&name).await;
    client
        .batch_execute(&format!("DROP TABLE IF EXISTS {}", name))
        .await
        .expect("drop probe table");
    assert_eq!(first.outcome(), Outcome::Created);
    assert_eq!(again.outcome(), Outcome::AlreadyExisted);
    assert_eq!(present, Ok(true));
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL at DB_URL"]
async fn malformed_statement_is_a_creation_failure() {
    let client = client().await;
    let name = format!("bootstrap_broken_{}", std::process::id());
    let spec = TableSpec::new(name.as_str(), "CREATE TABLE (;");
    let result = Bootstrapper::new(client.clone()).bootstrap(&spec).await;
    assert_eq!(result.outcome(), Outcome::Failed);
    match result.error() {
        Some(BootstrapError::CreationStatement(message)) => {
            assert!(message.contains("42601"), "{}", message);
            assert!(message.contains("syntax error"), "{}", message);
        }
        other => panic!("expected a creation failure, got {:?}", other),
    }
    assert_eq!(Bootstrapper::new(client).exists(&name).await, Ok(false));
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL at DB_URL with a role allowed to CREATE ROLE"]
async fn table_without_grants_still_counts_as_present() {
    let client = client().await;
    let name = format!("bootstrap_hidden_{}", std::process::id());
    let role = format!("bootstrap_viewer_{}", std::process::id());
    client
        .batch_execute(&format!(
            "CREATE TABLE {t} (id BIGINT PRIMARY KEY);
             REVOKE ALL ON {t} FROM PUBLIC;
             CREATE ROLE {r} NOLOGIN;
             DO $$ BEGIN EXECUTE format('GRANT USAGE ON SCHEMA %I TO {r}', current_schema()); END $$;
             SET ROLE {r};",
            t = name,
            r = role
        ))
        .await
        .expect("set up table owned by another role");
    let spec = TableSpec::new(
        name.as_str(),
        format!("CREATE TABLE {} (id BIGINT PRIMARY KEY);", name),
    );
    let bootstrapper = Bootstrapper::new(client.clone());
    let present = bootstrapper.exists(&name).await;
    let result = bootstrapper.bootstrap(&spec).await;
    client
        .batch_execute(&format!(
            "RESET ROLE;
             DROP TABLE IF EXISTS {t};
             DO $$ BEGIN EXECUTE format('REVOKE USAGE ON SCHEMA %I FROM {r}', current_schema()); END $$;
             DROP ROLE IF EXISTS {r};",
            t = name,
            r = role
        ))
        .await
        .expect("tear down");
    assert_eq!(present, Ok(true));
    assert_eq!(result.outcome(), Outcome::AlreadyExisted);
}
