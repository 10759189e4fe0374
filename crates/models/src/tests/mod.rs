
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Migrations run once per test process; concurrent `up` calls race on the version table
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connect and migrate, or `None` when no database is configured for this run.
pub async fn test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env(|k| std::env::var(k).ok());
    if cfg.url.is_empty() {
        eprintln!("skip: DATABASE_URL not set");
        return Ok(None);
    }
    cfg.max_connections = 5;

    let migrated = *MIGRATED
        .get_or_init(|| async {
            let Ok(db) = crate::db::connect(&cfg).await else { return false };
            migration::Migrator::up(&db, None).await.is_ok()
        })
        .await;
    if !migrated {
        eprintln!("skip: database unreachable or migration failed");
        return Ok(None);
    }

    Ok(Some(crate::db::connect(&cfg).await?))
}
