#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> Option<DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env(|k| std::env::var(k).ok());
    if cfg.url.is_empty() {
        return None;
    }
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.acquire_timeout_secs = 10;
    Some(cfg)
}

/// A migrated connection, or `None` when no database is available.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(cfg) = test_config() else {
        eprintln!("skip: no database configured");
        return Ok(None);
    };

    // Run migrations exactly once, with a throwaway connection
    let migrated = *MIGRATED
        .get_or_init(|| async {
            let Ok(db) = models::db::connect(&cfg).await else { return false };
            migration::Migrator::up(&db, None).await.is_ok()
        })
        .await;
    if !migrated {
        eprintln!("skip: database unreachable or migration failed");
        return Ok(None);
    }

    // Return a fresh connection for the current test's runtime
    let db = models::db::connect(&cfg).await?;
    Ok(Some(db))
}
