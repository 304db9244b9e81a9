use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) db: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(uri.to_string());
        opts.sqlx_logging(false);
        if uri.starts_with("sqlite") {
            // In-memory SQLite (the test suite) lives and dies with a single
            // connection; a pool would hand out empty databases.
            opts.max_connections(1);
        }

        log::info!("Connecting to database...");
        let db = Database::connect(opts).await?;
        log::info!("Running migrations...");
        Migrator::up(&db, None).await?;
        log::info!("Migrations finished.");
        Ok(Self { db })
    }
}
