//! In-memory SQLite database for repository and HTTP tests.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Connect to a fresh in-memory SQLite database and apply all of `M`'s migrations.
///
/// The pool is pinned to a single connection: every SQLite `:memory:` connection
/// is its own database.
///
/// Panics on connection or migration failure.
pub async fn migrated_sqlite<M: MigratorTrait>() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("connect to in-memory sqlite");
    M::up(&db, None).await.expect("apply migrations");
    db
}
