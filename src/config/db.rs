use diesel::{
    pg::PgConnection,
    r2d2::{self, ConnectionManager},
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type Connection = PgConnection;
pub type Pool = r2d2::Pool<ConnectionManager<Connection>>;

/// Builds a connection pool, failing fast if the database is unreachable.
pub fn init_db_pool_with_size(url: &str, max_size: u32) -> Result<Pool, r2d2::PoolError> {
    log::info!("Configuring database pool (max_size = {})", max_size);
    let manager = ConnectionManager::<Connection>::new(url);
    r2d2::Pool::builder()
        .max_size(max_size.max(1))
        .build(manager)
}

/// Builds a pool without opening any connection up front.
///
/// Connections are established on first checkout, so handlers that never
/// touch storage (for instance on validation failure) work without a database.
pub fn init_lazy_db_pool(url: &str) -> Pool {
    let manager = ConnectionManager::<Connection>::new(url);
    r2d2::Pool::builder()
        .max_size(1)
        .connection_timeout(std::time::Duration::from_secs(1))
        .build_unchecked(manager)
}

/// Applies every pending embedded migration.
pub fn run_migration(conn: &mut Connection) -> Result<(), String> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|applied| {
            for version in applied {
                log::info!("Applied migration {}", version);
            }
        })
        .map_err(|e| format!("Failed to run migrations: {}", e))
}
