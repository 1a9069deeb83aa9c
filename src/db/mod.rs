use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use diesel::result::Error as DieselError;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::outcome::{try_outcome, Outcome};
use rocket::request::{self, FromRequest};
use rocket::{Request, State};
use tracing::{info, warn};

use crate::config::Config;
use crate::types::ApiError;

pub mod models;
pub mod schema;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

// An alias to the type for a pool of Diesel Postgres connections.
pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub struct DbConnection(Pool);

error_chain! {
    foreign_links {
        Var(::std::env::VarError);
        R2D2(r2d2::Error);
        Diesel(DieselError);
    }

    errors {
        InvalidSetting(name: &'static str, value: String) {
            description("invalid configuration value")
            display("invalid value for {}: '{}'", name, value)
        }
        Migration(reason: String) {
            description("failed to run migrations")
            display("failed to run migrations: {}", reason)
        }
    }
}

/// Hands the managed pool to a handler. If no pool is currently managed, fails
/// with an `InternalServerError` status. The checkout itself happens in `run`,
/// off the async executor.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for DbConnection {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, ()> {
        let pool = try_outcome!(request.guard::<&State<Pool>>().await);
        Outcome::Success(DbConnection(pool.inner().clone()))
    }
}

impl DbConnection {
    /// Checks out a connection and runs `f` with it on the blocking thread
    /// pool. A failed checkout is `ApiError::Unavailable`.
    pub async fn run<F, T>(self, f: F) -> ::std::result::Result<T, ApiError>
    where
        F: FnOnce(&mut PgConnection) -> ::std::result::Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let DbConnection(pool) = self;
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                warn!(error = %e, "no database connection available");
                ApiError::Unavailable
            })?;
            f(&mut *conn)
        })
        .await
        .map_err(|_| ApiError::Internal)?
    }
}

/// Builds the pool lazily; connections are opened on first checkout.
pub fn init_pool(config: &Config) -> Pool {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
    Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(config.connect_timeout)
        .build_unchecked(manager)
}

pub fn run_migrations(connection: &mut PgConnection) -> Result<()> {
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| ErrorKind::Migration(e.to_string()))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}
