use realworld_roster::config::Config;
use realworld_roster::{db, telemetry};
use std::error::Error;
use tracing::info;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    telemetry::init(&config);

    let pool = db::init_pool(&config);
    if config.run_migrations {
        let mut connection = pool.get()?;
        db::run_migrations(&mut connection)?;
    }

    info!(pool_size = config.pool_size, "starting realworld server");
    let _ = realworld_roster::rocket(pool).launch().await?;
    Ok(())
}
