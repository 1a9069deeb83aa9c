use rocket::serde::json::Json;
use tracing::info;

use crate::db::DbConnection;
use crate::types::{ApiError, ApiResult};

pub mod client;
pub mod stats;
pub mod view;

pub use self::client::{FetchError, FetchErrorKind, HttpRosterSource};
pub use self::stats::{list_user_stats, UserStatsRow};
pub use self::view::{DisplayRow, RosterSource, RosterView, ViewState};

#[get("/roster")]
pub async fn roster(connection: DbConnection) -> ApiResult<Vec<UserStatsRow>> {
    let rows = connection
        .run(|conn| list_user_stats(conn).map_err(ApiError::from))
        .await?;
    info!(users = rows.len(), "served roster");
    Ok(Json(rows))
}
