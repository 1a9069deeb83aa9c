use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Nullable, Text, Timestamp};
use serde::{Deserialize, Serialize};

use crate::utils::serialize_optional_date;

// One row per user. The LEFT JOINs keep authors without articles; favorites
// fan out per article, hence DISTINCT on the article count.
static SELECT_USER_STATS: &str = "select users.id as id,
       users.username as username,
       users.bio as bio,
       users.image as image,
       count(distinct articles.id) as article_count,
       coalesce(sum(case when favorites.id is null then 0 else 1 end), 0) as favorite_count,
       min(articles.created_at) as first_article_date
  from users LEFT JOIN articles on articles.author_id = users.id
             LEFT JOIN favorites on favorites.article_id = articles.id
  GROUP BY users.id;";

#[derive(Debug, QueryableByName)]
pub struct UserStatsRecord {
    #[diesel(sql_type = Integer)]
    id: i32,
    #[diesel(sql_type = Text)]
    username: String,
    #[diesel(sql_type = Nullable<Text>)]
    bio: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    image: Option<String>,
    #[diesel(sql_type = BigInt)]
    article_count: i64,
    #[diesel(sql_type = BigInt)]
    favorite_count: i64,
    #[diesel(sql_type = Nullable<Timestamp>)]
    first_article_date: Option<NaiveDateTime>,
}

/// Aggregated authoring statistics for one user, as served by `GET /roster`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsRow {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub article_count: i64,
    #[serde(default)]
    pub favorite_count: i64,
    #[serde(default, serialize_with = "serialize_optional_date")]
    pub first_article_date: Option<DateTime<Utc>>,
}

impl From<UserStatsRecord> for UserStatsRow {
    fn from(record: UserStatsRecord) -> Self {
        UserStatsRow {
            id: record.id,
            username: record.username,
            bio: record.bio,
            image: record.image,
            article_count: record.article_count,
            favorite_count: record.favorite_count,
            // article timestamps are stored as UTC without a zone
            first_article_date: record.first_article_date.map(|date| date.and_utc()),
        }
    }
}

pub fn list_user_stats(connection: &mut PgConnection) -> QueryResult<Vec<UserStatsRow>> {
    let records = sql_query(SELECT_USER_STATS).load::<UserStatsRecord>(connection)?;
    Ok(records.into_iter().map(UserStatsRow::from).collect())
}
