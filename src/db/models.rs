//! Rows written by the user and article subsystems.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use slug::slugify;

use super::schema::{articles, favorites, users};

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub token: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = articles)]
pub struct NewArticle {
    pub author_id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Option<Vec<String>>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl NewArticle {
    pub fn new(author_id: i32, title: &str, created_at: NaiveDateTime) -> Self {
        NewArticle {
            author_id,
            slug: created_at.and_utc().timestamp().to_string() + "-" + &slugify(title),
            title: title.to_owned(),
            description: String::new(),
            body: String::new(),
            tag_list: None,
            created_at,
            updated_at: None,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = favorites)]
pub struct NewFavorite {
    pub article_id: i32,
    pub user_id: i32,
}
