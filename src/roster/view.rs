//! Client-side state for the roster page.
//!
//! A [`RosterView`] is activated once. It asks its [`RosterSource`] for every
//! [`UserStatsRow`], exposes a loading flag while the request is pending and
//! ends either with rows to show or with a recorded error and nothing shown.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{error, info};

use super::client::FetchResult;
use super::stats::UserStatsRow;

pub const DEFAULT_AVATAR: &str = "https://static.productionready.io/images/smiley-cyrus.jpg";
pub const MISSING_DATE: &str = "-";
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn fetch_roster(&self) -> FetchResult<Vec<UserStatsRow>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(Vec<UserStatsRow>),
    Failed(String),
}

/// One table row, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub avatar: String,
    pub username: String,
    pub profile_link: String,
    pub article_count: i64,
    pub favorite_count: i64,
    pub first_article: String,
}

impl From<&UserStatsRow> for DisplayRow {
    fn from(row: &UserStatsRow) -> Self {
        let avatar = match row.image.as_deref() {
            Some(image) if !image.trim().is_empty() => image.to_owned(),
            _ => DEFAULT_AVATAR.to_owned(),
        };
        let first_article = match row.first_article_date {
            Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
            None => MISSING_DATE.to_owned(),
        };
        DisplayRow {
            avatar,
            username: row.username.clone(),
            profile_link: format!("/profile/{}", urlencoding::encode(&row.username)),
            article_count: row.article_count,
            favorite_count: row.favorite_count,
            first_article,
        }
    }
}

pub struct RosterView<S> {
    source: S,
    state: RwLock<ViewState>,
}

impl<S: RosterSource> RosterView<S> {
    pub fn new(source: S) -> Self {
        RosterView {
            source,
            state: RwLock::new(ViewState::Idle),
        }
    }

    /// Issues the single roster request. Does nothing unless the view is idle.
    ///
    /// Dropping the returned future mid-fetch leaves the view in `Loading`.
    pub async fn activate(&self) {
        {
            let mut state = self.state.write();
            if *state != ViewState::Idle {
                return;
            }
            *state = ViewState::Loading;
        }

        let next = match self.source.fetch_roster().await {
            Ok(rows) => {
                info!(count = rows.len(), "roster loaded");
                ViewState::Loaded(rows)
            }
            Err(e) => {
                error!(error = %e, "failed to load roster");
                ViewState::Failed(e.to_string())
            }
        };
        *self.state.write() = next;
    }

    pub fn state(&self) -> ViewState {
        self.state.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.state.read() == ViewState::Loading
    }

    /// Rows once loaded; empty in every other state.
    pub fn rows(&self) -> Vec<UserStatsRow> {
        match &*self.state.read() {
            ViewState::Loaded(rows) => rows.clone(),
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<String> {
        match &*self.state.read() {
            ViewState::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    pub fn display_rows(&self) -> Vec<DisplayRow> {
        match &*self.state.read() {
            ViewState::Loaded(rows) => rows.iter().map(DisplayRow::from).collect(),
            _ => Vec::new(),
        }
    }
}
