use async_trait::async_trait;
use tracing::debug;

use super::stats::UserStatsRow;
use super::view::RosterSource;

error_chain! {
    types {
        FetchError, FetchErrorKind, FetchResultExt, FetchResult;
    }

    foreign_links {
        Http(reqwest::Error);
    }

    errors {
        Status(code: u16) {
            description("unexpected response status")
            display("roster request failed with status {}", code)
        }
    }
}

/// Fetches the roster from a running API over HTTP.
pub struct HttpRosterSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRosterSource {
    /// `api_root` is the API prefix, e.g. `http://localhost:8000/api`.
    pub fn new(api_root: &str) -> Self {
        HttpRosterSource::with_client(reqwest::Client::new(), api_root)
    }

    pub fn with_client(client: reqwest::Client, api_root: &str) -> Self {
        HttpRosterSource {
            client,
            url: format!("{}/roster", api_root.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RosterSource for HttpRosterSource {
    async fn fetch_roster(&self) -> FetchResult<Vec<UserStatsRow>> {
        debug!(url = %self.url, "requesting roster");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            bail!(FetchErrorKind::Status(status.as_u16()));
        }
        Ok(response.json::<Vec<UserStatsRow>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_built_under_the_api_root() {
        assert_eq!(
            HttpRosterSource::new("http://localhost:8000/api/").url(),
            "http://localhost:8000/api/roster"
        );
        assert_eq!(
            HttpRosterSource::new("http://localhost:8000/api").url(),
            "http://localhost:8000/api/roster"
        );
    }
}
