use super::{decode_users, UserSource};
use crate::error::{Result, RosterError};
use crate::model::UserRecord;
use reqwest::Client;

/// The static member list the console was built against.
pub const DEFAULT_SOURCE_URL: &str =
    "http://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Fetches the user list with a single unauthenticated GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| RosterError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl UserSource for HttpSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        tracing::debug!(url = %self.url, "fetching users");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RosterError::Network(format!("{}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::Network(format!(
                "{} returned status {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RosterError::Network(format!("{}: {}", self.url, e)))?;

        decode_users(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
