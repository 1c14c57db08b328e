use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::github::error::{ClientError, FetchError};
use crate::github::types::Profile;
use crate::github::ProfileSource;

const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Unauthenticated client for `GET {base}/users/{username}`.
///
/// Holds one pooled reqwest client; cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot have path segments".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        let accept = HeaderValue::from_str(&config.accept)
            .map_err(|_| ClientError::InvalidHeader { name: "accept" })?;
        headers.insert(ACCEPT, accept);

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/users/{login}` with `login` pushed as a single
    /// percent-encoded segment, so `/`, `?` and `#` cannot escape it.
    ///
    /// Dot segments are normalized away by URL parsing (even as `%2E`),
    /// which would turn the request into `GET {base}/users`. No account
    /// can be named `.` or `..`, so those resolve to `NotFound`.
    pub fn user_url(&self, login: &str) -> Result<Url, FetchError> {
        if matches!(login, "" | "." | "..") {
            return Err(FetchError::NotFound {
                login: login.to_string(),
            });
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl {
                base: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .push("users")
            .push(login);
        Ok(url)
    }

    pub async fn fetch_profile(&self, login: &str) -> Result<Profile, FetchError> {
        let url = self.user_url(login)?;
        debug!(%url, "requesting profile");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => {
                return Err(FetchError::NotFound {
                    login: login.to_string(),
                })
            }
            StatusCode::FORBIDDEN => {
                let reset_at = response
                    .headers()
                    .get(RATE_LIMIT_RESET)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok());
                warn!(?reset_at, "upstream rate limit hit");
                return Err(FetchError::RateLimited { reset_at });
            }
            status if !status.is_success() => {
                return Err(FetchError::Upstream {
                    status: status.as_u16(),
                })
            }
            _ => {}
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { source })
    }
}

impl ProfileSource for GitHubClient {
    async fn fetch_profile(&self, login: &str) -> Result<Profile, FetchError> {
        GitHubClient::fetch_profile(self, login).await
    }
}
