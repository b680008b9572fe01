use std::time::Duration;

use bytes::Bytes;
use log::{debug, trace};
use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::{utils::remove_trailing_slash, Error, Logged};

/// Applied to connect and read, there are no retries
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/**
 * Authenticated HTTP access to the Anaml API.
 * Every request carries the bearer token, and the branch selector if one is configured.
 */
#[derive(Clone)]
pub struct Transport {
    endpoint: String,
    client: reqwest::Client,
    token: String,
    branch: Option<String>,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("endpoint", &self.endpoint)
            .field("authenticated", &!self.token.is_empty())
            .field("branch", &self.branch)
            .finish()
    }
}

impl Transport {
    /// Empty branch means no branch
    pub(crate) fn new(endpoint: &str, branch: Option<&str>) -> Result<Self, Error> {
        let endpoint = remove_trailing_slash(endpoint);
        reqwest::Url::parse(&endpoint)
            .map_err(|e| Error::InvalidUrl(format!("{}, {}", endpoint, e)))?;
        Ok(Self {
            endpoint,
            client: reqwest::Client::builder()
                .connect_timeout(REQUEST_TIMEOUT)
                .timeout(REQUEST_TIMEOUT)
                .build()?,
            token: String::new(),
            branch: branch.filter(|b| !b.is_empty()).map(str::to_string),
        })
    }

    pub(crate) fn with_token(self, token: String) -> Self {
        Self { token, ..self }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /**
     * Read-style request, 404 comes back as `None` instead of an error.
     */
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Option<Bytes>, Error>
    where
        B: Serialize + ?Sized,
    {
        let (status, text) = self.execute(method, path, query, body).await?;
        if status == StatusCode::NOT_FOUND {
            debug!("{} not found", path);
            return Ok(None);
        }
        Self::check_status(status, text).map(Some)
    }

    /**
     * Write-style request, 404 is a `RemoteError` like any other failure status.
     */
    pub async fn send_strict<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Bytes, Error>
    where
        B: Serialize + ?Sized,
    {
        let (status, text) = self.execute(method, path, &[], body).await?;
        Self::check_status(status, text)
    }

    fn check_status(status: StatusCode, text: Bytes) -> Result<Bytes, Error> {
        if status.as_u16() >= 300 {
            Err(Error::RemoteError(
                status,
                String::from_utf8_lossy(&text).into_owned(),
            ))
        } else {
            Ok(text)
        }
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<(StatusCode, Bytes), Error>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.endpoint, path.trim_start_matches('/'));
        debug!("URL: {}", url);
        debug!("Method: {}", method);
        let mut builder = self.client.request(method, &url).bearer_auth(&self.token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(branch) = &self.branch {
            builder = builder.query(&[("branch", branch)]);
        }
        if let Some(body) = body {
            trace!(
                "Request: {}",
                serde_json::to_string(body).unwrap_or_default()
            );
            builder = builder.json(body);
        }
        let resp = builder.send().await.log()?;
        let status = resp.status();
        let text = resp.bytes().await.log()?;
        debug!("Status: {}", status);
        trace!("Response: {}", String::from_utf8_lossy(&text));
        Ok((status, text))
    }
}
