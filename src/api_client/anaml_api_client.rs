use log::debug;
use reqwest::Method;

use crate::{Error, Logged, ProviderConfig};

use super::{
    api_models::{AuthRequest, AuthResponse, Identifier},
    ApiResource, Transport,
};

/**
 * Anaml API client.
 * One generic set of get/create/update/delete calls serves every `ApiResource` kind.
 */
#[derive(Clone, Debug)]
pub struct AnamlApiClient {
    transport: Transport,
}

impl AnamlApiClient {
    /**
     * Log in when both username and password are given, otherwise all
     * requests go out with an empty bearer token.
     */
    pub async fn login(
        endpoint: &str,
        username: Option<&str>,
        password: Option<&str>,
        branch: Option<&str>,
    ) -> Result<Self, Error> {
        let transport = Transport::new(endpoint, branch)?;
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) => (u, p),
            _ => {
                debug!("No credentials provided, skipping login");
                return Ok(Self { transport });
            }
        };

        debug!("Logging in to {} as {}", transport.endpoint(), username);
        let request = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = transport
            .send_strict(Method::POST, "login", Some(&request))
            .await
            .log()
            .map_err(|e| Error::AuthError(e.to_string()))?;
        let auth: AuthResponse = serde_json::from_slice(&body)
            .log()
            .map_err(|e| Error::AuthError(format!("invalid login response, {}", e)))?;
        debug!("Token acquired");
        Ok(Self {
            transport: transport.with_token(auth.token),
        })
    }

    pub async fn from_config(config: &ProviderConfig) -> Result<Self, Error> {
        config.validate()?;
        Self::login(
            config.endpoint(),
            config.username.as_deref(),
            config.password.as_deref(),
            config.branch.as_deref(),
        )
        .await
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub async fn get<T>(&self, id: Identifier) -> Result<Option<T>, Error>
    where
        T: ApiResource,
    {
        let path = format!("{}/{}", T::PATH, id);
        self.transport
            .send::<()>(Method::GET, &path, &[], None)
            .await?
            .map(|body| serde_json::from_slice(&body))
            .transpose()
            .log()
            .map_err(Error::from)
    }

    /// `GET /<kind>?name=<name>`, used by data sources
    pub async fn find_by_name<T>(&self, name: &str) -> Result<Option<T>, Error>
    where
        T: ApiResource,
    {
        self.transport
            .send::<()>(Method::GET, T::PATH, &[("name", name)], None)
            .await?
            .map(|body| serde_json::from_slice(&body))
            .transpose()
            .log()
            .map_err(Error::from)
    }

    /**
     * The server answers with the bare new identity, which is attached to the
     * record we sent. Other fields are not re-fetched.
     */
    pub async fn create<T>(&self, mut record: T) -> Result<T, Error>
    where
        T: ApiResource,
    {
        let id = self.insert(&record).await?;
        record.set_id(Some(id));
        Ok(record)
    }

    /// POST the record without its identity, returns the new identity
    pub async fn insert<T>(&self, record: &T) -> Result<Identifier, Error>
    where
        T: ApiResource,
    {
        let mut record = record.clone();
        record.set_id(None);
        let body = self
            .transport
            .send_strict(Method::POST, T::PATH, Some(&record))
            .await?;
        let id: Identifier = serde_json::from_slice(&body).log()?;
        debug!("{} created, id: {}", T::PATH, id);
        Ok(id)
    }

    /// Full replacement, there is no partial update
    pub async fn update<T>(&self, id: Identifier, record: &T) -> Result<(), Error>
    where
        T: ApiResource,
    {
        let mut record = record.clone();
        record.set_id(Some(id));
        let path = format!("{}/{}", T::PATH, id);
        self.transport
            .send_strict(Method::PUT, &path, Some(&record))
            .await?;
        debug!("{} {} updated", T::PATH, id);
        Ok(())
    }

    /// Deleting a missing entity is a `RemoteError` with status 404
    pub async fn delete<T>(&self, id: Identifier) -> Result<(), Error>
    where
        T: ApiResource,
    {
        let path = format!("{}/{}", T::PATH, id);
        self.transport
            .send_strict::<()>(Method::DELETE, &path, None)
            .await?;
        debug!("{} {} deleted", T::PATH, id);
        Ok(())
    }
}
