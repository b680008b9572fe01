use std::{env::VarError, sync::Arc};

use log::warn;

use crate::{Error, VarSource};

/// Default Anaml endpoint
pub const DEFAULT_HOST: &str = "http://localhost:8080";

/// Provider options, each of them optional
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub branch: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "******"))
            .field("branch", &self.branch)
            .finish()
    }
}

impl ProviderConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    pub fn credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    /**
     * Resolve options from `ANAML_HOST`, `ANAML_USERNAME`, `ANAML_PASSWORD` and
     * `ANAML_DEFAULT_BRANCH`, or the `anaml` section of the config file.
     * Missing and empty values are both treated as unset, a malformed value is
     * logged and treated as unset too.
     */
    pub async fn from_var_source(var_source: Arc<dyn VarSource + Send + Sync>) -> Self {
        let get = |key: &'static str| {
            let var_source = var_source.clone();
            async move {
                match var_source.get_environment_variable(&["anaml", key]).await {
                    Ok(v) => Some(v).filter(|v| !v.is_empty()),
                    Err(Error::MissingConfig(_)) | Err(Error::VarError(VarError::NotPresent)) => {
                        None
                    }
                    Err(e) => {
                        warn!("Ignoring Anaml config `{}`, {}", key, e);
                        None
                    }
                }
            }
        };
        Self {
            host: get("host").await,
            username: get("username").await,
            password: get("password").await,
            branch: get("default_branch").await,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        reqwest::Url::parse(self.endpoint())
            .map_err(|e| Error::InvalidUrl(format!("{}, {}", self.endpoint(), e)))?;
        Ok(())
    }
}
