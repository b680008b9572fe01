use std::{path::Path, sync::Arc};

use log::debug;

use crate::{
    default_var_source, load_var_source, new_var_source, AnamlApiClient, DataSource, Error,
    Flattened, Lookup, ManagedResource, ProviderConfig, VarSource,
};

/**
 * Connected Anaml session, cheap to clone and safe to share between tasks
 * driving independent resources.
 */
#[derive(Clone, Debug)]
pub struct AnamlClient {
    inner: Arc<AnamlApiClient>,
}

impl AnamlClient {
    pub async fn load<T>(conf_file: T) -> Result<Self, Error>
    where
        T: AsRef<Path>,
    {
        Self::from_var_source(load_var_source(conf_file)).await
    }

    pub async fn from_str(content: &str) -> Result<Self, Error> {
        Self::from_var_source(new_var_source(content)).await
    }

    /// Config file from `ANAML_CONFIG`, falls back to environment variables
    pub async fn from_env() -> Result<Self, Error> {
        Self::from_var_source(default_var_source()).await
    }

    pub async fn from_var_source(
        var_source: Arc<dyn VarSource + Send + Sync>,
    ) -> Result<Self, Error> {
        let config = ProviderConfig::from_var_source(var_source).await;
        Self::connect(&config).await
    }

    pub async fn connect(config: &ProviderConfig) -> Result<Self, Error> {
        debug!("Connecting with {:?}", config);
        Ok(Self {
            inner: Arc::new(AnamlApiClient::from_config(config).await?),
        })
    }

    pub fn api(&self) -> &AnamlApiClient {
        &self.inner
    }

    pub fn resource<S>(&self) -> ManagedResource<'_, S>
    where
        S: Flattened,
    {
        ManagedResource::new(&self.inner)
    }

    pub fn data_source<T>(&self) -> DataSource<'_, T>
    where
        T: Lookup,
    {
        DataSource::new(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::{Cluster, EntityState};

    #[tokio::test]
    async fn connects_from_config_file_content() {
        crate::tests::init_logger();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/entity"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("7"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/cluster"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "local"})),
            )
            .mount(&server)
            .await;

        let client = AnamlClient::from_str(&format!(
            "anaml:\n  host: {}/\n  username: admin\n  password: pw\n",
            server.uri()
        ))
        .await
        .unwrap();
        assert_eq!(client.api().transport().endpoint(), server.uri());

        let entity = EntityState {
            name: "customer".to_string(),
            default_column: "customer_id".to_string(),
            ..Default::default()
        };
        let handle = client.clone();
        let entities = client.resource::<EntityState>();
        let clusters = handle.data_source::<Cluster>();
        let (created, found) =
            tokio::join!(entities.create(&entity), clusters.read("local"));
        assert_eq!(created.unwrap(), "7");
        assert_eq!(found.unwrap().unwrap().0, "1");
    }
}
