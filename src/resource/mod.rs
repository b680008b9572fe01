use std::fmt::Debug;
use std::marker::PhantomData;

use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::{api_client::ApiResource, utils::parse_identifier, AnamlApiClient, Error};

mod data_source;
mod destination;
mod entity;
mod feature;
mod feature_store;
mod schedule;
mod table;

pub use data_source::{DataSource, Lookup, NamedState, DATA_SOURCE_TYPES};
pub use destination::{expand_destinations, flatten_destinations, DestinationBlock};
pub use entity::{EntityMappingState, EntityState};
pub use feature::{FeatureSetState, FeatureState, FeatureTemplateState};
pub use feature_store::FeatureStoreState;
pub use schedule::{
    expand_schedule, flatten_schedule, CronScheduleBlock, DailyScheduleBlock, RetryPolicyBlock,
    ScheduleBlocks,
};
pub use table::{EntityColumnBlock, TableSourceBlock, TableState};

/**
 * The flattened form of a record, as the declarative configuration sees it.
 * Identifiers are decimal strings and unset optional strings are empty.
 */
pub trait Flattened:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + Sized
{
    type Model: ApiResource;

    /// Resource type name in the configuration, e.g. `anaml_feature_store`
    const TYPE_NAME: &'static str;

    /// Validate and convert to the wire record, without identity
    fn expand(&self) -> Result<Self::Model, Error>;

    fn flatten(model: Self::Model) -> Result<Self, Error>;
}

/// Resource type names handled by this crate
pub const RESOURCE_TYPES: &[&str] = &[
    EntityState::TYPE_NAME,
    EntityMappingState::TYPE_NAME,
    TableState::TYPE_NAME,
    FeatureState::TYPE_NAME,
    FeatureSetState::TYPE_NAME,
    FeatureStoreState::TYPE_NAME,
    FeatureTemplateState::TYPE_NAME,
];

/**
 * Create/read/update/delete of one resource type, keyed by the id string the
 * declarative engine stores.
 */
#[derive(Debug)]
pub struct ManagedResource<'a, S> {
    client: &'a AnamlApiClient,
    _state: PhantomData<S>,
}

impl<'a, S> ManagedResource<'a, S>
where
    S: Flattened,
{
    pub fn new(client: &'a AnamlApiClient) -> Self {
        Self {
            client,
            _state: PhantomData,
        }
    }

    /// Returns the id of the new entity
    pub async fn create(&self, desired: &S) -> Result<String, Error> {
        let model = desired.expand()?;
        let id = self.client.insert(&model).await?;
        debug!("{} {} created", S::TYPE_NAME, id);
        Ok(id.to_string())
    }

    /// `None` when the entity no longer exists
    pub async fn read(&self, id: &str) -> Result<Option<S>, Error> {
        let id = parse_identifier("id", id)?;
        self.client
            .get::<S::Model>(id)
            .await?
            .map(S::flatten)
            .transpose()
    }

    pub async fn update(&self, id: &str, desired: &S) -> Result<(), Error> {
        let id = parse_identifier("id", id)?;
        let model = desired.expand()?;
        self.client.update(id, &model).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let id = parse_identifier("id", id)?;
        self.client.delete::<S::Model>(id).await
    }

    /// Adopt an existing entity, same as reading it by id
    pub async fn import(&self, id: &str) -> Result<Option<S>, Error> {
        self.read(id).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn desired() -> FeatureStoreState {
        FeatureStoreState {
            name: "customer_store".to_string(),
            description: "".to_string(),
            start_date: "2022-03-01".to_string(),
            end_date: "".to_string(),
            feature_set: "5".to_string(),
            enabled: true,
            destination: vec![DestinationBlock {
                destination: "2".to_string(),
                folder: "".to_string(),
                table_name: "customer_features".to_string(),
            }],
            cluster: "1".to_string(),
            schedule: ScheduleBlocks {
                daily_schedule: vec![],
                cron_schedule: vec![CronScheduleBlock {
                    cron_string: "0 4 * * *".to_string(),
                    fixed_retry_policy: vec![],
                }],
            },
        }
    }

    fn wire() -> serde_json::Value {
        json!({
            "name": "customer_store",
            "description": "",
            "startDate": "2022-03-01",
            "featureSet": 5,
            "enabled": true,
            "destinations": [{"destinationId": 2, "tableName": "customer_features"}],
            "cluster": 1,
            "schedule": {"adt_type": "cron", "cronString": "0 4 * * *", "retryPolicy": {"adt_type": "never"}},
        })
    }

    #[tokio::test]
    async fn feature_store_lifecycle() {
        crate::tests::init_logger();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/feature_store"))
            .and(body_json(wire()))
            .respond_with(ResponseTemplate::new(200).set_body_string("12"))
            .expect(1)
            .mount(&server)
            .await;
        let mut stored = wire();
        stored["id"] = json!(12);
        Mock::given(method("GET"))
            .and(path("/feature_store/12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/feature_store/12"))
            .and(body_json(stored))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/feature_store/12"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = AnamlApiClient::login(&server.uri(), None, None, None).await.unwrap();
        let resource = ManagedResource::<FeatureStoreState>::new(&client);
        let id = resource.create(&desired()).await.unwrap();
        assert_eq!(id, "12");
        assert_eq!(resource.read(&id).await.unwrap(), Some(desired()));
        assert_eq!(resource.import(&id).await.unwrap(), Some(desired()));
        resource.update(&id, &desired()).await.unwrap();
        resource.delete(&id).await.unwrap();
    }

    #[test]
    fn type_names_are_unique() {
        let mut names: Vec<&str> = RESOURCE_TYPES
            .iter()
            .chain(DATA_SOURCE_TYPES.iter())
            .copied()
            .collect();
        assert!(names.iter().all(|n| n.starts_with("anaml_")));
        assert!(RESOURCE_TYPES.contains(&"anaml_feature_store"));
        assert!(DATA_SOURCE_TYPES.contains(&"anaml_cluster"));
        // features are both managed and looked up by name
        assert!(RESOURCE_TYPES.contains(&"anaml_feature"));
        assert!(DATA_SOURCE_TYPES.contains(&"anaml_feature"));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RESOURCE_TYPES.len() + DATA_SOURCE_TYPES.len() - 1);
    }

    #[tokio::test]
    async fn gone_and_invalid_ids() {
        crate::tests::init_logger();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feature/8"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = AnamlApiClient::login(&server.uri(), None, None, None).await.unwrap();
        let resource = ManagedResource::<FeatureState>::new(&client);
        assert_eq!(resource.read("8").await.unwrap(), None);
        assert!(matches!(
            resource.read("feature-8").await.unwrap_err(),
            Error::ValidationError(_)
        ));
        // validation happens before any request is sent
        let mut bad = desired();
        bad.cluster = "".to_string();
        assert!(matches!(
            ManagedResource::new(&client).create(&bad).await.unwrap_err(),
            Error::ValidationError(_)
        ));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }
}
