use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::{
    api_client::{ApiResource, Named},
    AnamlApiClient, Cluster, Destination, Error, Feature, Logged, Source,
};

/// Kinds that can be looked up by name from the configuration
pub trait Lookup: ApiResource + Named {
    const TYPE_NAME: &'static str;
}

impl Lookup for Cluster {
    const TYPE_NAME: &'static str = "anaml_cluster";
}

impl Lookup for Destination {
    const TYPE_NAME: &'static str = "anaml_destination";
}

impl Lookup for Source {
    const TYPE_NAME: &'static str = "anaml_source";
}

impl Lookup for Feature {
    const TYPE_NAME: &'static str = "anaml_feature";
}

/// Data source type names handled by this crate
pub const DATA_SOURCE_TYPES: &[&str] = &[
    Cluster::TYPE_NAME,
    Destination::TYPE_NAME,
    Source::TYPE_NAME,
    <Feature as Lookup>::TYPE_NAME,
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedState {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug)]
pub struct DataSource<'a, T> {
    client: &'a AnamlApiClient,
    _kind: PhantomData<T>,
}

impl<'a, T> DataSource<'a, T>
where
    T: Lookup,
{
    pub fn new(client: &'a AnamlApiClient) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    /// Id and state of the entity named `name`, `None` if there is none
    pub async fn read(&self, name: &str) -> Result<Option<(String, NamedState)>, Error> {
        let record = match self.client.find_by_name::<T>(name).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        let id = record
            .id()
            .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field("id"))
            .log()?;
        Ok(Some((
            id.to_string(),
            NamedState {
                name: record.name().to_string(),
                description: record.description().to_string(),
            },
        )))
    }
}
