use serde::{Deserialize, Serialize};

use super::{Identifier, Schedule};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStore {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end_date: Option<String>,
    pub feature_set: Identifier,
    pub enabled: bool,
    #[serde(default)]
    pub destinations: Vec<DestinationReference>,
    pub cluster: Identifier,
    #[serde(default)]
    pub schedule: Schedule,
}

/// Where a feature store writes to, only exists inside a `FeatureStore`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationReference {
    pub destination_id: Identifier,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub table_name: Option<String>,
}
