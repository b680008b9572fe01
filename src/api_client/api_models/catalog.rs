use serde::{Deserialize, Serialize};

use super::Identifier;

/// Compute cluster features are generated on
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Storage a feature store can write to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Storage tables are read from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
