use serde::{Deserialize, Serialize};

use super::Identifier;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub default_column: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Maps keys of entity `from` onto entity `to` through the feature `mapping`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMapping {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub from: Identifier,
    pub to: Identifier,
    pub mapping: Identifier,
}
