use serde::{Deserialize, Serialize};

use super::Identifier;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub table: Identifier,
    pub select: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub aggregate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub post_aggregate_expr: Option<String>,
    /// The template this feature was instantiated from
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub template: Option<Identifier>,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTemplate {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub table: Identifier,
    pub select: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub aggregate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub post_aggregate_expr: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub entity: Identifier,
    #[serde(default)]
    pub features: Vec<Identifier>,
    #[serde(default)]
    pub labels: Vec<String>,
}
