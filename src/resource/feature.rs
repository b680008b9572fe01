use serde::{Deserialize, Serialize};

use crate::{
    utils::{non_empty, parse_identifier},
    Error, Feature, FeatureSet, FeatureTemplate,
};

use super::Flattened;

/// `anaml_feature`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureState {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub table: String,
    pub select: String,
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub aggregate: String,
    #[serde(default)]
    pub post_aggregate_expr: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Flattened for FeatureState {
    type Model = Feature;

    const TYPE_NAME: &'static str = "anaml_feature";

    fn expand(&self) -> Result<Feature, Error> {
        require("name", &self.name)?;
        require("select", &self.select)?;
        Ok(Feature {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            table: parse_identifier("table", &self.table)?,
            select: self.select.clone(),
            filter: non_empty(&self.filter),
            aggregate: non_empty(&self.aggregate),
            post_aggregate_expr: non_empty(&self.post_aggregate_expr),
            template: non_empty(&self.template)
                .map(|t| parse_identifier("template", &t))
                .transpose()?,
            labels: self.labels.clone(),
        })
    }

    fn flatten(model: Feature) -> Result<Self, Error> {
        Ok(Self {
            name: model.name,
            description: model.description,
            table: model.table.to_string(),
            select: model.select,
            filter: model.filter.unwrap_or_default(),
            aggregate: model.aggregate.unwrap_or_default(),
            post_aggregate_expr: model.post_aggregate_expr.unwrap_or_default(),
            template: model.template.map(|t| t.to_string()).unwrap_or_default(),
            labels: model.labels,
        })
    }
}

/// `anaml_feature_template`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTemplateState {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub table: String,
    pub select: String,
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub aggregate: String,
    #[serde(default)]
    pub post_aggregate_expr: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Flattened for FeatureTemplateState {
    type Model = FeatureTemplate;

    const TYPE_NAME: &'static str = "anaml_feature_template";

    fn expand(&self) -> Result<FeatureTemplate, Error> {
        require("name", &self.name)?;
        require("select", &self.select)?;
        Ok(FeatureTemplate {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            table: parse_identifier("table", &self.table)?,
            select: self.select.clone(),
            filter: non_empty(&self.filter),
            aggregate: non_empty(&self.aggregate),
            post_aggregate_expr: non_empty(&self.post_aggregate_expr),
            labels: self.labels.clone(),
        })
    }

    fn flatten(model: FeatureTemplate) -> Result<Self, Error> {
        Ok(Self {
            name: model.name,
            description: model.description,
            table: model.table.to_string(),
            select: model.select,
            filter: model.filter.unwrap_or_default(),
            aggregate: model.aggregate.unwrap_or_default(),
            post_aggregate_expr: model.post_aggregate_expr.unwrap_or_default(),
            labels: model.labels,
        })
    }
}

/// `anaml_feature_set`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSetState {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub entity: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Flattened for FeatureSetState {
    type Model = FeatureSet;

    const TYPE_NAME: &'static str = "anaml_feature_set";

    fn expand(&self) -> Result<FeatureSet, Error> {
        require("name", &self.name)?;
        Ok(FeatureSet {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            entity: parse_identifier("entity", &self.entity)?,
            features: self
                .features
                .iter()
                .map(|f| parse_identifier("features", f))
                .collect::<Result<_, _>>()?,
            labels: self.labels.clone(),
        })
    }

    fn flatten(model: FeatureSet) -> Result<Self, Error> {
        Ok(Self {
            name: model.name,
            description: model.description,
            entity: model.entity.to_string(),
            features: model.features.iter().map(|f| f.to_string()).collect(),
            labels: model.labels,
        })
    }
}

pub(super) fn require(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        Err(Error::ValidationError(format!("`{}` is required", field)))
    } else {
        Ok(())
    }
}
