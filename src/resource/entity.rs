use serde::{Deserialize, Serialize};

use crate::{utils::parse_identifier, Entity, EntityMapping, Error};

use super::{feature::require, Flattened};

/// `anaml_entity`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub default_column: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Flattened for EntityState {
    type Model = Entity;

    const TYPE_NAME: &'static str = "anaml_entity";

    fn expand(&self) -> Result<Entity, Error> {
        require("name", &self.name)?;
        require("default_column", &self.default_column)?;
        Ok(Entity {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            default_column: self.default_column.clone(),
            labels: self.labels.clone(),
        })
    }

    fn flatten(model: Entity) -> Result<Self, Error> {
        Ok(Self {
            name: model.name,
            description: model.description,
            default_column: model.default_column,
            labels: model.labels,
        })
    }
}

/// `anaml_entity_mapping`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMappingState {
    pub from: String,
    pub to: String,
    pub mapping: String,
}

impl Flattened for EntityMappingState {
    type Model = EntityMapping;

    const TYPE_NAME: &'static str = "anaml_entity_mapping";

    fn expand(&self) -> Result<EntityMapping, Error> {
        let from = parse_identifier("from", &self.from)?;
        let to = parse_identifier("to", &self.to)?;
        if from == to {
            return Err(Error::ValidationError(format!(
                "entity mapping must map between two different entities, got {} twice",
                from
            )));
        }
        Ok(EntityMapping {
            id: None,
            from,
            to,
            mapping: parse_identifier("mapping", &self.mapping)?,
        })
    }

    fn flatten(model: EntityMapping) -> Result<Self, Error> {
        Ok(Self {
            from: model.from.to_string(),
            to: model.to.to_string(),
            mapping: model.mapping.to_string(),
        })
    }
}
