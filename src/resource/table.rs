use serde::{Deserialize, Serialize};

use crate::{
    utils::{non_blank, non_empty, parse_identifier},
    EntityColumn, Error, SourceReference, Table, TableDefinition,
};

use super::{feature::require, Flattened};

/// `anaml_table`, either a `source` block or an `expression` over `sources`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: Vec<TableSourceBlock>,
    #[serde(default)]
    pub entities: Vec<EntityColumnBlock>,
    #[serde(default)]
    pub timestamp_column: String,
    #[serde(default)]
    pub expression: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSourceBlock {
    pub source: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub table_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityColumnBlock {
    pub entity: String,
    pub column: String,
}

impl TableState {
    fn expand_definition(&self) -> Result<TableDefinition, Error> {
        match (self.source.as_slice(), self.expression.is_empty()) {
            ([source], true) => Ok(TableDefinition::Root {
                source: SourceReference {
                    source_id: parse_identifier("source", &source.source)?,
                    folder: non_blank("folder", &source.folder)?,
                    table_name: non_blank("table_name", &source.table_name)?,
                },
                entities: self
                    .entities
                    .iter()
                    .map(|e| {
                        Ok(EntityColumn {
                            entity: parse_identifier("entity", &e.entity)?,
                            column: e.column.clone(),
                        })
                    })
                    .collect::<Result<_, Error>>()?,
                timestamp_column: non_empty(&self.timestamp_column),
            }),
            ([], false) => Ok(TableDefinition::View {
                expression: self.expression.clone(),
                sources: self
                    .sources
                    .iter()
                    .map(|s| parse_identifier("sources", s))
                    .collect::<Result<_, _>>()?,
            }),
            ([], true) => Err(Error::ValidationError(
                "table needs either a `source` block or an `expression`".to_string(),
            )),
            ([_], false) => Err(Error::ValidationError(
                "`source` conflicts with `expression`".to_string(),
            )),
            (blocks, _) => Err(Error::ValidationError(format!(
                "`source` accepts at most one block, got {}",
                blocks.len()
            ))),
        }
    }
}

impl Flattened for TableState {
    type Model = Table;

    const TYPE_NAME: &'static str = "anaml_table";

    fn expand(&self) -> Result<Table, Error> {
        require("name", &self.name)?;
        Ok(Table {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            definition: self.expand_definition()?,
            labels: self.labels.clone(),
        })
    }

    fn flatten(model: Table) -> Result<Self, Error> {
        let mut state = Self {
            name: model.name,
            description: model.description,
            labels: model.labels,
            ..Default::default()
        };
        match model.definition {
            TableDefinition::Root {
                source,
                entities,
                timestamp_column,
            } => {
                state.source = vec![TableSourceBlock {
                    source: source.source_id.to_string(),
                    folder: source.folder.unwrap_or_default(),
                    table_name: source.table_name.unwrap_or_default(),
                }];
                state.entities = entities
                    .into_iter()
                    .map(|e| EntityColumnBlock {
                        entity: e.entity.to_string(),
                        column: e.column,
                    })
                    .collect();
                state.timestamp_column = timestamp_column.unwrap_or_default();
            }
            TableDefinition::View {
                expression,
                sources,
            } => {
                state.expression = expression;
                state.sources = sources.iter().map(|s| s.to_string()).collect();
            }
        }
        Ok(state)
    }
}
