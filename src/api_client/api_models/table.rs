use serde::{Deserialize, Serialize};

use super::Identifier;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub definition: TableDefinition,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// A table either reads a source directly, or is a SQL view over other tables
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "adt_type")]
pub enum TableDefinition {
    #[serde(rename = "root", rename_all = "camelCase")]
    Root {
        source: SourceReference,
        #[serde(default)]
        entities: Vec<EntityColumn>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        timestamp_column: Option<String>,
    },
    #[serde(rename = "view", rename_all = "camelCase")]
    View {
        expression: String,
        #[serde(default)]
        sources: Vec<Identifier>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReference {
    pub source_id: Identifier,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub table_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityColumn {
    pub entity: Identifier,
    pub column: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tag_sits_beside_common_fields() {
        let t: Table = serde_json::from_value(json!({
            "id": 3,
            "name": "transactions_view",
            "description": "",
            "adt_type": "view",
            "expression": "select * from transactions",
            "sources": [1, 2],
        }))
        .unwrap();
        assert_eq!(t.id, Some(3));
        assert_eq!(
            t.definition,
            TableDefinition::View {
                expression: "select * from transactions".to_string(),
                sources: vec![1, 2]
            }
        );
        assert!(t.labels.is_empty());

        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["adt_type"], "view");
        assert_eq!(v["sources"], json!([1, 2]));
    }
}
