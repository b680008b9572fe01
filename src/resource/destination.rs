use serde::{Deserialize, Serialize};

use crate::{
    utils::{non_blank, parse_identifier},
    DestinationReference, Error,
};

/// One `destination` block, empty strings are unset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationBlock {
    pub destination: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub table_name: String,
}

pub fn flatten_destinations(destinations: &[DestinationReference]) -> Vec<DestinationBlock> {
    destinations
        .iter()
        .map(|d| DestinationBlock {
            destination: d.destination_id.to_string(),
            folder: d.folder.clone().unwrap_or_default(),
            table_name: d.table_name.clone().unwrap_or_default(),
        })
        .collect()
}

/// Order is kept as written
pub fn expand_destinations(blocks: &[DestinationBlock]) -> Result<Vec<DestinationReference>, Error> {
    blocks
        .iter()
        .map(|b| {
            Ok(DestinationReference {
                destination_id: parse_identifier("destination", &b.destination)?,
                folder: non_blank("folder", &b.folder)?,
                table_name: non_blank("table_name", &b.table_name)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(d: &str, folder: &str, table: &str) -> DestinationBlock {
        DestinationBlock {
            destination: d.to_string(),
            folder: folder.to_string(),
            table_name: table.to_string(),
        }
    }

    #[test]
    fn order_and_fields_survive() {
        let blocks = vec![
            block("9", "", "features_daily"),
            block("2", "exports/customer", ""),
            block("9", "", ""),
        ];
        let refs = expand_destinations(&blocks).unwrap();
        assert_eq!(
            refs.iter().map(|r| r.destination_id).collect::<Vec<_>>(),
            vec![9, 2, 9]
        );
        assert_eq!(refs[0].folder, None);
        assert_eq!(refs[0].table_name.as_deref(), Some("features_daily"));
        assert_eq!(refs[1].folder.as_deref(), Some("exports/customer"));
        assert_eq!(flatten_destinations(&refs), blocks);
        assert_eq!(expand_destinations(&flatten_destinations(&refs)).unwrap(), refs);
    }

    #[test]
    fn empty_list() {
        assert!(expand_destinations(&[]).unwrap().is_empty());
        assert!(flatten_destinations(&[]).is_empty());
    }

    #[test]
    fn bad_identity() {
        let err = expand_destinations(&[block("s3", "", "")]).unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn whitespace_only_names_are_rejected() {
        for b in [block("2", "  ", ""), block("2", "", "\t")] {
            let err = expand_destinations(&[block("1", "out", "t"), b]).unwrap_err();
            assert!(matches!(err, Error::ValidationError(_)));
        }
    }
}
