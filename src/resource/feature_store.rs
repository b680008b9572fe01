use serde::{Deserialize, Serialize};

use crate::{
    utils::{non_empty, parse_identifier, validate_date},
    Error, FeatureStore,
};

use super::{
    expand_destinations, expand_schedule, flatten_destinations, flatten_schedule,
    DestinationBlock, Flattened, ScheduleBlocks,
};

/// `anaml_feature_store`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStoreState {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    pub feature_set: String,
    pub enabled: bool,
    #[serde(default)]
    pub destination: Vec<DestinationBlock>,
    pub cluster: String,
    #[serde(flatten)]
    pub schedule: ScheduleBlocks,
}

impl Flattened for FeatureStoreState {
    type Model = FeatureStore;

    const TYPE_NAME: &'static str = "anaml_feature_store";

    fn expand(&self) -> Result<FeatureStore, Error> {
        if self.name.is_empty() {
            return Err(Error::ValidationError("`name` is required".to_string()));
        }
        let start_date = non_empty(&self.start_date);
        if let Some(d) = &start_date {
            validate_date("start_date", d)?;
        }
        let end_date = non_empty(&self.end_date);
        if let Some(d) = &end_date {
            validate_date("end_date", d)?;
        }
        Ok(FeatureStore {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            start_date,
            end_date,
            feature_set: parse_identifier("feature_set", &self.feature_set)?,
            enabled: self.enabled,
            destinations: expand_destinations(&self.destination)?,
            cluster: parse_identifier("cluster", &self.cluster)?,
            schedule: expand_schedule(&self.schedule)?,
        })
    }

    fn flatten(model: FeatureStore) -> Result<Self, Error> {
        Ok(Self {
            name: model.name,
            description: model.description,
            start_date: model.start_date.unwrap_or_default(),
            end_date: model.end_date.unwrap_or_default(),
            feature_set: model.feature_set.to_string(),
            enabled: model.enabled,
            destination: flatten_destinations(&model.destinations),
            cluster: model.cluster.to_string(),
            schedule: flatten_schedule(&model.schedule),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{DestinationReference, RetryPolicy, Schedule};

    #[test]
    fn reads_configuration_shape() {
        let state: FeatureStoreState = serde_json::from_value(json!({
            "name": "churn",
            "feature_set": "4",
            "enabled": false,
            "cluster": "1",
            "destination": [
                {"destination": "3", "folder": "churn"},
                {"destination": "1", "table_name": "churn_features"}
            ],
            "daily_schedule": [{
                "start_time_of_day": "06:00:00",
                "fixed_retry_policy": [{"backoff": "PT30M", "max_attempts": 2}]
            }]
        }))
        .unwrap();

        let model = state.expand().unwrap();
        assert_eq!(model.id, None);
        assert_eq!(model.feature_set, 4);
        assert_eq!(
            model.destinations,
            vec![
                DestinationReference {
                    destination_id: 3,
                    folder: Some("churn".to_string()),
                    table_name: None
                },
                DestinationReference {
                    destination_id: 1,
                    folder: None,
                    table_name: Some("churn_features".to_string())
                },
            ]
        );
        assert_eq!(
            model.schedule,
            Schedule::Daily {
                start_time_of_day: Some("06:00:00".to_string()),
                retry_policy: RetryPolicy::Fixed {
                    backoff: "PT30M".to_string(),
                    max_attempts: 2
                }
            }
        );
        assert_eq!(FeatureStoreState::flatten(model).unwrap(), state);

        let v = serde_json::to_value(&state).unwrap();
        assert_eq!(v["cron_schedule"], json!([]));
        assert_eq!(v["daily_schedule"][0]["start_time_of_day"], "06:00:00");
    }

    #[test]
    fn rejects_bad_fields() {
        let good = FeatureStoreState {
            name: "s".to_string(),
            feature_set: "1".to_string(),
            cluster: "2".to_string(),
            ..Default::default()
        };
        assert_eq!(good.expand().unwrap().schedule, Schedule::Never);

        for bad in [
            FeatureStoreState { name: "".to_string(), ..good.clone() },
            FeatureStoreState { feature_set: "fs".to_string(), ..good.clone() },
            FeatureStoreState { cluster: "".to_string(), ..good.clone() },
            FeatureStoreState { start_date: "yesterday".to_string(), ..good.clone() },
            FeatureStoreState { end_date: "2022-13-01".to_string(), ..good.clone() },
        ] {
            assert!(matches!(bad.expand(), Err(Error::ValidationError(_))), "{:?}", bad);
        }
    }
}
