use serde::{Deserialize, Deserializer, Serialize};

/**
 * When a feature store runs.
 * Unknown or missing tags, and a `null` schedule, deserialize as `Never`.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "adt_type")]
pub enum Schedule {
    #[serde(rename = "daily", rename_all = "camelCase")]
    Daily {
        #[serde(skip_serializing_if = "Option::is_none")]
        start_time_of_day: Option<String>,
        retry_policy: RetryPolicy,
    },
    #[serde(rename = "cron", rename_all = "camelCase")]
    Cron {
        cron_string: String,
        retry_policy: RetryPolicy,
    },
    #[serde(rename = "never")]
    Never,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::Never
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchedule {
    #[serde(rename = "adt_type", default)]
    adt_type: Option<String>,
    #[serde(default)]
    start_time_of_day: Option<String>,
    #[serde(default)]
    cron_string: Option<String>,
    #[serde(default)]
    retry_policy: RetryPolicy,
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Option::<RawSchedule>::deserialize(deserializer)? {
            Some(raw) => raw,
            None => return Ok(Schedule::Never),
        };
        Ok(match raw.adt_type.as_deref() {
            Some("daily") => Schedule::Daily {
                start_time_of_day: raw.start_time_of_day,
                retry_policy: raw.retry_policy,
            },
            Some("cron") => Schedule::Cron {
                cron_string: raw
                    .cron_string
                    .ok_or_else(|| serde::de::Error::missing_field("cronString"))?,
                retry_policy: raw.retry_policy,
            },
            _ => Schedule::Never,
        })
    }
}

/// Same decoding rules as `Schedule`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "adt_type")]
pub enum RetryPolicy {
    #[serde(rename = "fixed", rename_all = "camelCase")]
    Fixed {
        /// ISO-8601 duration, e.g. `PT15M`
        backoff: String,
        max_attempts: u32,
    },
    #[serde(rename = "never")]
    Never,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Never
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRetryPolicy {
    #[serde(rename = "adt_type", default)]
    adt_type: Option<String>,
    #[serde(default)]
    backoff: Option<String>,
    #[serde(default)]
    max_attempts: Option<u32>,
}

impl<'de> Deserialize<'de> for RetryPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Option::<RawRetryPolicy>::deserialize(deserializer)? {
            Some(raw) => raw,
            None => return Ok(RetryPolicy::Never),
        };
        Ok(match raw.adt_type.as_deref() {
            Some("fixed") => RetryPolicy::Fixed {
                backoff: raw
                    .backoff
                    .ok_or_else(|| serde::de::Error::missing_field("backoff"))?,
                max_attempts: raw
                    .max_attempts
                    .ok_or_else(|| serde::de::Error::missing_field("maxAttempts"))?,
            },
            _ => RetryPolicy::Never,
        })
    }
}
