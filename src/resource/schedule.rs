use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    utils::{non_empty, validate_cron, validate_iso_duration, validate_time_of_day},
    Error, RetryPolicy, Schedule,
};

/// `daily_schedule` / `cron_schedule` slots, at most one block each and never both
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlocks {
    #[serde(default)]
    pub daily_schedule: Vec<DailyScheduleBlock>,
    #[serde(default)]
    pub cron_schedule: Vec<CronScheduleBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyScheduleBlock {
    /// `HH:MM:SS`, empty for the server default
    #[serde(default)]
    pub start_time_of_day: String,
    #[serde(default)]
    pub fixed_retry_policy: Vec<RetryPolicyBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronScheduleBlock {
    pub cron_string: String,
    #[serde(default)]
    pub fixed_retry_policy: Vec<RetryPolicyBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicyBlock {
    pub backoff: String,
    pub max_attempts: u32,
}

/// Wire schedule to flattened slots
pub fn flatten_schedule(schedule: &Schedule) -> ScheduleBlocks {
    match schedule {
        Schedule::Daily {
            start_time_of_day,
            retry_policy,
        } => ScheduleBlocks {
            daily_schedule: vec![DailyScheduleBlock {
                start_time_of_day: start_time_of_day.clone().unwrap_or_default(),
                fixed_retry_policy: flatten_retry_policy(retry_policy),
            }],
            cron_schedule: vec![],
        },
        Schedule::Cron {
            cron_string,
            retry_policy,
        } => ScheduleBlocks {
            daily_schedule: vec![],
            cron_schedule: vec![CronScheduleBlock {
                cron_string: cron_string.clone(),
                fixed_retry_policy: flatten_retry_policy(retry_policy),
            }],
        },
        Schedule::Never => ScheduleBlocks::default(),
    }
}

/**
 * Flattened slots to wire schedule.
 * Daily wins over cron, cron over never. Schema validation keeps the two slots
 * exclusive, but if both are set anyway the daily slot is used.
 */
pub fn expand_schedule(blocks: &ScheduleBlocks) -> Result<Schedule, Error> {
    if let Some(daily) = single_block("daily_schedule", &blocks.daily_schedule)? {
        if !blocks.cron_schedule.is_empty() {
            warn!("Both daily_schedule and cron_schedule are set, using daily_schedule");
        }
        let start_time_of_day = non_empty(&daily.start_time_of_day);
        if let Some(t) = &start_time_of_day {
            validate_time_of_day("start_time_of_day", t)?;
        }
        return Ok(Schedule::Daily {
            start_time_of_day,
            retry_policy: expand_retry_policy(&daily.fixed_retry_policy)?,
        });
    }

    if let Some(cron) = single_block("cron_schedule", &blocks.cron_schedule)? {
        validate_cron("cron_string", &cron.cron_string)?;
        return Ok(Schedule::Cron {
            cron_string: cron.cron_string.clone(),
            retry_policy: expand_retry_policy(&cron.fixed_retry_policy)?,
        });
    }

    Ok(Schedule::Never)
}

fn flatten_retry_policy(policy: &RetryPolicy) -> Vec<RetryPolicyBlock> {
    match policy {
        RetryPolicy::Fixed {
            backoff,
            max_attempts,
        } => vec![RetryPolicyBlock {
            backoff: backoff.clone(),
            max_attempts: *max_attempts,
        }],
        RetryPolicy::Never => vec![],
    }
}

fn expand_retry_policy(blocks: &[RetryPolicyBlock]) -> Result<RetryPolicy, Error> {
    Ok(match single_block("fixed_retry_policy", blocks)? {
        Some(block) => {
            validate_iso_duration("backoff", &block.backoff)?;
            RetryPolicy::Fixed {
                backoff: block.backoff.clone(),
                max_attempts: block.max_attempts,
            }
        }
        None => RetryPolicy::Never,
    })
}

fn single_block<'a, T>(field: &str, blocks: &'a [T]) -> Result<Option<&'a T>, Error> {
    match blocks {
        [] => Ok(None),
        [block] => Ok(Some(block)),
        _ => Err(Error::ValidationError(format!(
            "`{}` accepts at most one block, got {}",
            field,
            blocks.len()
        ))),
    }
}
