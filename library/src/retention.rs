//! Retention policies and selection of snapshots to destroy.

use chrono::{DateTime, Local, TimeDelta};
use itertools::Itertools;
use tracing::{info, warn};

use crate::{
    duration::{format_duration, round_to_minutes},
    error::ParseError,
    naming::parse_snapshot_timestamp,
};

/// How many snapshots of a group survive a cleanup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Keep the `n` most recent snapshots. Zero deletes the whole group.
    KeepCount(usize),
    /// Keep snapshots taken within the duration.
    KeepDuration(TimeDelta),
    KeepAll,
}

impl RetentionPolicy {
    /// Resolves the sentinel-style limits given on the command line.
    ///
    /// A negative `count` is unset. An `age_limit` only counts as set when it rounds to more than one minute. A set
    /// count always wins over a set age limit.
    pub fn from_limits(count: i64, age_limit: TimeDelta) -> Self {
        let age_limit_set = is_age_limit_set(age_limit);

        match usize::try_from(count) {
            Ok(count) => {
                if age_limit_set {
                    info!(
                        "Ignoring save duration of {} because save count of {} specified.",
                        format_duration(age_limit),
                        count
                    );
                }

                RetentionPolicy::KeepCount(count)
            }
            Err(_) if age_limit_set => RetentionPolicy::KeepDuration(age_limit),
            Err(_) => RetentionPolicy::KeepAll,
        }
    }

    /// Picks the snapshots this policy retires. Nothing is destroyed here.
    pub fn select(&self, snapshots: &[String], now: DateTime<Local>) -> Vec<String> {
        match *self {
            RetentionPolicy::KeepCount(0) => {
                info!("Deleting all {} snapshots.", snapshots.len());
                snapshots.to_vec()
            }
            RetentionPolicy::KeepCount(count) => {
                info!("Saving the last {} snapshots.", count);

                let excess = snapshots.len().saturating_sub(count);

                snapshots.iter().sorted().take(excess).cloned().collect()
            }
            RetentionPolicy::KeepDuration(age_limit) => {
                info!("Saving last {} of snapshots.", format_duration(age_limit));

                let Some(cutoff) = now.checked_sub_signed(age_limit) else {
                    return Vec::new();
                };

                snapshots
                    .iter()
                    .filter(|snapshot| match parse_snapshot_timestamp(snapshot) {
                        Ok(taken_at) => taken_at < cutoff,
                        Err(err @ ParseError::Malformed(_)) => {
                            warn!("Skipping snapshot with invalid date string: {}", err);
                            false
                        }
                        Err(err @ ParseError::InvalidDate { .. }) => {
                            warn!("Skipping snapshot, error parsing date: {}", err);
                            false
                        }
                    })
                    .cloned()
                    .collect()
            }
            RetentionPolicy::KeepAll => {
                info!("Saving all snapshots.");
                Vec::new()
            }
        }
    }
}

pub fn is_age_limit_set(age_limit: TimeDelta) -> bool {
    round_to_minutes(age_limit) > 1
}

/// Chooses which snapshots of one group to destroy.
///
/// `snapshots` must already be filtered to the group. `count` is negative when unset, and `age_limit` is ignored
/// unless it rounds to more than a minute. Entries whose timestamp cannot be parsed are skipped by age-based
/// selection, never reported as an error.
pub fn select_for_deletion(
    snapshots: &[String],
    now: DateTime<Local>,
    count: i64,
    age_limit: TimeDelta,
) -> Vec<String> {
    if snapshots.is_empty() {
        info!("Skipping snapshot selection because no snapshots found.");
        return Vec::new();
    }

    RetentionPolicy::from_limits(count, age_limit).select(snapshots, now)
}
