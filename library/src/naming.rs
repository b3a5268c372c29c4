//! Snapshot key and name encoding.
//!
//! A snapshot name is `<pool>/<dataset>@[<prefix>]<pool>-<dataset>-<YYYYMMDDhhmmss>`. Everything before the
//! final hyphen is the [`SnapshotKey`] shared by a retention group, the 14 digits after it are the local creation
//! time. Names within a group sort lexicographically in creation order.

use std::{fmt, sync::LazyLock};

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use regex::Regex;

use crate::{dataset::DatasetId, error::ParseError};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

static SNAPSHOT_TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-([0-9]{4})([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{2})$")
        .expect("Failed to compile snapshot timestamp regex")
});

/// Identifies a group of snapshots taken for the same pool, dataset and prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey(String);

impl SnapshotKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `name` was taken under this key.
    ///
    /// The part after `<key>-` never contains a hyphen, so a group whose prefix extends this key
    /// (`p/d@p-d-p-d-<ts>` under `p/d@p-d`) is not a member.
    pub fn owns(&self, name: &str) -> bool {
        name.strip_prefix(self.0.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|suffix| !suffix.contains('-'))
    }

    /// Keeps the names belonging to this group, in their original order.
    pub fn filter_group<I, S>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(Into::into)
            .filter(|name| self.owns(name))
            .collect()
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SnapshotKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn make_snapshot_key(id: &DatasetId, prefix: &str) -> SnapshotKey {
    SnapshotKey(format!(
        "{pool}/{dataset}@{prefix}{pool}-{dataset}",
        pool = id.pool(),
        dataset = id.dataset(),
    ))
}

pub fn make_snapshot_name(key: &SnapshotKey, timestamp: &DateTime<Local>) -> String {
    format!("{}-{}", key, timestamp.format(TIMESTAMP_FORMAT))
}

/// Recovers the local creation time encoded at the end of a snapshot name.
pub fn parse_snapshot_timestamp(name: &str) -> Result<DateTime<Local>, ParseError> {
    let captures = SNAPSHOT_TIMESTAMP_REGEX
        .captures(name)
        .ok_or_else(|| ParseError::Malformed(name.to_string()))?;

    let field = |i: usize| captures[i].parse::<u32>().unwrap_or(u32::MAX);

    let invalid = || ParseError::InvalidDate {
        name: name.to_string(),
        timestamp: captures[0][1..].to_string(),
    };

    let naive = NaiveDate::from_ymd_opt(field(1) as i32, field(2), field(3))
        .and_then(|date| date.and_hms_opt(field(4), field(5), field(6)))
        .ok_or_else(invalid)?;

    // Ambiguous wall-clock times (DST fall back) resolve to the earlier instant.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(invalid)
}
