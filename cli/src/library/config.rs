use chrono::TimeDelta;
use zsnap_library::{DatasetId, SnapshotKey, make_snapshot_key};

use crate::library::cli::{DatasetArgs, RetentionArgs};

/// Everything a command needs to know about one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset: DatasetId,
    pub prefix: String,
    pub dry_run: bool,
    pub recursive: bool,
    pub count: i64,
    pub age_limit: TimeDelta,
    pub assume_yes: bool,
}

impl Config {
    /// A config that takes recursive snapshots and saves every snapshot.
    pub fn new(dataset: DatasetId, prefix: impl Into<String>) -> Self {
        Config {
            dataset,
            prefix: prefix.into(),
            dry_run: false,
            recursive: true,
            count: -1,
            age_limit: TimeDelta::zero(),
            assume_yes: false,
        }
    }

    pub fn from_args(args: &DatasetArgs, dry_run: bool) -> Self {
        Config {
            dry_run,
            ..Config::new(DatasetId::new(&args.pool, &args.dataset), &args.prefix)
        }
    }

    pub fn with_retention(self, retention: &RetentionArgs) -> Self {
        Config {
            count: retention.count,
            age_limit: retention.duration,
            assume_yes: retention.yes,
            ..self
        }
    }

    pub fn with_recursive(self, recursive: bool) -> Self {
        Config { recursive, ..self }
    }

    pub fn key(&self) -> SnapshotKey {
        make_snapshot_key(&self.dataset, &self.prefix)
    }
}
