use chrono::TimeDelta;
use clap::{Args, Parser, Subcommand};
use indoc::indoc;

/// A CLI tool for taking and rotating zfs snapshots.
#[derive(Parser, Debug)]
#[command(name = "zsnap", version)]
#[command(about = "ZFS Snapshot Rotation Tool", long_about = None)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Print the zfs commands without executing them.
    #[arg(long, global = true, default_value_t = false)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Name of the zfs pool.
    #[arg(long, short)]
    pub pool: String,

    /// Name of the zfs dataset within the pool.
    #[arg(long, short)]
    pub dataset: String,

    /// Prefix placed in front of the snapshot name.
    #[arg(long, default_value = "")]
    pub prefix: String,
}

#[derive(Args, Debug, Clone)]
pub struct RetentionArgs {
    /// Number of snapshots to save. Negative saves all snapshots. Overrides duration.
    #[arg(long, short, default_value_t = -1, allow_negative_numbers = true)]
    pub count: i64,

    #[arg(
        long,
        default_value = "0s",
        value_parser = parse_age_limit,
        help = "Length of time to save snapshots. Overridden by count.",
        long_help = indoc! {"
            Length of time to save snapshots, e.g. `72h` or `1w 2d`.

            Snapshots older than now - duration are destroyed. Durations of a
            minute or less save snapshots indefinitely. Overridden by count.
        "}
    )]
    pub duration: TimeDelta,

    /// Destroy snapshots without asking for confirmation.
    #[arg(long, short, default_value_t = false)]
    pub yes: bool,
}

/// Subcommands for the zsnap tool.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take a snapshot of a dataset.
    Snapshot {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Snapshot only the dataset itself, not its descendants.
        #[arg(long, default_value_t = false)]
        no_recursive: bool,
    },
    /// Destroy old snapshots of a dataset.
    Cleanup {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[command(flatten)]
        retention: RetentionArgs,
    },
    /// List the snapshots of a dataset.
    List {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Print the snapshots as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Take a snapshot, then destroy old snapshots.
    Rotate {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[command(flatten)]
        retention: RetentionArgs,

        /// Snapshot only the dataset itself, not its descendants.
        #[arg(long, default_value_t = false)]
        no_recursive: bool,

        #[arg(long, default_value_t = false)]
        skip_snapshot: bool,

        #[arg(long, default_value_t = false)]
        skip_cleanup: bool,
    },
}

pub fn parse_age_limit(value: &str) -> anyhow::Result<TimeDelta> {
    let duration = humantime::parse_duration(value)?;

    Ok(TimeDelta::from_std(duration)?)
}
