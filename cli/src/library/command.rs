//! The commands behind each subcommand, written against a [`SnapshotStore`].

use anyhow::Context;
use chrono::{DateTime, Local};
use inquire::Confirm;
use itertools::Itertools;
use tracing::{debug, info};
use zsnap_library::{make_snapshot_name, select_for_deletion};

use crate::library::{
    config::Config,
    constant::{DRY_RUN_MARKER, ZFS_BINARY},
    progress::SearchProgress,
    table::{print_snapshot_table, render_snapshot_json},
    zfs::SnapshotStore,
};

fn announce(config: &Config, command: &str) {
    match config.dry_run {
        true => println!("{} $ {} {}", DRY_RUN_MARKER, ZFS_BINARY, command),
        false => println!("$ {} {}", ZFS_BINARY, command),
    }
}

/// Takes a snapshot named after `now` and returns its name.
pub async fn snapshot<S: SnapshotStore>(
    store: &S,
    config: &Config,
    now: DateTime<Local>,
) -> anyhow::Result<String> {
    let name = make_snapshot_name(&config.key(), &now);

    match config.recursive {
        true => announce(config, &format!("snapshot -r {}", name)),
        false => announce(config, &format!("snapshot {}", name)),
    }

    if !config.dry_run {
        store
            .create_snapshot(&name, config.recursive)
            .await
            .with_context(|| format!("Error taking snapshot {}", name))?;
    }

    Ok(name)
}

/// Snapshots of the configured group, in the order the store reports them.
pub async fn find_group_snapshots<S: SnapshotStore>(
    store: &S,
    config: &Config,
) -> anyhow::Result<Vec<String>> {
    let key = config.key();

    let progress = SearchProgress::start(&key)?;

    let listed = match store.list_snapshots(config.dataset.pool()).await {
        Ok(listed) => listed,
        Err(err) => {
            progress.failed();
            return Err(err.context("Error retrieving snapshots"));
        }
    };

    let snapshots = key.filter_group(listed);

    debug!("{}", progress.found(snapshots.len()));
    for snapshot in &snapshots {
        debug!("  - {}", snapshot);
    }

    Ok(snapshots)
}

fn confirm_destroy(snapshots: &[String]) -> anyhow::Result<bool> {
    let message = format!(
        "Destroy {} snapshots?\n  {}\n",
        snapshots.len(),
        snapshots.iter().join("\n  ")
    );

    Ok(Confirm::new(&message).with_default(false).prompt()?)
}

/// Destroys the group's snapshots the retention settings no longer keep.
///
/// Returns the snapshots that were destroyed, or would have been in dry-run mode.
pub async fn cleanup<S: SnapshotStore>(
    store: &S,
    config: &Config,
    now: DateTime<Local>,
) -> anyhow::Result<Vec<String>> {
    let snapshots = find_group_snapshots(store, config).await?;

    let to_destroy = select_for_deletion(&snapshots, now, config.count, config.age_limit);

    if to_destroy.is_empty() {
        println!("No snapshots to destroy.");
        return Ok(to_destroy);
    }

    if !config.dry_run && !config.assume_yes && !confirm_destroy(&to_destroy)? {
        println!("Cleanup cancelled.");
        return Ok(Vec::new());
    }

    for snapshot in &to_destroy {
        announce(config, &format!("destroy {}", snapshot));

        if !config.dry_run {
            store
                .destroy_snapshot(snapshot)
                .await
                .with_context(|| format!("Error destroying snapshot {}", snapshot))?;
        }
    }

    Ok(to_destroy)
}

/// Takes a snapshot and then cleans up, both as of `now`.
pub async fn rotate<S: SnapshotStore>(
    store: &S,
    config: &Config,
    now: DateTime<Local>,
    take_snapshot: bool,
    run_cleanup: bool,
) -> anyhow::Result<()> {
    match take_snapshot {
        true => {
            snapshot(store, config, now).await?;
        }
        false => info!("Snapshot disabled via flag. Skipping snapshot."),
    }

    match run_cleanup {
        true => {
            cleanup(store, config, now).await?;
        }
        false => info!("Cleanup disabled via flag. Skipping cleanup."),
    }

    Ok(())
}

pub async fn list<S: SnapshotStore>(
    store: &S,
    config: &Config,
    now: DateTime<Local>,
    json: bool,
) -> anyhow::Result<()> {
    let snapshots = find_group_snapshots(store, config)
        .await?
        .into_iter()
        .sorted()
        .collect::<Vec<_>>();

    match json {
        true => println!("{}", render_snapshot_json(&snapshots)?),
        false => print_snapshot_table(&snapshots, now),
    }

    Ok(())
}
