use anyhow::{Context, anyhow};
use tokio::process::Command;

use crate::library::constant::ZFS_BINARY;

/// The storage system that actually holds the snapshots.
#[allow(async_fn_in_trait)]
pub trait SnapshotStore {
    /// Names of every snapshot in the pool, including those of child datasets.
    async fn list_snapshots(&self, pool: &str) -> anyhow::Result<Vec<String>>;

    async fn create_snapshot(&self, name: &str, recursive: bool) -> anyhow::Result<()>;

    async fn destroy_snapshot(&self, name: &str) -> anyhow::Result<()>;
}

/// Drives the `zfs` executable.
pub struct Zfs {
    binary: String,
}

impl Default for Zfs {
    fn default() -> Self {
        Zfs::new(ZFS_BINARY)
    }
}

impl Zfs {
    pub fn new(binary: impl Into<String>) -> Self {
        Zfs {
            binary: binary.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        tracing::debug!("Executing {} {}", self.binary, args.join(" "));

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .with_context(|| format!("Unable to execute {}", self.binary))?;

        if !output.status.success() {
            return Err(anyhow!(
                "{} {} failed ({}): {}",
                self.binary,
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("{} produced non UTF-8 output", self.binary))
    }
}

impl SnapshotStore for Zfs {
    async fn list_snapshots(&self, pool: &str) -> anyhow::Result<Vec<String>> {
        let stdout = self
            .run(&["list", "-H", "-o", "name", "-t", "snapshot", "-r", pool])
            .await?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    async fn create_snapshot(&self, name: &str, recursive: bool) -> anyhow::Result<()> {
        let args = match recursive {
            true => vec!["snapshot", "-r", name],
            false => vec!["snapshot", name],
        };

        self.run(&args).await?;

        Ok(())
    }

    async fn destroy_snapshot(&self, name: &str) -> anyhow::Result<()> {
        self.run(&["destroy", name]).await?;

        Ok(())
    }
}
