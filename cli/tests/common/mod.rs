use std::cell::RefCell;

use anyhow::anyhow;
use zsnap::library::zfs::SnapshotStore;

/// In-memory stand-in for a zfs pool.
#[derive(Default)]
pub struct FakeStore {
    pub snapshots: RefCell<Vec<String>>,
    pub created: RefCell<Vec<(String, bool)>>,
    pub destroyed: RefCell<Vec<String>>,
    pub broken: Option<String>,
}

impl FakeStore {
    pub fn with_snapshots(names: &[&str]) -> Self {
        FakeStore {
            snapshots: RefCell::new(names.iter().map(|name| name.to_string()).collect()),
            ..Default::default()
        }
    }

    /// Makes destroying `name` fail.
    pub fn breaking_on(self, name: &str) -> Self {
        FakeStore {
            broken: Some(name.to_string()),
            ..self
        }
    }
}

impl SnapshotStore for FakeStore {
    async fn list_snapshots(&self, pool: &str) -> anyhow::Result<Vec<String>> {
        Ok(self
            .snapshots
            .borrow()
            .iter()
            .filter(|name| name.starts_with(&format!("{}/", pool)))
            .cloned()
            .collect())
    }

    async fn create_snapshot(&self, name: &str, recursive: bool) -> anyhow::Result<()> {
        self.created.borrow_mut().push((name.to_string(), recursive));
        self.snapshots.borrow_mut().push(name.to_string());

        Ok(())
    }

    async fn destroy_snapshot(&self, name: &str) -> anyhow::Result<()> {
        if self.broken.as_deref() == Some(name) {
            return Err(anyhow!("dataset is busy"));
        }

        self.destroyed.borrow_mut().push(name.to_string());
        self.snapshots.borrow_mut().retain(|snapshot| snapshot != name);

        Ok(())
    }
}
