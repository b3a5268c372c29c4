/// A zfs dataset within a pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetId {
    pool: String,
    dataset: String,
}

impl DatasetId {
    pub fn new(pool: impl Into<String>, dataset: impl Into<String>) -> Self {
        DatasetId {
            pool: pool.into(),
            dataset: dataset.into(),
        }
    }

    pub fn pool(&self) -> &str {
        &self.pool
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }
}
