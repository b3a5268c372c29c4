pub mod dataset;
pub mod duration;
pub mod error;
pub mod naming;
pub mod retention;

pub use dataset::DatasetId;
pub use duration::format_duration;
pub use error::ParseError;
pub use naming::{SnapshotKey, make_snapshot_key, make_snapshot_name, parse_snapshot_timestamp};
pub use retention::{RetentionPolicy, select_for_deletion};
