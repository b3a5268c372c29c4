pub const ZFS_BINARY: &str = "zfs";

pub const DRY_RUN_MARKER: &str = "[Dry Run]";

pub const DISPLAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
