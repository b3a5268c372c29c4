use chrono::{DateTime, Local, TimeDelta};
use console::style;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{Style, Theme},
};
use zsnap_library::{format_duration, parse_snapshot_timestamp};

use crate::library::constant::DISPLAY_DATETIME_FORMAT;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct SnapshotRecord {
    pub name: String,
    /// RFC 3339 local time, absent when the name carries no valid timestamp.
    pub timestamp: Option<String>,
}

impl SnapshotRecord {
    pub fn new(name: &str) -> Self {
        SnapshotRecord {
            name: name.to_string(),
            timestamp: parse_snapshot_timestamp(name)
                .ok()
                .map(|taken_at| taken_at.to_rfc3339()),
        }
    }
}

pub fn render_snapshot_json(snapshot_names: &[String]) -> anyhow::Result<String> {
    let records = snapshot_names
        .iter()
        .map(|name| SnapshotRecord::new(name))
        .collect::<Vec<_>>();

    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn render_snapshot_table(snapshot_names: &[String], now: DateTime<Local>) -> String {
    let header = ["Snapshot Name", "Local Datetime", "Age"]
        .iter()
        .map(|s| style(s).green().bold().to_string())
        .collect::<Vec<String>>();

    let mut builder = Builder::default();
    builder.push_record(header);

    for snapshot_name in snapshot_names {
        let (local_datetime, age) = match parse_snapshot_timestamp(snapshot_name) {
            Ok(taken_at) => (
                taken_at.format(DISPLAY_DATETIME_FORMAT).to_string(),
                match now - taken_at {
                    age if age < TimeDelta::zero() => "-".to_string(),
                    age => match format_duration(age) {
                        age if age.is_empty() => "<1m".to_string(),
                        age => age,
                    },
                },
            ),
            Err(_) => ("Invalid".to_string(), "-".to_string()),
        };

        builder.push_record([snapshot_name.clone(), local_datetime, age]);
    }

    let mut table = builder.build();

    let mut style = Theme::from_style(Style::markdown());
    style.remove_borders_horizontal();

    table.with(style);

    table.to_string()
}

pub fn print_snapshot_table(snapshot_names: &[String], now: DateTime<Local>) {
    println!("{}", render_snapshot_table(snapshot_names, now));
}
