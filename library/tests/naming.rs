use anyhow::Result;
use chrono::{Local, TimeZone, Timelike};
use zsnap_library::{
    DatasetId, ParseError, make_snapshot_key, make_snapshot_name, parse_snapshot_timestamp,
};

#[test]
fn test_make_snapshot_key_without_prefix() {
    let key = make_snapshot_key(&DatasetId::new("pool", "dataset"), "");

    assert_eq!(key.as_str(), "pool/dataset@pool-dataset");
}

#[test]
fn test_make_snapshot_key_with_prefix() {
    let key = make_snapshot_key(&DatasetId::new("pool", "dataset"), "prefix-");

    assert_eq!(key.as_str(), "pool/dataset@prefix-pool-dataset");
}

#[test]
fn test_make_snapshot_name_uses_24_hour_clock() {
    let key = make_snapshot_key(&DatasetId::new("p", "d"), "");
    let taken_at = Local.with_ymd_and_hms(2021, 3, 11, 20, 5, 0).unwrap();

    assert_eq!(make_snapshot_name(&key, &taken_at), "p/d@p-d-20210311200500");
}

#[test]
fn test_parse_snapshot_timestamp() -> Result<()> {
    let parsed = parse_snapshot_timestamp("p/d@p-d-20210311200500")?;

    assert_eq!(parsed, Local.with_ymd_and_hms(2021, 3, 11, 20, 5, 0).unwrap());

    Ok(())
}

#[test]
fn test_name_round_trip_truncates_to_seconds() -> Result<()> {
    let key = make_snapshot_key(&DatasetId::new("tank", "home"), "daily-");
    let taken_at = Local.with_ymd_and_hms(2024, 7, 4, 9, 30, 15).unwrap() + chrono::TimeDelta::milliseconds(750);

    let parsed = parse_snapshot_timestamp(&make_snapshot_name(&key, &taken_at))?;

    assert_eq!(parsed, taken_at.with_nanosecond(0).unwrap());

    Ok(())
}

#[test]
fn test_parse_missing_timestamp_is_malformed() {
    for name in [
        "p/d@p-d",
        "p/d@p-d-",
        "p/d@p-d-2021031120050",
        "p/d@p-d-202103112005000",
        "p/d@p-d-20210311200500x",
        "p/d@p-d20210311200500",
    ] {
        assert!(
            matches!(parse_snapshot_timestamp(name), Err(ParseError::Malformed(_))),
            "expected malformed: {}",
            name
        );
    }
}

#[test]
fn test_parse_impossible_date_is_invalid() {
    for name in [
        "p/d@p-d-20211311200500",
        "p/d@p-d-20210230200500",
        "p/d@p-d-20210311250500",
        "p/d@p-d-20210311206000",
    ] {
        assert!(
            matches!(
                parse_snapshot_timestamp(name),
                Err(ParseError::InvalidDate { .. })
            ),
            "expected invalid date: {}",
            name
        );
    }
}

#[test]
fn test_filter_group_keeps_members_in_order() {
    let key = make_snapshot_key(&DatasetId::new("p", "d"), "");

    let members = key.filter_group([
        "p/d@p-d-20210311200500",
        "p/d@hourly-p-d-20210311200500",
        "p/other@p-other-20210311200500",
        "p/d@p-d-20210310200500",
    ]);

    assert_eq!(
        members,
        vec!["p/d@p-d-20210311200500", "p/d@p-d-20210310200500"]
    );
}

#[test]
fn test_filter_group_excludes_group_with_extending_prefix() {
    let key = make_snapshot_key(&DatasetId::new("p", "d"), "");

    let members = key.filter_group(["p/d@p-d-20210311200500", "p/d@p-d-p-d-20210301200500"]);

    assert_eq!(members, vec!["p/d@p-d-20210311200500"]);
}
