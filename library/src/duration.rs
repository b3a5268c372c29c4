use chrono::TimeDelta;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
const MINUTES_PER_WEEK: i64 = 7 * MINUTES_PER_DAY;

/// Rounds to the nearest whole minute, halves away from zero.
pub fn round_to_minutes(d: TimeDelta) -> i64 {
    let millis = d.num_milliseconds();

    if millis >= 0 {
        millis.saturating_add(30_000) / 60_000
    } else {
        millis.saturating_sub(30_000) / 60_000
    }
}

/// Renders a duration as `3w 2d 1h 4m`, omitting zero components.
pub fn format_duration(d: TimeDelta) -> String {
    let mut minutes = round_to_minutes(d);
    let mut parts = Vec::new();

    for (size, unit) in [
        (MINUTES_PER_WEEK, 'w'),
        (MINUTES_PER_DAY, 'd'),
        (MINUTES_PER_HOUR, 'h'),
        (1, 'm'),
    ] {
        let amount = minutes / size;
        minutes -= amount * size;

        if amount > 0 {
            parts.push(format!("{amount}{unit}"));
        }
    }

    parts.join(" ")
}
