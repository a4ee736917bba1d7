// src/utils/format.rs

const MINUTE: f64 = 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const MONTH: f64 = DAY * 31.0;
const YEAR: f64 = MONTH * 12.0;
const CENTURY: f64 = YEAR * 100.0;

// Format a duration in seconds using the coarsest unit that is at least 1
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 1.0 {
        return "less than a second".to_string();
    }

    // (unit size, next unit size, name)
    let (size, next, unit) = if seconds < MINUTE {
        (1.0, MINUTE, "second")
    } else if seconds < HOUR {
        (MINUTE, HOUR, "minute")
    } else if seconds < DAY {
        (HOUR, DAY, "hour")
    } else if seconds < MONTH {
        (DAY, MONTH, "day")
    } else if seconds < YEAR {
        (MONTH, YEAR, "month")
    } else if seconds < CENTURY {
        (YEAR, CENTURY, "year")
    } else {
        return "centuries".to_string();
    };

    let rounded = (seconds / size).round();
    // 59.6 seconds reads as 1 minute, not 60 seconds
    if rounded * size >= next {
        return format_duration(next);
    }

    let rounded = rounded as u64;
    if rounded == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", rounded, unit)
    }
}
