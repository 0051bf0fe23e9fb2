use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::Error;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;
const WEEK_MS: i64 = 604_800_000;

/// Reads the longest numeric prefix of `text`, the way `parseFloat` does.
pub fn parse_price(text: &str) -> Result<f64, Error> {
    let text = text.trim_start();
    if text.starts_with("Infinity") || text.starts_with("+Infinity") {
        return Ok(f64::INFINITY);
    }
    if text.starts_with("-Infinity") {
        return Ok(f64::NEG_INFINITY);
    }

    let candidate_len = text
        .char_indices()
        .find(|(_, c)| !matches!(c, '0'..='9' | '.' | '+' | '-' | 'e' | 'E'))
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    (1..=candidate_len)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
        .ok_or_else(|| Error::InvalidPrice(text.to_string()))
}

pub fn format_price(amount: f64) -> Result<String, Error> {
    if !amount.is_finite() {
        return Err(Error::InvalidPrice(amount.to_string()));
    }

    Ok(format!("¥{}", to_fixed_2(amount)))
}

/// Two decimals, exact halves rounded away from zero as `toFixed(2)` does.
fn to_fixed_2(amount: f64) -> String {
    let magnitude = amount.abs();

    // a value sitting exactly on half a cent is an odd number of eighths
    let eighths = magnitude * 8.0;
    if magnitude < (1u64 << 50) as f64 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (magnitude * 100.0).ceil() as u64;
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }

    format!("{:.2}", amount)
}

pub fn format_price_str(text: &str) -> Result<String, Error> {
    format_price(parse_price(text)?)
}

/// Parses timestamps as the server renders them. Timestamps without an
/// offset are taken in `local`, at the offset in effect on that day; bare
/// dates are UTC midnight.
pub fn parse_datetime<Tz: TimeZone>(text: &str, local: &Tz) -> Result<DateTime<FixedOffset>, Error> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date);
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return local
                .from_local_datetime(&naive)
                .earliest()
                .map(|date| date.fixed_offset())
                .ok_or_else(|| Error::InvalidDate(text.to_string()));
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
        .ok_or_else(|| Error::InvalidDate(text.to_string()))
}

/// Buckets the age of `then` relative to `now`. Anything a week or older is
/// shown as a short date in `local`.
pub fn format_relative<Tz>(then: DateTime<FixedOffset>, now: DateTime<Utc>, local: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let diff = (now - then.with_timezone(&Utc)).num_milliseconds();

    if diff < MINUTE_MS {
        "刚刚".to_string()
    } else if diff < HOUR_MS {
        format!("{}分钟前", diff / MINUTE_MS)
    } else if diff < DAY_MS {
        format!("{}小时前", diff / HOUR_MS)
    } else if diff < WEEK_MS {
        format!("{}天前", diff / DAY_MS)
    } else {
        then.with_timezone(local).format("%Y/%-m/%-d").to_string()
    }
}

#[cfg(test)]
mod test {
    use chrono::{Duration, LocalResult, NaiveDate};

    use super::*;

    fn cst() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    /// UTC+0 until 2024-03-31 01:00 UTC, UTC+1 afterwards.
    #[derive(Debug, Clone, Copy)]
    struct SummerTime;

    impl SummerTime {
        fn offset_at(utc: &NaiveDateTime) -> FixedOffset {
            let switch = NaiveDate::from_ymd_opt(2024, 3, 31)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap();
            let hours = if *utc < switch { 0 } else { 1 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        }
    }

    impl TimeZone for SummerTime {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            SummerTime
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            // no local times near the switch are used below
            LocalResult::Single(Self::offset_at(local))
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_at(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_at(utc)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> DateTime<FixedOffset> {
        (now() - duration).fixed_offset()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.0).unwrap(), "¥12.00");
        assert_eq!(format_price(0.5).unwrap(), "¥0.50");
        assert_eq!(format_price(1999.99).unwrap(), "¥1999.99");
        assert!(format_price(f64::NAN).is_err());
    }

    #[test]
    fn test_format_price_rounds_half_cents_up() {
        assert_eq!(format_price(0.125).unwrap(), "¥0.13");
        assert_eq!(format_price(10.125).unwrap(), "¥10.13");
        assert_eq!(format_price(2.375).unwrap(), "¥2.38");
        assert_eq!(format_price(-0.125).unwrap(), "¥-0.13");
        // 1.005 is stored slightly below the half cent
        assert_eq!(format_price(1.005).unwrap(), "¥1.00");
        assert_eq!(format_price(2.5).unwrap(), "¥2.50");
    }

    #[test]
    fn test_parse_price_prefix() {
        assert_eq!(parse_price("12.5").unwrap(), 12.5);
        assert_eq!(parse_price("  35元").unwrap(), 35.0);
        assert_eq!(parse_price("1e2").unwrap(), 100.0);
        assert_eq!(parse_price("3e").unwrap(), 3.0);
        assert_eq!(parse_price("-4.25abc").unwrap(), -4.25);
        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
    }

    #[test]
    fn test_format_price_str() {
        assert_eq!(format_price_str("88").unwrap(), "¥88.00");
        assert!(matches!(format_price_str("Infinity"), Err(Error::InvalidPrice(_))));
    }

    #[test]
    fn test_relative_buckets() {
        assert_eq!(format_relative(ago(Duration::seconds(59)), now(), &cst()), "刚刚");
        assert_eq!(format_relative(ago(Duration::seconds(60)), now(), &cst()), "1分钟前");
        assert_eq!(format_relative(ago(Duration::minutes(59)), now(), &cst()), "59分钟前");
        assert_eq!(format_relative(ago(Duration::hours(1)), now(), &cst()), "1小时前");
        assert_eq!(format_relative(ago(Duration::hours(23)), now(), &cst()), "23小时前");
        assert_eq!(format_relative(ago(Duration::days(1)), now(), &cst()), "1天前");
        assert_eq!(format_relative(ago(Duration::days(6)), now(), &cst()), "6天前");
    }

    #[test]
    fn test_future_is_just_now() {
        assert_eq!(format_relative(ago(Duration::hours(-2)), now(), &cst()), "刚刚");
    }

    #[test]
    fn test_old_dates_use_local_calendar() {
        // 2024-03-01 20:00 UTC is already March 2nd in UTC+8
        let then = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap().fixed_offset();
        assert_eq!(format_relative(then, now(), &cst()), "2024/3/2");
    }

    #[test]
    fn test_parse_datetime() {
        let rfc = parse_datetime("2024-03-10T11:00:00Z", &cst()).unwrap();
        assert_eq!(rfc, Utc.with_ymd_and_hms(2024, 3, 10, 11, 0, 0).unwrap());

        let naive = parse_datetime("2024-03-10 19:30:00.123456", &cst()).unwrap();
        assert_eq!(
            naive.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 3, 10, 11, 30, 0).unwrap() + Duration::microseconds(123456)
        );

        let iso = parse_datetime("2024-03-10T19:30:00", &cst()).unwrap();
        assert_eq!(format_relative(iso, now(), &cst()), "30分钟前");

        let date = parse_datetime("2024-03-01", &cst()).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());

        assert!(parse_datetime("yesterday", &cst()).is_err());
    }

    #[test]
    fn test_parse_datetime_without_seconds() {
        let spaced = parse_datetime("2024-03-10 19:30", &cst()).unwrap();
        assert_eq!(spaced, Utc.with_ymd_and_hms(2024, 3, 10, 11, 30, 0).unwrap());

        let iso = parse_datetime("2024-03-10T19:30", &cst()).unwrap();
        assert_eq!(iso, spaced);
    }

    #[test]
    fn test_offset_follows_the_timestamp() {
        let after_switch = Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap();

        // winter time still applies to a date before the switch
        let then = Utc.with_ymd_and_hms(2024, 3, 30, 23, 30, 0).unwrap().fixed_offset();
        assert_eq!(format_relative(then, after_switch, &SummerTime), "2024/3/30");

        let then = Utc.with_ymd_and_hms(2024, 3, 31, 23, 30, 0).unwrap().fixed_offset();
        assert_eq!(format_relative(then, after_switch, &SummerTime), "2024/4/1");

        let winter = parse_datetime("2024-03-20 12:00", &SummerTime).unwrap();
        assert_eq!(winter, Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap());

        let summer = parse_datetime("2024-04-09 12:00", &SummerTime).unwrap();
        assert_eq!(summer, Utc.with_ymd_and_hms(2024, 4, 9, 11, 0, 0).unwrap());
        assert_eq!(format_relative(summer, after_switch, &SummerTime), "1天前");
    }
}
