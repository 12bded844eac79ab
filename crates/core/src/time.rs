//! NTP timestamp helpers for SDP (RFC 4566 §5.2, §5.9, §5.10).
//!
//! SDP carries times as seconds since the NTP epoch (1900-01-01 00:00 UTC),
//! not the Unix epoch. The `o=` session id is conventionally seeded from
//! the current NTP time, and `t=` / `r=` lines use the same clock.
//!
//! ```text
//! 1900-01-01                 1970-01-01                      now
//!     |<---- 2_208_988_800 s ---->|<------ unix seconds ------>|
//!     |<------------------- NTP seconds ---------------------->|
//! ```
//!
//! Only whole seconds are kept. The 32-bit NTP fraction used by RTCP sender
//! reports has no place in SDP text.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds between the NTP epoch (1900) and the Unix epoch (1970).
pub const NTP_EPOCH_OFFSET: u64 = 2_208_988_800;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Current wall-clock time as whole NTP seconds.
///
/// A system clock set before 1970 is treated as the Unix epoch.
pub fn current_ntp_time() -> u64 {
    let unix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO);
    unix.as_secs() + NTP_EPOCH_OFFSET
}

/// Convert an instant to whole NTP seconds.
///
/// `None` maps to `0`, which SDP uses to mean "unbounded" in `t=` lines.
/// Sub-second precision is truncated toward zero. Instants before 1900 have
/// no NTP era-0 representation and saturate to `0`.
pub fn to_ntp_time(instant: Option<SystemTime>) -> u64 {
    let Some(instant) = instant else {
        return 0;
    };
    match instant.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs() + NTP_EPOCH_OFFSET,
        Err(before) => NTP_EPOCH_OFFSET.saturating_sub(before.duration().as_secs()),
    }
}

/// Convert whole NTP seconds back to an instant.
///
/// `0` maps to `None`. Values below [`NTP_EPOCH_OFFSET`] yield instants
/// before 1970.
pub fn from_ntp_time(ntp: u64) -> Option<SystemTime> {
    if ntp == 0 {
        return None;
    }
    if ntp >= NTP_EPOCH_OFFSET {
        UNIX_EPOCH.checked_add(Duration::from_secs(ntp - NTP_EPOCH_OFFSET))
    } else {
        UNIX_EPOCH.checked_sub(Duration::from_secs(NTP_EPOCH_OFFSET - ntp))
    }
}

/// Format a duration in the SDP compact time notation (RFC 4566 §5.10).
///
/// The largest unit that divides the value evenly is used: `d`, `h`, `m`,
/// otherwise plain seconds. Units are never combined, so `90` stays `"90"`
/// rather than `"1m30"`. Negative values follow the same rules with the
/// sign carried (`-3600` is `"-1h"`).
pub fn compact_duration(seconds: i64) -> String {
    if seconds != 0 {
        if seconds % SECS_PER_DAY == 0 {
            return format!("{}d", seconds / SECS_PER_DAY);
        } else if seconds % SECS_PER_HOUR == 0 {
            return format!("{}h", seconds / SECS_PER_HOUR);
        } else if seconds % SECS_PER_MINUTE == 0 {
            return format!("{}m", seconds / SECS_PER_MINUTE);
        }
    }
    seconds.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_zero() {
        assert_eq!(to_ntp_time(None), 0);
        assert_eq!(from_ntp_time(0), None);
    }

    #[test]
    fn unix_epoch_is_offset() {
        assert_eq!(to_ntp_time(Some(UNIX_EPOCH)), NTP_EPOCH_OFFSET);
        assert_eq!(from_ntp_time(NTP_EPOCH_OFFSET), Some(UNIX_EPOCH));
    }

    #[test]
    fn truncates_to_whole_seconds() {
        let instant = UNIX_EPOCH + Duration::from_millis(1_700_000_000_987);
        let ntp = to_ntp_time(Some(instant));
        assert_eq!(ntp, 1_700_000_000 + NTP_EPOCH_OFFSET);
        assert_eq!(
            from_ntp_time(ntp),
            Some(UNIX_EPOCH + Duration::from_secs(1_700_000_000))
        );
    }

    #[test]
    fn before_unix_epoch() {
        let instant = UNIX_EPOCH - Duration::from_secs(86_400);
        let ntp = to_ntp_time(Some(instant));
        assert_eq!(ntp, NTP_EPOCH_OFFSET - 86_400);
        assert_eq!(from_ntp_time(ntp), Some(instant));
    }

    #[test]
    fn before_ntp_epoch_saturates() {
        let instant = UNIX_EPOCH - Duration::from_secs(NTP_EPOCH_OFFSET + 10);
        assert_eq!(to_ntp_time(Some(instant)), 0);
    }

    #[test]
    fn current_time_is_plausible() {
        let before = to_ntp_time(Some(SystemTime::now()));
        let now = current_ntp_time();
        let after = to_ntp_time(Some(SystemTime::now()));
        assert!(before <= now && now <= after);
    }

    #[test]
    fn compact_units() {
        assert_eq!(compact_duration(86_400), "1d");
        assert_eq!(compact_duration(7 * 86_400), "7d");
        assert_eq!(compact_duration(3_600), "1h");
        assert_eq!(compact_duration(90_000), "25h");
        assert_eq!(compact_duration(120), "2m");
        assert_eq!(compact_duration(90), "90");
        assert_eq!(compact_duration(1), "1");
    }

    #[test]
    fn compact_zero() {
        assert_eq!(compact_duration(0), "0");
    }

    #[test]
    fn compact_negative_keeps_sign() {
        assert_eq!(compact_duration(-86_400), "-1d");
        assert_eq!(compact_duration(-3_600), "-1h");
        assert_eq!(compact_duration(-60), "-1m");
        assert_eq!(compact_duration(-90), "-90");
    }
}
