//! Registration lookup result types.

use chrono::{DateTime, Utc};

/// Outcome of a registration-data lookup.
///
/// `found` distinguishes "the WHOIS page answered" from "the lookup was
/// skipped or exhausted its retries"; either way the day durations fall back
/// to -1 when unknown, so the feature schema stays complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationInfo {
    /// Whether the registration page was fetched and parsed.
    pub found: bool,
    /// Days since registration, or -1 if unknown.
    pub age_days: i64,
    /// Days between registration and expiration, or -1 if unknown.
    pub registration_length_days: i64,
}

impl RegistrationInfo {
    /// The sentinel for a skipped or failed lookup.
    pub fn not_found() -> Self {
        Self {
            found: false,
            age_days: -1,
            registration_length_days: -1,
        }
    }

    /// Derives the day durations from the parsed dates.
    ///
    /// A date that failed to parse keeps its derived duration at -1; the
    /// registration length additionally needs both dates.
    pub(crate) fn from_dates(
        registered_on: Option<DateTime<Utc>>,
        expires_on: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let age_days = registered_on
            .map(|reg| (now - reg).num_days())
            .unwrap_or(-1);
        let registration_length_days = match (registered_on, expires_on) {
            (Some(reg), Some(exp)) => (exp - reg).num_days(),
            _ => -1,
        };
        Self {
            found: true,
            age_days,
            registration_length_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_not_found_sentinel() {
        let info = RegistrationInfo::not_found();
        assert!(!info.found);
        assert_eq!(info.age_days, -1);
        assert_eq!(info.registration_length_days, -1);
    }

    #[test]
    fn test_from_dates_both_present() {
        let reg = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let exp = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();

        let info = RegistrationInfo::from_dates(Some(reg), Some(exp), now);
        assert!(info.found);
        assert_eq!(info.age_days, 366); // 2020 is a leap year
        assert_eq!(info.registration_length_days, 731);
    }

    #[test]
    fn test_from_dates_unparseable_registration_keeps_sentinels() {
        let exp = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();

        let info = RegistrationInfo::from_dates(None, Some(exp), now);
        assert!(info.found);
        assert_eq!(info.age_days, -1);
        assert_eq!(info.registration_length_days, -1);
    }

    #[test]
    fn test_from_dates_missing_expiration_keeps_length_sentinel() {
        let reg = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 1, 31, 0, 0, 0).unwrap();

        let info = RegistrationInfo::from_dates(Some(reg), None, now);
        assert!(info.found);
        assert_eq!(info.age_days, 30);
        assert_eq!(info.registration_length_days, -1);
    }
}
