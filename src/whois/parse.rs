//! WHOIS page parsing and date conversion.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static DIV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div").expect("hard-coded selector is valid"));

/// The raw date strings scraped from a WHOIS page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegistrationDates {
    pub registered_on: Option<String>,
    pub expires_on: Option<String>,
}

/// Extracts the `Registered On:` / `Expires On:` values from a WHOIS page.
///
/// The page lays each field out as a label element followed by a sibling
/// value element; this walks every `div`, matches the label text, and reads
/// the next sibling element's text.
///
/// # Errors
///
/// Returns an error when neither label is present — the page did not carry
/// registration data (rate-limit interstitial, layout change), which the
/// caller treats as a retriable parse failure.
pub(crate) fn parse_registration_dates(html: &str) -> Result<RegistrationDates> {
    let document = Html::parse_document(html);

    let registered_on = find_label_value(&document, "Registered On:");
    let expires_on = find_label_value(&document, "Expires On:");

    if registered_on.is_none() && expires_on.is_none() {
        return Err(anyhow!("No registration data found in WHOIS page"));
    }

    Ok(RegistrationDates {
        registered_on,
        expires_on,
    })
}

/// Finds the text of the element following the one whose text is `label`.
fn find_label_value(document: &Html, label: &str) -> Option<String> {
    for element in document.select(&DIV_SELECTOR) {
        let text: String = element.text().collect();
        if text.trim() != label {
            continue;
        }
        let value = element
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .map(|sibling| sibling.text().collect::<String>().trim().to_string())?;
        if !value.is_empty() {
            return Some(value);
        }
    }
    None
}

/// Attempts to parse a date string in various formats.
pub(crate) fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    // Try common WHOIS date formats
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(date_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    /// A trimmed-down WHOIS detail block in the row/label/value layout.
    fn whois_page(registered: &str, expires: &str) -> String {
        format!(
            r#"<html><body>
            <div class="df-block">
              <div class="df-row">
                <div class="df-label">Registered On:</div>
                <div class="df-value">{registered}</div>
              </div>
              <div class="df-row">
                <div class="df-label">Expires On:</div>
                <div class="df-value">{expires}</div>
              </div>
            </div>
            </body></html>"#
        )
    }

    #[test]
    fn test_parse_registration_dates() {
        let html = whois_page("2020-06-09", "2026-06-09");
        let dates = parse_registration_dates(&html).expect("parse");
        assert_eq!(dates.registered_on.as_deref(), Some("2020-06-09"));
        assert_eq!(dates.expires_on.as_deref(), Some("2026-06-09"));
    }

    #[test]
    fn test_parse_registration_dates_missing_expiry() {
        let html = r#"<html><body>
            <div class="df-row">
              <div class="df-label">Registered On:</div>
              <div class="df-value">2020-06-09</div>
            </div>
        </body></html>"#;
        let dates = parse_registration_dates(html).expect("parse");
        assert_eq!(dates.registered_on.as_deref(), Some("2020-06-09"));
        assert_eq!(dates.expires_on, None);
    }

    #[test]
    fn test_parse_registration_dates_no_labels_is_error() {
        let html = "<html><body><div>Rate limited, come back later</div></body></html>";
        assert!(parse_registration_dates(html).is_err());
    }

    #[test]
    fn test_parse_date_string_iso_date() {
        let dt = parse_date_string("2020-06-09").expect("parse");
        assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 6, 9));
    }

    #[test]
    fn test_parse_date_string_iso_datetime_z() {
        let dt = parse_date_string("1997-09-15T04:00:00Z").expect("parse");
        assert_eq!(
            dt,
            Utc.with_ymd_and_hms(1997, 9, 15, 4, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_date_string_day_month_year() {
        let dt = parse_date_string("09-Jun-2020").expect("parse");
        assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 6, 9));
    }

    #[test]
    fn test_parse_date_string_garbage_is_none() {
        assert_eq!(parse_date_string("not a date"), None);
        assert_eq!(parse_date_string(""), None);
    }
}
