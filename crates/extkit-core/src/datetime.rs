// Rust guideline compliant 2026-02-06

//! Date values and locale-aware date/time formatting.
//!
//! [`FieldValue`] is the dynamically-typed property value handed to the
//! validators; it distinguishes the three date representations (date+time,
//! date+time+offset, date only) from values that are not dates at all.
//!
//! [`format_general`] renders a date/time with the general short date and
//! short time pattern of a [`Locale`].

use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use parking_lot::RwLock;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A property value as seen by validators.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Date and time without offset, interpreted in the local time zone.
    DateTime(NaiveDateTime),
    /// Date and time with a fixed UTC offset.
    DateTimeOffset(DateTime<FixedOffset>),
    /// Calendar date, interpreted as local midnight.
    Date(NaiveDate),
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Boolean value.
    Bool(bool),
}

impl FieldValue {
    /// Name of the value's type, as reported in type errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::DateTime(_) => "DateTime",
            FieldValue::DateTimeOffset(_) => "DateTimeOffset",
            FieldValue::Date(_) => "DateOnly",
            FieldValue::Text(_) => "String",
            FieldValue::Integer(_) => "Int64",
            FieldValue::Bool(_) => "Boolean",
        }
    }

    /// Whether the value is one of the date representations.
    #[must_use]
    pub fn is_date_like(&self) -> bool {
        matches!(
            self,
            FieldValue::DateTime(_) | FieldValue::DateTimeOffset(_) | FieldValue::Date(_)
        )
    }

    /// Converts a date-like value to an instant with offset.
    ///
    /// Naive date/times take the local offset in effect at that wall-clock
    /// time; dates become local midnight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDateType`] if the value is not date-like.
    pub fn to_date_time_offset(&self) -> Result<DateTime<FixedOffset>> {
        match self {
            FieldValue::DateTime(naive) => Ok(local_instant(naive)),
            FieldValue::DateTimeOffset(dt) => Ok(*dt),
            FieldValue::Date(date) => Ok(local_instant(&date.and_time(NaiveTime::MIN))),
            other => Err(Error::UnsupportedDateType(other.type_name().to_string())),
        }
    }
}

fn local_instant(naive: &NaiveDateTime) -> DateTime<FixedOffset> {
    Local
        .from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .unwrap_or_else(|| Utc.from_utc_datetime(naive).fixed_offset())
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        FieldValue::DateTimeOffset(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTimeOffset(value.fixed_offset())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

// Process-wide locale installed from configuration; `None` defers to the
// environment.
static CONFIGURED_LOCALE: RwLock<Option<Locale>> = parking_lot::const_rwlock(None);

/// Supported cultures for date/time formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (United States).
    #[default]
    EnUs,
    /// English (United Kingdom).
    EnGb,
    /// German (Germany).
    DeDe,
    /// French (France).
    FrFr,
    /// Japanese (Japan).
    JaJp,
    /// Culture-independent formatting.
    Invariant,
}

impl Locale {
    /// Canonical tag, e.g. `de-DE`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::JaJp => "ja-JP",
            Locale::Invariant => "invariant",
        }
    }

    /// `chrono` pattern for the general short date and short time.
    #[must_use]
    pub fn general_pattern(self) -> &'static str {
        match self {
            Locale::EnUs => "%-m/%-d/%Y %-I:%M %p",
            Locale::EnGb | Locale::FrFr => "%d/%m/%Y %H:%M",
            Locale::DeDe => "%d.%m.%Y %H:%M",
            Locale::JaJp => "%Y/%m/%d %-H:%M",
            Locale::Invariant => "%m/%d/%Y %H:%M",
        }
    }

    /// Parses a BCP 47 or POSIX locale tag.
    ///
    /// Accepts `de-DE`, `de_DE`, `de_DE.UTF-8`, `de_DE@euro` and bare
    /// languages such as `de`. `C` and `POSIX` map to [`Locale::Invariant`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocale`] if the tag names no supported culture.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let base = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_lowercase();

        match base.as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" | "de" => Ok(Locale::DeDe),
            "fr-fr" | "fr" => Ok(Locale::FrFr),
            "ja-jp" | "ja" => Ok(Locale::JaJp),
            "c" | "posix" | "invariant" => Ok(Locale::Invariant),
            _ => Err(Error::UnknownLocale(tag.to_string())),
        }
    }

    /// Resolves the active locale from the process environment.
    ///
    /// Checks `LC_ALL`, `LC_TIME` and `LANG` in that order, skipping unset or
    /// unsupported values, and falls back to [`Locale::EnUs`].
    #[must_use]
    pub fn current() -> Self {
        for var in ["LC_ALL", "LC_TIME", "LANG"] {
            let Ok(value) = std::env::var(var) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match Locale::from_tag(&value) {
                Ok(locale) => return locale,
                Err(_) => trace!(var, value = %value, "ignoring unsupported locale"),
            }
        }
        Locale::default()
    }

    /// Installs (or, with `None`, clears) the process-wide configured locale.
    ///
    /// Usually called through [`Config::install`](crate::Config::install).
    pub fn set_configured(locale: Option<Locale>) {
        *CONFIGURED_LOCALE.write() = locale;
    }

    /// The process-wide configured locale, if one is installed.
    #[must_use]
    pub fn configured() -> Option<Locale> {
        *CONFIGURED_LOCALE.read()
    }

    /// Resolves the locale used by
    /// [`to_locale_date_time_string`](LocaleDateTimeExt::to_locale_date_time_string).
    ///
    /// The configured locale wins; otherwise [`Locale::current`] decides.
    #[must_use]
    pub fn active() -> Self {
        Locale::configured().unwrap_or_else(Locale::current)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_tag(s)
    }
}

/// Formats a date/time with the general short date/time pattern of `locale`.
///
/// The value's own wall-clock time is rendered; no time zone conversion
/// happens. Works for the full representable range.
pub fn format_general<Tz>(value: &DateTime<Tz>, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    value.format(locale.general_pattern()).to_string()
}

/// Locale-aware formatting for date/times.
pub trait LocaleDateTimeExt {
    /// Formats with the general short date/time pattern of the active locale
    /// (see [`Locale::active`]).
    fn to_locale_date_time_string(&self) -> String;

    /// Formats with the general short date/time pattern of `locale`.
    fn to_locale_date_time_string_in(&self, locale: Locale) -> String;
}

impl<Tz> LocaleDateTimeExt for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn to_locale_date_time_string(&self) -> String {
        format_general(self, Locale::active())
    }

    fn to_locale_date_time_string_in(&self, locale: Locale) -> String {
        format_general(self, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_date() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2023-04-15T14:30:00+00:00").unwrap()
    }

    #[test]
    fn test_format_en_us() {
        assert_eq!(format_general(&known_date(), Locale::EnUs), "4/15/2023 2:30 PM");
    }

    #[test]
    fn test_format_de_de() {
        assert_eq!(format_general(&known_date(), Locale::DeDe), "15.04.2023 14:30");
    }

    #[test]
    fn test_format_other_locales() {
        let dt = known_date();
        assert_eq!(dt.to_locale_date_time_string_in(Locale::EnGb), "15/04/2023 14:30");
        assert_eq!(dt.to_locale_date_time_string_in(Locale::JaJp), "2023/04/15 14:30");
        assert_eq!(dt.to_locale_date_time_string_in(Locale::Invariant), "04/15/2023 14:30");
    }

    #[test]
    fn test_format_keeps_offset_wall_clock() {
        let pacific = DateTime::parse_from_rfc3339("2023-04-15T07:30:00-07:00").unwrap();
        let formatted = format_general(&pacific, Locale::EnUs);
        assert!(formatted.contains("7:"));
        assert!(formatted.ends_with("AM"));
    }

    #[test]
    fn test_format_extremes_do_not_panic() {
        let min = DateTime::<Utc>::MIN_UTC.fixed_offset();
        let max = DateTime::<Utc>::MAX_UTC.fixed_offset();
        assert!(!min.to_locale_date_time_string().is_empty());
        assert!(!max.to_locale_date_time_string().is_empty());
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("de_DE.UTF-8").unwrap(), Locale::DeDe);
        assert_eq!(Locale::from_tag("en-GB").unwrap(), Locale::EnGb);
        assert_eq!(Locale::from_tag("fr").unwrap(), Locale::FrFr);
        assert_eq!(Locale::from_tag("C").unwrap(), Locale::Invariant);
        assert_eq!("ja_JP@calendar".parse::<Locale>().unwrap(), Locale::JaJp);
        assert!(matches!(
            Locale::from_tag("xx-YY"),
            Err(Error::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_field_value_type_names() {
        assert_eq!(FieldValue::from("2023-01-01").type_name(), "String");
        assert_eq!(FieldValue::from(3_i64).type_name(), "Int64");
        assert!(FieldValue::from(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()).is_date_like());
        assert!(!FieldValue::from(true).is_date_like());
    }

    #[test]
    fn test_date_only_is_local_midnight() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let midnight = date.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(
            FieldValue::Date(date).to_date_time_offset().unwrap(),
            FieldValue::DateTime(midnight).to_date_time_offset().unwrap()
        );
    }

    #[test]
    fn test_non_date_conversion_fails() {
        let err = FieldValue::from("2023-01-01").to_date_time_offset().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported date type: String");
    }
}
