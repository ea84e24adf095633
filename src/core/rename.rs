//! Certificate file name matching.
//!
//! Certificates arrive as `YYYYMMDD-<id>.<ext>` and are published as
//! `YYYYMMDD.<ext>`.
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static CERTIFICATE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{8})-(\d+)\.(\w+)$").expect("certificate pattern is valid")
});

/// Parts of a matching certificate file name
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CertificateName {
    pub date: String,
    pub extension: String,
}

impl CertificateName {
    /// `None` unless the whole name matches `YYYYMMDD-<digits>.<ext>`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let caps = CERTIFICATE_NAME.captures(file_name)?;
        Some(Self {
            date: caps[1].to_string(),
            extension: caps[3].to_string(),
        })
    }

    pub fn canonical(&self) -> String {
        format!("{}.{}", self.date, self.extension)
    }

    /// The date prefix as a calendar date, if it is one.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y%m%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dated_certificate() {
        let name = CertificateName::parse("20230416-12345.jpg").unwrap();
        assert_eq!(name.date, "20230416");
        assert_eq!(name.extension, "jpg");
        assert_eq!(name.canonical(), "20230416.jpg");
        assert_eq!(
            name.calendar_date(),
            NaiveDate::from_ymd_opt(2023, 4, 16)
        );
    }

    #[test]
    fn rejects_other_shapes() {
        for name in [
            "20230416.jpg",
            "2023041-1.jpg",
            "20230416-abc.jpg",
            "20230416-1.tar.gz",
            "x20230416-1.jpg",
            "20230416-1.",
            "202304160-1.png",
        ] {
            assert!(CertificateName::parse(name).is_none(), "{name}");
        }
    }

    #[test]
    fn impossible_dates_are_not_calendar_dates() {
        let name = CertificateName::parse("20231345-7.png").unwrap();
        assert_eq!(name.canonical(), "20231345.png");
        assert!(name.calendar_date().is_none());
    }
}
