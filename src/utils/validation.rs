use crate::utils::error::{HelperError, Result};
use chrono::FixedOffset;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HelperError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn offset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:(?P<utc>UTC|Z)|(?P<sign>[+-])(?P<hours>\d{2}):?(?P<minutes>\d{2}))$")
            .expect("offset pattern is valid")
    })
}

/// 解析 `+02:00`、`-0530`、`UTC` 這類時區偏移
pub fn parse_utc_offset(field_name: &str, value: &str) -> Result<FixedOffset> {
    let invalid = |reason: &str| HelperError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let caps = offset_pattern()
        .captures(value.trim())
        .ok_or_else(|| invalid("Expected an offset like +02:00, -0530 or UTC"))?;

    if caps.name("utc").is_some() {
        return FixedOffset::east_opt(0).ok_or_else(|| invalid("Offset out of range"));
    }

    let hours: i32 = caps["hours"]
        .parse()
        .map_err(|_| invalid("Hours are not a number"))?;
    let minutes: i32 = caps["minutes"]
        .parse()
        .map_err(|_| invalid("Minutes are not a number"))?;
    validate_range(field_name, hours, 0, 23)?;
    validate_range(field_name, minutes, 0, 59)?;

    let seconds = (hours * 3600 + minutes * 60) * if &caps["sign"] == "-" { -1 } else { 1 };
    FixedOffset::east_opt(seconds).ok_or_else(|| invalid("Offset out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("gravatar.base_url", "https://secure.gravatar.com").is_ok());
        assert!(validate_url("gravatar.base_url", "http://example.com").is_ok());
        assert!(validate_url("gravatar.base_url", "").is_err());
        assert!(validate_url("gravatar.base_url", "invalid-url").is_err());
        assert!(validate_url("gravatar.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("paging.per_page", 5, 1).is_ok());
        assert!(validate_positive_number("paging.per_page", 0, 1).is_err());
    }

    #[test]
    fn test_parse_utc_offset() {
        let offset = parse_utc_offset("general.timezone", "+02:00").unwrap();
        assert_eq!(offset.local_minus_utc(), 7200);

        let offset = parse_utc_offset("general.timezone", "-0530").unwrap();
        assert_eq!(offset.local_minus_utc(), -(5 * 3600 + 30 * 60));

        let offset = parse_utc_offset("general.timezone", "UTC").unwrap();
        assert_eq!(offset.local_minus_utc(), 0);

        assert!(parse_utc_offset("general.timezone", "+25:00").is_err());
        assert!(parse_utc_offset("general.timezone", "Europe/Paris").is_err());
    }
}
