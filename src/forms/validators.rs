//! Field-level checks shared by the creation and edit schemas.

use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_INVALID_URL: &str = "Invalid URL.";
pub const MSG_INVALID_CHOICE: &str = "Not a valid choice.";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z]+://(?P<host>[^/?:]+)(?P<port>:[0-9]+)?(?P<path>/.*?)?(?P<query>\?.*)?$")
        .expect("static URL regex")
});

static HOST_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(xn-|[a-z0-9_]+)(-[a-z0-9_-]+)*$").expect("static label regex")
});

static TLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z]{2,20}|xn--([a-z0-9]+-)*[a-z0-9]+)$").expect("static TLD regex")
});

/// Blank means missing, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// `scheme://host[:port][/path][?query]` where host is an IP address or a
/// dotted hostname ending in an alphabetic TLD.
pub fn is_valid_url(value: &str) -> bool {
    let Some(caps) = URL_RE.captures(value) else {
        return false;
    };
    let Some(host) = caps.name("host") else {
        return false;
    };
    is_valid_host(host.as_str())
}

fn is_valid_host(host: &str) -> bool {
    if host.parse::<IpAddr>().is_ok() {
        return true;
    }

    let host = host.strip_suffix('.').unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();

    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels
        .iter()
        .all(|l| l.len() <= 63 && HOST_LABEL_RE.is_match(l));

    labels_ok && labels.last().is_some_and(|tld| TLD_RE.is_match(tld))
}

/// Creation checkbox: absent, empty or the literal `false` is unchecked,
/// any other submitted value is checked.
pub fn is_checked(value: &str) -> bool {
    !matches!(value, "" | "false")
}

/// Edit select value. `Ok(None)` when nothing was submitted.
pub fn parse_flag(value: Option<&str>) -> Result<Option<bool>, &'static str> {
    let Some(raw) = value else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "y" | "yes" | "on" | "true" | "1" => Ok(Some(true)),
        "n" | "no" | "off" | "false" | "0" => Ok(Some(false)),
        _ => Err(MSG_INVALID_CHOICE),
    }
}
