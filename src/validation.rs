//! Local invariant checks for SES requests.
//!
//! Structural rules (one receipt action variant, one bounce reason) are
//! carried by the types themselves. What remains are value rules the service
//! would otherwise reject at send time: required strings, recipient limits,
//! SMTP and enhanced status code formats, resource name syntax.
//!
//! Types describe their rules by implementing [`Validate`]. [`enforce`] runs
//! them and applies the configured [`ValidationMode`](crate::config::ValidationMode).
//!
//! ```rust
//! use integrations_aws_ses_model::config::ModelConfig;
//! use integrations_aws_ses_model::operations::SendBounceRequest;
//! use integrations_aws_ses_model::validation::enforce;
//!
//! // A bounce with no recipients is rejected in strict mode...
//! let request = SendBounceRequest::new("msg-1", "mailer@example.com", Vec::new());
//! let err = enforce(&request, &ModelConfig::default()).unwrap_err();
//! assert_eq!(err.violations()[0].field, "bounced_recipient_info_list");
//!
//! // ...and only logged in permissive mode.
//! assert!(enforce(&request, &ModelConfig::permissive()).is_ok());
//! ```

use crate::config::ModelConfig;
use crate::error::{SesError, SesResult};
use std::fmt;
use std::net::IpAddr;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    /// Path to the offending field, e.g. `bounced_recipient_info_list[1].recipient`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Types with value rules beyond what their structure enforces.
pub trait Validate {
    /// Report every violation into `v`. The default reports none.
    fn validate(&self, v: &mut Validator<'_>) {
        let _ = v;
    }
}

/// Collects violations while walking a value.
#[derive(Debug)]
pub struct Validator<'c> {
    config: &'c ModelConfig,
    path: String,
    violations: Vec<Violation>,
}

impl<'c> Validator<'c> {
    /// Create a validator using the given limits.
    pub fn new(config: &'c ModelConfig) -> Self {
        Self {
            config,
            path: String::new(),
            violations: Vec::new(),
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &ModelConfig {
        self.config
    }

    fn field_path(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else if field.is_empty() {
            self.path.clone()
        } else {
            format!("{}.{}", self.path, field)
        }
    }

    /// Record a violation on `field`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        let field = self.field_path(field);
        self.violations.push(Violation {
            field,
            message: message.into(),
        });
    }

    /// Record a violation if `value` is empty or whitespace.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "must not be empty");
        }
    }

    /// Record a violation if an optional string is present but empty.
    pub fn require_if_set(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.require(field, value);
        }
    }

    /// Record a violation if `items` is empty.
    pub fn require_non_empty<T>(&mut self, field: &str, items: &[T]) {
        if items.is_empty() {
            self.push(field, "must contain at least one element");
        }
    }

    /// Record a violation if `items` holds more than `max` elements.
    pub fn limit<T>(&mut self, field: &str, items: &[T], max: usize) {
        if items.len() > max {
            self.push(
                field,
                format!("has {} elements, at most {} allowed", items.len(), max),
            );
        }
    }

    /// Record a violation if `value` is not a valid resource name.
    pub fn resource_name(&mut self, field: &str, value: &str) {
        if !is_resource_name(value) {
            self.push(field, format!("'{}' is not a valid name", value));
        }
    }

    /// Record a violation if `value` is not an email address.
    pub fn email_address(&mut self, field: &str, value: &str) {
        if !is_email_address(value) {
            self.push(field, format!("'{}' is not an email address", value));
        }
    }

    /// Record a violation if `value` is not a JSON document.
    pub fn json_document(&mut self, field: &str, value: &str) {
        if let Err(err) = serde_json::from_str::<serde_json::Value>(value) {
            self.push(field, format!("must be a JSON document: {}", err));
        }
    }

    /// Validate a nested value with `field` appended to the path.
    pub fn check<T: Validate + ?Sized>(&mut self, field: &str, value: &T) {
        let saved = self.path.len();
        self.path = self.field_path(field);
        value.validate(self);
        self.path.truncate(saved);
    }

    /// Validate a nested optional value.
    pub fn check_opt<T: Validate>(&mut self, field: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.check(field, value);
        }
    }

    /// Validate each element of a list as `field[i]`.
    pub fn check_each<T: Validate>(&mut self, field: &str, items: &[T]) {
        for (index, item) in items.iter().enumerate() {
            self.check(&format!("{}[{}]", field, index), item);
        }
    }

    /// Consume the validator and return what it found.
    pub fn finish(self) -> Vec<Violation> {
        self.violations
    }
}

/// Collect every violation of `value` without applying the mode.
pub fn violations<T: Validate + ?Sized>(value: &T, config: &ModelConfig) -> Vec<Violation> {
    let mut validator = Validator::new(config);
    value.validate(&mut validator);
    validator.finish()
}

/// Validate `value` and apply the configured mode.
///
/// # Errors
///
/// In strict mode, returns [`SesError::ValidationFailed`] carrying every
/// violation. In permissive mode violations are logged and `Ok` is returned.
pub fn enforce<T: Validate + ?Sized>(value: &T, config: &ModelConfig) -> SesResult<()> {
    let found = violations(value, config);
    if found.is_empty() {
        return Ok(());
    }

    if config.is_strict() {
        tracing::debug!(count = found.len(), "request rejected by local validation");
        return Err(SesError::ValidationFailed { violations: found });
    }

    for violation in &found {
        tracing::warn!(
            field = %violation.field,
            message = %violation.message,
            "request violates service constraint, deferring to service"
        );
    }
    Ok(())
}

/// SMTP reply code per RFC 5321: three digits, first digit 4 or 5 for a bounce.
pub fn is_smtp_reply_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 3
        && matches!(bytes[0], b'4' | b'5')
        && bytes.iter().all(u8::is_ascii_digit)
}

/// Enhanced status code per RFC 3463: `class.subject.detail`, e.g. `5.1.1`.
pub fn is_enhanced_status_code(code: &str) -> bool {
    let parts: Vec<&str> = code.split('.').collect();
    if parts.len() != 3 {
        return false;
    }
    let digits = |s: &str, max: usize| {
        !s.is_empty() && s.len() <= max && s.bytes().all(|b| b.is_ascii_digit())
    };
    matches!(parts[0], "2" | "4" | "5") && digits(parts[1], 3) && digits(parts[2], 3)
}

/// Names of rules, rule sets, filters and configuration sets.
///
/// ASCII letters, digits, `.`, `_` and `-`; starts and ends with a letter or
/// digit; fewer than 64 characters.
pub fn is_resource_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    bytes.len() < 64
        && first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

/// Header name for an add-header action: letters, digits and dashes, under 50 characters.
pub fn is_header_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() < 50
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// A single IP address or a CIDR range such as `10.0.0.0/24`.
pub fn is_cidr(value: &str) -> bool {
    let (addr, prefix) = match value.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (value, None),
    };
    let Ok(ip) = addr.parse::<IpAddr>() else {
        return false;
    };
    match prefix {
        None => true,
        Some(prefix) => {
            let max = if ip.is_ipv4() { 32 } else { 128 };
            prefix.parse::<u8>().map_or(false, |p| p <= max)
        }
    }
}

/// Loose address check: one `@` with text on both sides.
pub fn is_email_address(address: &str) -> bool {
    match address.rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
