//! Builder for receipt rules.

use crate::builders::{required, BuilderError};
use crate::types::{ReceiptAction, ReceiptRule, TlsPolicy};

/// Builder for constructing a [`ReceiptRule`].
///
/// Rules are enabled unless [`enabled(false)`](Self::enabled) is called.
/// Actions run in the order they are added, and nothing may follow a stop
/// action.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_model::builders::ReceiptRuleBuilder;
/// use integrations_aws_ses_model::types::{ReceiptAction, S3Action};
///
/// let rule = ReceiptRuleBuilder::new()
///     .name("archive")
///     .recipient("example.com")
///     .scan_enabled(true)
///     .action(S3Action::new("inbound-mail").with_object_key_prefix("archive/"))
///     .action(ReceiptAction::sns("arn:aws:sns:us-east-1:123456789012:inbound"))
///     .build()?;
///
/// assert_eq!(rule.actions[0].kind(), "S3Action");
/// # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
/// ```
#[derive(Debug)]
pub struct ReceiptRuleBuilder {
    name: Option<String>,
    enabled: bool,
    tls_policy: Option<TlsPolicy>,
    recipients: Vec<String>,
    actions: Vec<ReceiptAction>,
    scan_enabled: bool,
}

impl Default for ReceiptRuleBuilder {
    fn default() -> Self {
        Self {
            name: None,
            enabled: true,
            tls_policy: None,
            recipients: Vec::new(),
            actions: Vec::new(),
            scan_enabled: false,
        }
    }
}

impl ReceiptRuleBuilder {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enable or disable the rule.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Require or relax TLS for inbound mail.
    pub fn tls_policy(mut self, policy: TlsPolicy) -> Self {
        self.tls_policy = Some(policy);
        self
    }

    /// Add an address or domain the rule applies to.
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipients.push(recipient.into());
        self
    }

    /// Append an action.
    pub fn action(mut self, action: impl Into<ReceiptAction>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Scan messages for spam and viruses.
    pub fn scan_enabled(mut self, scan: bool) -> Self {
        self.scan_enabled = scan;
        self
    }

    /// Build the [`ReceiptRule`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingField`] if `name` is not set
    /// - [`BuilderError::InvalidValue`] if an action follows a stop action
    pub fn build(self) -> Result<ReceiptRule, BuilderError> {
        let name = required("name", self.name)?;

        if let Some(position) = self.actions.iter().position(ReceiptAction::is_terminal) {
            if position + 1 < self.actions.len() {
                return Err(BuilderError::invalid_value(
                    "actions",
                    format!(
                        "{} at index {} ends the rule; later actions never run",
                        self.actions[position].kind(),
                        position
                    ),
                ));
            }
        }

        Ok(ReceiptRule {
            name,
            enabled: self.enabled,
            tls_policy: self.tls_policy,
            recipients: self.recipients,
            actions: self.actions,
            scan_enabled: self.scan_enabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LambdaAction;

    #[test]
    fn test_defaults() {
        let rule = ReceiptRuleBuilder::new().name("catch-all").build().unwrap();

        assert_eq!(rule, ReceiptRule::new("catch-all"));
        assert!(rule.enabled);
        assert!(!rule.scan_enabled);
    }

    #[test]
    fn test_actions_keep_order() {
        let rule = ReceiptRuleBuilder::new()
            .name("pipeline")
            .action(ReceiptAction::add_header("X-Processed", "yes"))
            .action(LambdaAction::new(
                "arn:aws:lambda:us-east-1:123456789012:function:f",
            ))
            .action(ReceiptAction::stop())
            .build()
            .unwrap();

        let kinds: Vec<&str> = rule.actions.iter().map(ReceiptAction::kind).collect();
        assert_eq!(kinds, vec!["AddHeaderAction", "LambdaAction", "StopAction"]);
    }

    #[test]
    fn test_action_after_stop_rejected() {
        let result = ReceiptRuleBuilder::new()
            .name("broken")
            .action(ReceiptAction::stop())
            .action(ReceiptAction::s3("bucket"))
            .build();

        assert!(matches!(
            result,
            Err(BuilderError::InvalidValue { ref field, .. }) if field == "actions"
        ));
    }

    #[test]
    fn test_bounce_then_notify() {
        let rule = ReceiptRuleBuilder::new()
            .name("reject-and-notify")
            .action(ReceiptAction::bounce(
                "550",
                "Mailbox does not exist",
                "mailer-daemon@example.com",
            ))
            .action(ReceiptAction::sns("arn:aws:sns:us-east-1:123456789012:rejected"))
            .build()
            .unwrap();

        let kinds: Vec<&str> = rule.actions.iter().map(ReceiptAction::kind).collect();
        assert_eq!(kinds, vec!["BounceAction", "SNSAction"]);
    }

    #[test]
    fn test_missing_name() {
        let result = ReceiptRuleBuilder::new().build();
        assert_eq!(result.unwrap_err(), BuilderError::missing_field("name"));
    }
}
