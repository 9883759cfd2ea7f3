//! Bulk builder for constructing `SendBulkTemplatedEmail` requests.

use crate::builders::{required, BuilderError};
use crate::config::DEFAULT_MAX_BULK_DESTINATIONS;
use crate::operations::SendBulkTemplatedEmailRequest;
use crate::types::{BulkEmailDestination, MessageTag};

/// Builder for constructing [`SendBulkTemplatedEmailRequest`] with a fluent API.
///
/// Each destination can override the default template data and tags. The
/// service answers with one status per destination, in the order they were
/// added here.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_model::builders::BulkTemplatedEmailBuilder;
/// use integrations_aws_ses_model::types::{BulkEmailDestination, Destination};
/// use serde_json::json;
///
/// let request = BulkTemplatedEmailBuilder::new()
///     .from("sender@example.com")
///     .template("newsletter")
///     .default_template_data(json!({"name": "friend"}))
///     .add_destination(BulkEmailDestination::new(
///         Destination::new().add_to("user1@example.com"),
///     ))
///     .add_destination(
///         BulkEmailDestination::new(Destination::new().add_to("user2@example.com"))
///             .with_template_data(json!({"name": "Alice"})),
///     )
///     .build()?;
///
/// assert_eq!(request.destinations.len(), 2);
/// # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
/// ```
#[derive(Debug, Default)]
pub struct BulkTemplatedEmailBuilder {
    from: Option<String>,
    source_arn: Option<String>,
    template: Option<String>,
    template_arn: Option<String>,
    default_template_data: Option<serde_json::Value>,
    default_tags: Vec<MessageTag>,
    destinations: Vec<BulkEmailDestination>,
    reply_to: Vec<String>,
    return_path: Option<String>,
    configuration_set: Option<String>,
}

impl BulkTemplatedEmailBuilder {
    /// Create a new bulk email builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address. Required.
    pub fn from(mut self, email: impl Into<String>) -> Self {
        self.from = Some(email.into());
        self
    }

    /// Send on behalf of the identity with this sending-authorization ARN.
    pub fn source_arn(mut self, arn: impl Into<String>) -> Self {
        self.source_arn = Some(arn.into());
        self
    }

    /// Set the template name. Required.
    pub fn template(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }

    /// Set the template ARN.
    pub fn template_arn(mut self, arn: impl Into<String>) -> Self {
        self.template_arn = Some(arn.into());
        self
    }

    /// Set replacement values used by destinations without their own.
    ///
    /// Defaults to an empty JSON object.
    pub fn default_template_data(mut self, data: serde_json::Value) -> Self {
        self.default_template_data = Some(data);
        self
    }

    /// Add a tag applied to destinations without their own tags.
    pub fn default_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_tags.push(MessageTag::new(name, value));
        self
    }

    /// Add a destination.
    pub fn add_destination(mut self, destination: BulkEmailDestination) -> Self {
        self.destinations.push(destination);
        self
    }

    /// Add several destinations at once.
    pub fn destinations(mut self, destinations: impl IntoIterator<Item = BulkEmailDestination>) -> Self {
        self.destinations.extend(destinations);
        self
    }

    /// Add a reply-to address.
    pub fn reply_to(mut self, email: impl Into<String>) -> Self {
        self.reply_to.push(email.into());
        self
    }

    /// Set the address bounces and complaints are returned to.
    pub fn return_path(mut self, email: impl Into<String>) -> Self {
        self.return_path = Some(email.into());
        self
    }

    /// Send through the named configuration set.
    pub fn configuration_set(mut self, name: impl Into<String>) -> Self {
        self.configuration_set = Some(name.into());
        self
    }

    /// Build the [`SendBulkTemplatedEmailRequest`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingField`] if `from` or `template` is not set
    /// - [`BuilderError::MissingField`] if no destinations are added
    /// - [`BuilderError::InvalidValue`] if there are more than 50 destinations
    /// - [`BuilderError::InvalidValue`] if a destination has no addresses
    pub fn build(self) -> Result<SendBulkTemplatedEmailRequest, BuilderError> {
        let source = required("from", self.from)?;
        let template = required("template", self.template)?;

        if self.destinations.is_empty() {
            return Err(BuilderError::missing_field("destinations"));
        }

        if self.destinations.len() > DEFAULT_MAX_BULK_DESTINATIONS {
            return Err(BuilderError::invalid_value(
                "destinations",
                format!(
                    "Too many destinations ({}). SES accepts up to {} per request",
                    self.destinations.len(),
                    DEFAULT_MAX_BULK_DESTINATIONS
                ),
            ));
        }

        for (index, entry) in self.destinations.iter().enumerate() {
            if entry.destination.is_empty() {
                return Err(BuilderError::invalid_value(
                    "destinations",
                    format!("Destination at index {} has no email addresses", index),
                ));
            }
        }

        let default_template_data = self
            .default_template_data
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()))
            .to_string();

        Ok(SendBulkTemplatedEmailRequest {
            source,
            source_arn: self.source_arn,
            reply_to_addresses: self.reply_to,
            return_path: self.return_path,
            return_path_arn: None,
            configuration_set_name: self.configuration_set,
            default_tags: self.default_tags,
            template,
            template_arn: self.template_arn,
            default_template_data,
            destinations: self.destinations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Destination;
    use serde_json::json;

    fn destination(address: &str) -> BulkEmailDestination {
        BulkEmailDestination::new(Destination::new().add_to(address))
    }

    #[test]
    fn test_basic_bulk_email() {
        let request = BulkTemplatedEmailBuilder::new()
            .from("sender@example.com")
            .template("newsletter")
            .add_destination(destination("a@example.com"))
            .add_destination(destination("b@example.com"))
            .build()
            .unwrap();

        assert_eq!(request.source, "sender@example.com");
        assert_eq!(request.template, "newsletter");
        assert_eq!(request.default_template_data, "{}");
        assert_eq!(
            request.destinations[1].destination.to_addresses,
            vec!["b@example.com"]
        );
    }

    #[test]
    fn test_default_data_and_tags() {
        let request = BulkTemplatedEmailBuilder::new()
            .from("sender@example.com")
            .template("newsletter")
            .default_template_data(json!({"name": "friend"}))
            .default_tag("campaign", "spring")
            .destinations(vec![destination("a@example.com")])
            .build()
            .unwrap();

        let data: serde_json::Value =
            serde_json::from_str(&request.default_template_data).unwrap();
        assert_eq!(data, json!({"name": "friend"}));
        assert_eq!(request.default_tags.len(), 1);
    }

    #[test]
    fn test_missing_template() {
        let result = BulkTemplatedEmailBuilder::new()
            .from("sender@example.com")
            .add_destination(destination("a@example.com"))
            .build();

        assert_eq!(result.unwrap_err(), BuilderError::missing_field("template"));
    }

    #[test]
    fn test_missing_destinations() {
        let result = BulkTemplatedEmailBuilder::new()
            .from("sender@example.com")
            .template("newsletter")
            .build();

        assert_eq!(result.unwrap_err(), BuilderError::missing_field("destinations"));
    }

    #[test]
    fn test_too_many_destinations() {
        let result = BulkTemplatedEmailBuilder::new()
            .from("sender@example.com")
            .template("newsletter")
            .destinations((0..51).map(|i| destination(&format!("user{}@example.com", i))))
            .build();

        match result.unwrap_err() {
            BuilderError::InvalidValue { field, message } => {
                assert_eq!(field, "destinations");
                assert!(message.contains("51"));
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_destination_rejected() {
        let result = BulkTemplatedEmailBuilder::new()
            .from("sender@example.com")
            .template("newsletter")
            .add_destination(destination("a@example.com"))
            .add_destination(BulkEmailDestination::new(Destination::new()))
            .build();

        assert!(matches!(
            result,
            Err(BuilderError::InvalidValue { ref message, .. }) if message.contains("index 1")
        ));
    }
}
