//! JSON encoding of operation payloads.
//!
//! The codec checks requests against the configured [`ValidationMode`] and
//! then serializes them through their serde representation, whose member
//! names match the SES wire names. It is the marshalling contract of the
//! model. It does not speak the Query protocol.
//!
//! ```rust
//! use integrations_aws_ses_model::codec::{decode_request, encode_request};
//! use integrations_aws_ses_model::config::ModelConfig;
//! use integrations_aws_ses_model::operations::SendBounceRequest;
//! use integrations_aws_ses_model::types::{BounceType, BouncedRecipientInfo};
//!
//! let request = SendBounceRequest::new(
//!     "00000138111222aa-33322211-cccc-cccc-cccc-ddddaaaa0680-000000",
//!     "mailer-daemon@example.com",
//!     vec![BouncedRecipientInfo::new("a@example.com", BounceType::DoesNotExist)],
//! );
//!
//! let config = ModelConfig::default();
//! let bytes = encode_request(&request, &config)?;
//! let decoded: SendBounceRequest = decode_request(&bytes)?;
//! assert_eq!(decoded, request);
//! # Ok::<(), integrations_aws_ses_model::error::SesError>(())
//! ```
//!
//! [`ValidationMode`]: crate::config::ValidationMode

use crate::config::ModelConfig;
use crate::error::{SesError, SesResult};
use crate::operations::SesOperation;
use crate::validation::enforce;

/// Validate `request` and encode it as JSON.
///
/// # Errors
///
/// Returns [`SesError::ValidationFailed`] in strict mode if the request
/// violates a service constraint, or [`SesError::Serialization`] if encoding
/// fails.
pub fn encode_request<O: SesOperation>(request: &O, config: &ModelConfig) -> SesResult<Vec<u8>> {
    enforce(request, config)?;
    let bytes = serde_json::to_vec(request).map_err(|e| SesError::Serialization {
        message: format!("Failed to serialize {} request: {}", O::ACTION, e),
    })?;
    tracing::debug!(action = O::ACTION, bytes = bytes.len(), "encoded request");
    Ok(bytes)
}

/// Decode a request previously produced by [`encode_request`].
///
/// Decoding does not validate; call [`enforce`] if the source is untrusted.
///
/// # Errors
///
/// Returns [`SesError::Serialization`] if the payload does not match the
/// request shape, including variant records with zero or several members.
pub fn decode_request<O: SesOperation>(bytes: &[u8]) -> SesResult<O> {
    let request = serde_json::from_slice(bytes).map_err(|e| SesError::Serialization {
        message: format!("Failed to deserialize {} request: {}", O::ACTION, e),
    })?;
    tracing::debug!(action = O::ACTION, bytes = bytes.len(), "decoded request");
    Ok(request)
}

/// Encode the result of operation `O`.
///
/// # Errors
///
/// Returns [`SesError::Serialization`] if encoding fails.
pub fn encode_output<O: SesOperation>(output: &O::Output) -> SesResult<Vec<u8>> {
    let bytes = serde_json::to_vec(output).map_err(|e| SesError::Serialization {
        message: format!("Failed to serialize {} result: {}", O::ACTION, e),
    })?;
    tracing::debug!(action = O::ACTION, bytes = bytes.len(), "encoded result");
    Ok(bytes)
}

/// Decode the result of operation `O`.
///
/// # Errors
///
/// Returns [`SesError::Serialization`] if the payload does not match the
/// result shape.
pub fn decode_output<O: SesOperation>(bytes: &[u8]) -> SesResult<O::Output> {
    let output = serde_json::from_slice(bytes).map_err(|e| SesError::Serialization {
        message: format!("Failed to deserialize {} result: {}", O::ACTION, e),
    })?;
    tracing::debug!(action = O::ACTION, bytes = bytes.len(), "decoded result");
    Ok(output)
}
