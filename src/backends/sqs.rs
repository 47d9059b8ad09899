//! AWS SQS backend implementation.
//!
//! Wraps the official SQS SDK client. Credentials and region come from the
//! ambient environment/session configuration (environment variables, shared
//! config files, instance metadata); this module does not manage them.

use crate::backend::{MessageId, QueueBackend};
use crate::error::DeliveryError;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sqs::operation::send_message::SendMessageError;

/// Queue backend delivering to AWS SQS.
///
/// The underlying SDK client is cheap to clone and safe for concurrent use,
/// so one backend can serve many forwarders and tasks.
pub struct SqsBackend {
    client: aws_sdk_sqs::Client,
}

impl SqsBackend {
    /// Build a backend from ambient AWS environment configuration.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_sqs::Client::new(&config),
        }
    }

    /// Wrap an already-constructed SDK client.
    pub fn new(client: aws_sdk_sqs::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueBackend for SqsBackend {
    async fn send_message(&self, target: &str, body: &str) -> Result<MessageId, DeliveryError> {
        let response = self
            .client
            .send_message()
            .queue_url(target)
            .message_body(body)
            .send()
            .await
            .map_err(|err| map_send_error(target, err))?;

        // SQS always assigns a message ID on success.
        let message_id = response.message_id().unwrap_or_default().to_string();
        Ok(MessageId::from(message_id))
    }
}

/// Map an SDK send failure into the crate's delivery error taxonomy.
fn map_send_error(target: &str, err: SdkError<SendMessageError>) -> DeliveryError {
    match &err {
        SdkError::TimeoutError(_) => DeliveryError::Timeout {
            message: DisplayErrorContext(&err).to_string(),
        },
        SdkError::DispatchFailure(_) => DeliveryError::ConnectionFailed {
            message: DisplayErrorContext(&err).to_string(),
        },
        SdkError::ServiceError(service_err) if service_err.err().is_queue_does_not_exist() => {
            DeliveryError::QueueNotFound {
                target: target.to_string(),
            }
        }
        _ => {
            let code = err.code().unwrap_or("Unknown").to_string();
            let message = err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
            DeliveryError::Provider {
                provider: "sqs".to_string(),
                code,
                message,
            }
        }
    }
}
