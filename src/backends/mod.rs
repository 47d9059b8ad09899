//! Backend implementations for the delivery contract.
//!
//! - [`sqs`] - Production backend over AWS SQS
//! - [`memory`] - In-memory backend for testing and development

pub mod memory;
pub mod sqs;

pub use memory::InMemoryBackend;
pub use sqs::SqsBackend;
