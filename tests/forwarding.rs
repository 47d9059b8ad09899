//! End-to-end forwarding tests through the public API, using the in-memory
//! backend in place of a live queue service.

use queue_forwarder::{
    ForwardError, ForwarderConfig, ForwarderFactory, InMemoryBackend, MAX_MESSAGE_SIZE,
};
use std::sync::Arc;

#[tokio::test]
async fn forwards_messages_to_the_configured_queue() {
    let backend = Arc::new(InMemoryBackend::new());
    let config = ForwarderConfig::new("orders", "orders-queue");
    let forwarder = ForwarderFactory::create_with_backend(config, backend.clone());

    forwarder.push("order created").await.expect("push should succeed");
    forwarder.push("order shipped").await.expect("push should succeed");

    assert_eq!(
        backend.messages("orders-queue").await,
        vec!["order created".to_string(), "order shipped".to_string()]
    );
}

#[tokio::test]
async fn rejects_empty_messages_without_delivering() {
    let backend = Arc::new(InMemoryBackend::new());
    let config = ForwarderConfig::new("orders", "orders-queue");
    let forwarder = ForwarderFactory::create_with_backend(config, backend.clone());

    let result = forwarder.push("").await;

    assert!(matches!(result, Err(ForwardError::EmptyMessage)));
    assert_eq!(backend.total_sent().await, 0);
}

#[tokio::test]
async fn drops_oversized_messages_without_delivering() {
    let backend = Arc::new(InMemoryBackend::new());
    let config = ForwarderConfig::new("orders", "orders-queue");
    let forwarder = ForwarderFactory::create_with_backend(config, backend.clone());
    let oversized = "x".repeat(MAX_MESSAGE_SIZE + 1);

    let result = forwarder.push(&oversized).await;

    // Drop-and-continue policy: the caller sees success even though nothing
    // reached the queue.
    assert!(result.is_ok());
    assert_eq!(backend.total_sent().await, 0);
}

#[tokio::test]
async fn two_forwarders_share_a_backend_without_crosstalk() {
    let backend = Arc::new(InMemoryBackend::new());
    let orders = ForwarderFactory::create_with_backend(
        ForwarderConfig::new("orders", "orders-queue"),
        backend.clone(),
    );
    let invoices = ForwarderFactory::create_with_backend(
        ForwarderConfig::new("invoices", "invoices-queue"),
        backend.clone(),
    );

    orders.push("o1").await.expect("push should succeed");
    invoices.push("i1").await.expect("push should succeed");
    orders.push("o2").await.expect("push should succeed");

    assert_eq!(
        backend.messages("orders-queue").await,
        vec!["o1".to_string(), "o2".to_string()]
    );
    assert_eq!(
        backend.messages("invoices-queue").await,
        vec!["i1".to_string()]
    );
}
