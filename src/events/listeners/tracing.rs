use async_trait::async_trait;

use crate::events::{AuthEvent, Listener};

/// Emits authentication events as tracing events.
///
/// Requires the `tracing` feature to be enabled.
///
/// # Example
///
/// ```rust,ignore
/// use ecosort_auth::register_event_listeners;
/// use ecosort_auth::events::listeners::TracingListener;
///
/// register_event_listeners(|registry| {
///     registry.listen(TracingListener);
/// });
/// ```
pub struct TracingListener;

#[async_trait]
impl Listener for TracingListener {
    async fn handle(&self, event: &AuthEvent) {
        tracing::info!(
            target: "ecosort_auth::events",
            event_name = event.name(),
            ?event,
            "auth event"
        );
    }
}
