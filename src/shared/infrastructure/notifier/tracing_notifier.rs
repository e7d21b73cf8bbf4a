use crate::shared::infrastructure::notifier::Notifier;

/// Emits user-facing messages as `warn` events under the `cart::notifier` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::warn!(target: "cart::notifier", "{message}");
    }
}
