/// Side channel for user-facing error messages. Fire-and-forget: nothing is returned.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

pub mod in_memory;
pub mod tracing_notifier;
