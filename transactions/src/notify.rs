use derive_more::Display;

/// Severity of a user-facing notice. Displays as the notice title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NoticeLevel {
    Error,
    Success,
}

/// Surfaces short messages to the user without blocking.
pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Records failures for later diagnosis.
pub trait DiagnosticLog {
    fn log(&self, context: &str, detail: &str);
}

/// Notifier for headless use: notices go to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Error => tracing::warn!(title = %level, "{message}"),
            NoticeLevel::Success => {
                tracing::info!(title = %level, "{message}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn log(&self, context: &str, detail: &str) {
        tracing::error!("{context}: {detail}");
    }
}
