//! Sinks for informational notices

/// Trait for receiving informational notices
pub trait Diagnostics: Send + Sync {
    /// Emit an informational message
    fn notice(&self, message: &str);
}

/// Emits notices as `tracing` info events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn notice(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Discards every notice
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn notice(&self, _message: &str) {}
}
