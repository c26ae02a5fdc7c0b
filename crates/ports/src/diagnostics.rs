// crates/ports/src/diagnostics.rs
use std::io;

/// Receives release failures that are deliberately not propagated.
pub trait CloseDiagnostics: Send + Sync {
    /// `resource` is a short human label such as a path or `"response stream"`.
    fn close_failed(&self, resource: &str, error: &io::Error);
}

impl<T: CloseDiagnostics + ?Sized> CloseDiagnostics for &T {
    fn close_failed(&self, resource: &str, error: &io::Error) {
        (**self).close_failed(resource, error);
    }
}

impl<T: CloseDiagnostics + ?Sized> CloseDiagnostics for std::sync::Arc<T> {
    fn close_failed(&self, resource: &str, error: &io::Error) {
        (**self).close_failed(resource, error);
    }
}
