// crates/infra/src/resource/closer.rs
use commons_kit_ports::diagnostics::CloseDiagnostics;

use super::{Closeable, LogDiagnostics};

/// Closes optional resources and swallows the failures.
#[derive(Debug, Default, Clone)]
pub struct ResourceCloser<S = LogDiagnostics> {
    sink: S,
}

impl ResourceCloser {
    pub const fn new() -> Self {
        Self { sink: LogDiagnostics }
    }
}

impl<S: CloseDiagnostics> ResourceCloser<S> {
    pub const fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// `None` is a no-op. A failed close goes to the sink and is not returned.
    pub fn close_quietly<R: Closeable>(&self, resource: Option<R>) {
        self.close_labeled("resource", resource);
    }

    /// Like [`close_quietly`](Self::close_quietly), with a label for the diagnostics.
    pub fn close_labeled<R: Closeable>(&self, label: &str, resource: Option<R>) {
        let Some(mut resource) = resource else {
            return;
        };
        if let Err(err) = resource.close() {
            self.sink.close_failed(label, &err);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Closes `resource` if present, logging failures at `warn` level.
pub fn close_quietly<R: Closeable>(resource: Option<R>) {
    ResourceCloser::new().close_quietly(resource);
}
