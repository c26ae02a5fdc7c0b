//! Best-effort release of resources on cleanup paths.
//!
//! Close failures here are reported to a [`CloseDiagnostics`] sink and then
//! dropped, so they never replace the outcome of the operation that owned
//! the resource.

// crates/infra/src/resource.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use commons_kit_ports::diagnostics::CloseDiagnostics;
use log::warn;

pub mod closer;
pub mod guard;

pub use closer::{ResourceCloser, close_quietly};
pub use guard::ReleaseGuard;

/// A resource with a fallible release step.
pub trait Closeable {
    fn close(&mut self) -> io::Result<()>;
}

impl Closeable for File {
    /// Flushes data and metadata to disk; the descriptor itself goes on drop.
    fn close(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

impl<W: Write> Closeable for BufWriter<W> {
    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl<T: Closeable + ?Sized> Closeable for Box<T> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<T: Closeable + ?Sized> Closeable for &mut T {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Default sink: one `warn` record per failure through the `log` facade.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogDiagnostics;

impl CloseDiagnostics for LogDiagnostics {
    fn close_failed(&self, resource: &str, error: &io::Error) {
        warn!("error closing {resource} (the client may have aborted): {error}");
    }
}
