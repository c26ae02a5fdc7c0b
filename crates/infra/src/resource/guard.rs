// crates/infra/src/resource/guard.rs
use std::{
    borrow::Cow,
    io,
    ops::{Deref, DerefMut},
};

use commons_kit_ports::diagnostics::CloseDiagnostics;

use super::{Closeable, LogDiagnostics};

/// Owns a resource and releases it when dropped.
///
/// The release step runs on every way out of the owning scope: normal end,
/// early `return`/`?`, and unwinding. Its error goes to the sink.
pub struct ReleaseGuard<T, F = fn(T) -> io::Result<()>, S = LogDiagnostics>
where
    F: FnOnce(T) -> io::Result<()>,
    S: CloseDiagnostics,
{
    resource: Option<T>,
    release: Option<F>,
    label: Cow<'static, str>,
    sink: S,
}

impl<T: Closeable> ReleaseGuard<T> {
    /// Guards a [`Closeable`], calling its `close` on drop.
    pub fn closing(resource: T, label: impl Into<Cow<'static, str>>) -> Self {
        Self::with_sink(resource, label, close_owned::<T>, LogDiagnostics)
    }
}

impl<T, F> ReleaseGuard<T, F>
where
    F: FnOnce(T) -> io::Result<()>,
{
    pub fn new(resource: T, label: impl Into<Cow<'static, str>>, release: F) -> Self {
        Self::with_sink(resource, label, release, LogDiagnostics)
    }
}

impl<T, F, S> ReleaseGuard<T, F, S>
where
    F: FnOnce(T) -> io::Result<()>,
    S: CloseDiagnostics,
{
    pub fn with_sink(resource: T, label: impl Into<Cow<'static, str>>, release: F, sink: S) -> Self {
        Self { resource: Some(resource), release: Some(release), label: label.into(), sink }
    }

    /// Hands the resource back without releasing it.
    pub fn into_inner(mut self) -> T {
        self.release = None;
        self.resource.take().expect("guard holds its resource until drop")
    }
}

impl<T, F, S> Deref for ReleaseGuard<T, F, S>
where
    F: FnOnce(T) -> io::Result<()>,
    S: CloseDiagnostics,
{
    type Target = T;

    fn deref(&self) -> &T {
        self.resource.as_ref().expect("guard holds its resource until drop")
    }
}

impl<T, F, S> DerefMut for ReleaseGuard<T, F, S>
where
    F: FnOnce(T) -> io::Result<()>,
    S: CloseDiagnostics,
{
    fn deref_mut(&mut self) -> &mut T {
        self.resource.as_mut().expect("guard holds its resource until drop")
    }
}

impl<T, F, S> Drop for ReleaseGuard<T, F, S>
where
    F: FnOnce(T) -> io::Result<()>,
    S: CloseDiagnostics,
{
    fn drop(&mut self) {
        if let (Some(resource), Some(release)) = (self.resource.take(), self.release.take())
            && let Err(err) = release(resource)
        {
            self.sink.close_failed(&self.label, &err);
        }
    }
}

fn close_owned<T: Closeable>(mut resource: T) -> io::Result<()> {
    resource.close()
}
