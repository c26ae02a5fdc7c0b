use std::{
    fs::File,
    io::{self, Write},
    sync::Mutex,
};

use commons_kit::{CloseDiagnostics, Closeable, ReleaseGuard, ResourceCloser, close_quietly};

use crate::common::TempTree;

#[derive(Default)]
struct Collected(Mutex<Vec<(String, io::ErrorKind)>>);

impl CloseDiagnostics for Collected {
    fn close_failed(&self, resource: &str, error: &io::Error) {
        self.0.lock().unwrap().push((resource.to_string(), error.kind()));
    }
}

struct BrokenPipe;

impl Closeable for BrokenPipe {
    fn close(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn closes_real_file_quietly() {
    let tree = TempTree::new();
    let mut file = File::create(tree.join("out.txt")).unwrap();
    file.write_all(b"done").unwrap();

    let sink = Collected::default();
    ResourceCloser::with_sink(&sink).close_quietly(Some(file));

    assert!(sink.0.lock().unwrap().is_empty());
    assert_eq!(std::fs::read(tree.join("out.txt")).unwrap(), b"done");
}

#[test]
fn failing_close_never_reaches_the_caller() {
    close_quietly(Some(BrokenPipe));
    close_quietly(None::<File>);

    let sink = Collected::default();
    let closer = ResourceCloser::with_sink(&sink);
    closer.close_labeled("download", Some(BrokenPipe));
    closer.close_quietly(Some(Box::new(BrokenPipe) as Box<dyn Closeable>));

    assert_eq!(
        *closer.sink().0.lock().unwrap(),
        vec![("download".to_string(), io::ErrorKind::BrokenPipe), ("resource".to_string(), io::ErrorKind::BrokenPipe)]
    );
}

#[test]
fn guard_keeps_primary_error() {
    fn copy_report(sink: &Collected) -> Result<(), String> {
        let _pipe = ReleaseGuard::with_sink(BrokenPipe, "report pipe", |mut p| p.close(), sink);
        Err("report generation failed".into())
    }

    let sink = Collected::default();
    assert_eq!(copy_report(&sink), Err("report generation failed".to_string()));
    assert_eq!(sink.0.lock().unwrap().len(), 1);
}
