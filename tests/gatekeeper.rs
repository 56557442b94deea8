use std::io;
use std::sync::{Arc, Mutex};

use supatrack::{Config, Handle, ANON_KEY_VAR, ENDPOINT_VAR};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted tracing output so tests can count emitted warnings.
#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, writer.contents())
}

// Both scenarios share the process environment, so they live in one test
// rather than racing each other across threads.
#[test]
fn gate_follows_the_environment() {
    std::env::set_var(ENDPOINT_VAR, "http://localhost:9999");
    std::env::set_var(ANON_KEY_VAR, "k");

    let (handle, output) = capture(Handle::from_env);
    let client = handle.client().expect("valid environment should enable the client");
    assert_eq!(client.endpoint().as_str(), "http://localhost:9999/");
    assert_eq!(client.anon_key(), "k");
    assert!(!output.contains("tracking disabled"));

    std::env::remove_var(ENDPOINT_VAR);
    std::env::remove_var(ANON_KEY_VAR);

    let (handle, output) = capture(Handle::from_env);
    assert!(handle.client().is_none());
    assert_eq!(output.matches("tracking disabled").count(), 1);
}

#[test]
fn disabled_gate_warns_exactly_once() {
    let (handle, output) = capture(|| Handle::from_config(Config::new("", "")));
    assert!(!handle.is_enabled());
    assert_eq!(
        output
            .matches("Supabase credentials missing or invalid")
            .count(),
        1
    );
}

#[test]
fn enabled_gate_stays_silent() {
    let (handle, output) = capture(|| {
        Handle::from_config(Config::new("https://example.supabase.co", "abc123"))
    });
    assert!(handle.is_enabled());
    assert!(output.is_empty());
}

#[test]
fn init_decides_once_per_process() {
    let first = supatrack::init();
    let second = supatrack::init();
    assert!(std::ptr::eq(first, second));

    // A later init_with cannot revisit the decision.
    let third = supatrack::init_with(Config::new("https://example.supabase.co", "abc123"));
    assert!(std::ptr::eq(first, third));
    assert!(std::ptr::eq(first, supatrack::get()));
    assert_eq!(supatrack::client().is_some(), first.is_enabled());
}
