//! Tracing output for the hydrated client.
//!
//! The server exports spans through OpenTelemetry; in the browser the same
//! events are formatted as plain lines and handed to the console writer.

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// A plain-text subscriber writing to `writer`, without timestamps or colour.
pub fn console_subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish()
}

/// Routes client-side tracing events to the browser console.
#[cfg(feature = "hydrate")]
pub fn init_browser() {
    let subscriber = console_subscriber(tracing_subscriber_wasm::MakeConsoleWriter::default());
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        leptos::logging::warn!("tracing already initialised: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::contact::CONTACT_FIELDS;
    use crate::form::FormState;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_form_warnings_reach_the_writer() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = console_subscriber(move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut form = FormState::new(CONTACT_FIELDS);
            form.set_field("phone", "555-0100");
        });

        let output = capture.text();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("ignoring edit of unknown form field"), "{output}");
        assert!(output.contains("phone"), "{output}");
    }

    #[test]
    fn test_debug_events_are_kept() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = console_subscriber(move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut form = FormState::new(CONTACT_FIELDS);
            assert!(form.attempt_submit().is_err());
        });

        assert!(capture.text().contains("form rejected"));
    }
}
