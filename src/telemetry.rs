//! `tracing` subscriber setup for the server and the browser.

/// Install the global subscriber for the server binary.
///
/// `RUST_LOG` wins over `default_filter`.
#[cfg(feature = "ssr")]
pub fn init_server(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

/// Install a subscriber that writes formatted events to the browser console.
#[cfg(feature = "hydrate")]
pub fn init_browser() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("docs_search=info"))
        .with_ansi(false)
        .without_time()
        .with_writer(console::ConsoleMakeWriter)
        .try_init();
}

/// Browser console method an event of a given level is printed with.
#[cfg(any(feature = "hydrate", test))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

#[cfg(any(feature = "hydrate", test))]
impl ConsoleMethod {
    fn for_level(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => ConsoleMethod::Error,
            tracing::Level::WARN => ConsoleMethod::Warn,
            _ => ConsoleMethod::Log,
        }
    }
}

#[cfg(feature = "hydrate")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;

    use super::ConsoleMethod;

    /// Hands out one [`ConsoleWriter`] per event, keyed by the event level.
    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(ConsoleMethod::Log)
        }

        fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
        }
    }

    /// Buffers one formatted event and prints it to the console on drop.
    pub struct ConsoleWriter {
        method: ConsoleMethod,
        buf: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(method: ConsoleMethod) -> Self {
            Self {
                method,
                buf: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end();
            if line.is_empty() {
                return;
            }
            let line = wasm_bindgen::JsValue::from_str(line);
            match self.method {
                ConsoleMethod::Error => web_sys::console::error_1(&line),
                ConsoleMethod::Warn => web_sys::console::warn_1(&line),
                ConsoleMethod::Log => web_sys::console::log_1(&line),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_errors_and_warnings_get_their_own_console_method() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Log);
    }
}
