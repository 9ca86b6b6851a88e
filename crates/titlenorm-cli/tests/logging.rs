//! End-to-end check that the logging setup captures per-stage output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use titlenorm_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use titlenorm_core::Normaliser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        let guard = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&guard).into_owned()
    }
}

struct CaptureGuard {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureGuard;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureGuard {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

// Single test: the global subscriber can only be installed once per process.
#[test]
fn stage_logs_reach_the_configured_writer() {
    let writer = CaptureWriter::default();
    let config = LogConfig {
        level_filter: LevelFilter::TRACE,
        use_env_filter: false,
        format: LogFormat::Compact,
        with_ansi: false,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, writer.clone());

    let normaliser = Normaliser::with_defaults().unwrap();
    let output = normaliser.normalise("victoria police").unwrap();
    assert_eq!(output, "vic police");

    let logs = writer.contents();
    // Every enabled stage reports at debug level.
    assert!(logs.contains("lowercase"), "missing debug line: {logs}");
    assert!(
        logs.contains("shorten_state_names"),
        "missing debug line: {logs}"
    );
    // Trace lines carry the intermediate text.
    assert!(logs.contains("vic police"), "missing trace text: {logs}");
}
