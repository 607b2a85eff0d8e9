//! Library-level tests for the renderer: failure propagation and the
//! classification of a mid-sequence write error.

use std::io::{self, Write};

use agent_migrate::config::Settings;
use agent_migrate::errors::MigrateError;
use agent_migrate::instructions::{write_instructions, SQL_FILE_PATH};
use agent_migrate::migration::{AGENT_DASHBOARD_SQL, TABLES};

/// Writer that accepts a fixed number of bytes, then fails every write.
struct FailingWriter {
    capacity: usize,
    written: usize,
}

impl FailingWriter {
    fn new(capacity: usize) -> Self {
        Self { capacity, written: 0 }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.capacity {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "forced write failure",
            ));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_mid_sequence_maps_to_exit_code_one() {
    // Enough room for the banner, not for the method blocks.
    let mut out = FailingWriter::new(120);
    let io_err = write_instructions(&mut out, &Settings::default())
        .expect_err("writer failure must propagate");

    let err = MigrateError::from(io_err);
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("forced write failure"));
}

#[test]
fn write_failure_on_first_byte_still_propagates() {
    let mut out = FailingWriter::new(0);
    assert!(write_instructions(&mut out, &Settings::default()).is_err());
}

#[test]
fn rendered_instructions_and_payload_stay_consistent() {
    let mut buf = Vec::new();
    write_instructions(&mut buf, &Settings::default()).unwrap();
    let out = String::from_utf8(buf).unwrap();

    // The instructions point at a file said to hold this payload; both
    // sides must keep naming the same tables and path.
    assert!(out.contains(SQL_FILE_PATH));
    for table in TABLES {
        assert!(
            AGENT_DASHBOARD_SQL.contains(table),
            "payload lost table {}",
            table
        );
    }

    // Structural shape of the payload, counted as plain text.
    assert_eq!(AGENT_DASHBOARD_SQL.matches("CREATE TABLE IF NOT EXISTS").count(), 3);
    assert_eq!(AGENT_DASHBOARD_SQL.matches("CREATE INDEX IF NOT EXISTS").count(), 3);
    assert_eq!(
        AGENT_DASHBOARD_SQL.matches("DISABLE ROW LEVEL SECURITY").count(),
        3
    );
}

#[test]
fn rendering_needs_no_runtime_or_client() {
    // Rendering into a plain buffer is the whole operation; if this test
    // runs, no async runtime, socket, or HTTP client was involved.
    let mut buf = Vec::new();
    write_instructions(&mut buf, &Settings::default()).unwrap();
    assert!(!buf.is_empty());
}
