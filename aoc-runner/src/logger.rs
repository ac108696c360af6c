//! Human-readable run logger
//!
//! Every line has the shape `<timestamp> | [<prefix>] | <objects> | <fields>`.
//! The object and field sections are omitted when empty.

use chrono::{DateTime, Local};
use std::fmt::{Debug, Display, Write as _};
use std::sync::{Arc, Mutex};

/// A named value attached to a log line
pub type Field<'a> = (&'a str, &'a dyn Debug);

/// Timestamp layout used at the start of every line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    Capture(Arc<Mutex<Vec<String>>>),
}

/// Logger shared between the runner and solutions that ask for it
///
/// Cloning is cheap; clones write to the same sink.
#[derive(Debug, Clone)]
pub struct Logger {
    sink: Sink,
}

/// Handle to the lines recorded by a capturing [`Logger`]
#[derive(Debug, Clone)]
pub struct CapturedLines(Arc<Mutex<Vec<String>>>);

impl CapturedLines {
    /// Snapshot of every line logged so far
    pub fn lines(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Logger {
    /// Logger printing to standard output
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// Logger recording lines in memory instead of printing them
    pub fn capture() -> (Self, CapturedLines) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                sink: Sink::Capture(Arc::clone(&lines)),
            },
            CapturedLines(lines),
        )
    }

    /// Log at the informational prefix
    pub fn info(&self, objects: &[&dyn Debug], fields: &[Field<'_>]) {
        self.emit("INFO", objects, fields);
    }

    /// Log at the error prefix, embedding `error` in it
    ///
    /// Only records the line. The caller is responsible for returning the error.
    pub fn error(&self, error: &dyn Display, objects: &[&dyn Debug], fields: &[Field<'_>]) {
        self.emit(&format!("ERROR:{}", error), objects, fields);
    }

    fn emit(&self, prefix: &str, objects: &[&dyn Debug], fields: &[Field<'_>]) {
        let line = format_line(Local::now(), prefix, objects, fields);
        match &self.sink {
            Sink::Stdout => println!("{}", line),
            Sink::Capture(lines) => lines
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(line),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout()
    }
}

/// Render a single log line
pub fn format_line(
    timestamp: DateTime<Local>,
    prefix: &str,
    objects: &[&dyn Debug],
    fields: &[Field<'_>],
) -> String {
    let mut line = format!("{} | [{}]", timestamp.format(TIMESTAMP_FORMAT), prefix);

    if !objects.is_empty() {
        line.push_str(" | ");
        for (i, object) in objects.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            let _ = write!(line, "{:?}", object);
        }
    }

    if !fields.is_empty() {
        line.push_str(" | {");
        for (i, (key, value)) in fields.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            let _ = write!(line, "{}: {:?}", key, value);
        }
        line.push('}');
    }

    line
}
