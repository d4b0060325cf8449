//! JSON document I/O for the host bridge.

use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Read a JSON document from `path`, or from stdin when `path` is `None`
/// or `-`.
pub fn read(path: Option<&Path>) -> Result<Value> {
    let contents = match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading document");
            std::fs::read_to_string(path)?
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse(&contents)
}

/// Parse a document; blank input is an empty object.
pub fn parse(contents: &str) -> Result<Value> {
    if contents.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_str(contents)?)
}

/// Pretty-print a document to stdout.
pub fn write(value: &Value) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
