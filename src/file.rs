//! Purpose: Bridge on-disk JSON/JSON5 text and application-defined typed records.
//! Exports: `load`, `load_document`, `save`, `save_pretty`.
//! Role: Public facade; each call is a one-shot, stateless transformation.
//! Invariants: File handles are scoped per call and released on every exit path.
//! Invariants: Reads accept JSON5; writes emit strict JSON and land via atomic rename.
//! Invariants: Parse failures and schema mismatches surface as distinct error kinds.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::error::{Error, ErrorKind, io_error_kind};
use crate::json::parse;

/// Reads the file at `path`, parses it as JSON5, and maps the resulting
/// document into a `T`.
///
/// Unknown fields in the document are ignored unless `T` opts into rejection
/// with `#[serde(deny_unknown_fields)]`.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let path = path.as_ref();
    let document = load_document(path)?;
    let record = parse::record_from_document(document).map_err(|err| {
        Error::new(ErrorKind::Schema)
            .with_message(err.to_string())
            .with_path(path)
    })?;
    debug!(path = %path.display(), "loaded typed record");
    Ok(record)
}

/// Reads the file at `path` and parses it as JSON5 into a generic document,
/// skipping the typed mapping step.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| {
        let kind = io_error_kind(&err);
        Error::new(kind).with_path(path).with_source(err)
    })?;
    let document = parse::document_from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message(err.to_string())
            .with_path(path)
    })?;
    debug!(path = %path.display(), bytes = text.len(), "parsed document");
    Ok(document)
}

/// Serializes `record` as compact strict JSON and writes it to `path`,
/// replacing any existing content.
pub fn save<T: Serialize>(path: impl AsRef<Path>, record: &T) -> Result<(), Error> {
    write_record(path.as_ref(), record, false)
}

/// Like [`save`], with two-space-indented output for human-edited files.
pub fn save_pretty<T: Serialize>(path: impl AsRef<Path>, record: &T) -> Result<(), Error> {
    write_record(path.as_ref(), record, true)
}

fn write_record<T: Serialize>(path: &Path, record: &T, pretty: bool) -> Result<(), Error> {
    let document = parse::document_from_record(record).map_err(|err| {
        Error::new(ErrorKind::Schema)
            .with_message(err.to_string())
            .with_path(path)
    })?;
    let mut text = if pretty {
        parse::render_document_pretty(&document)
    } else {
        parse::render_document(&document)
    };
    text.push('\n');
    write_atomic(path, text.as_bytes())?;
    debug!(path = %path.display(), bytes = text.len(), "saved record");
    Ok(())
}

// Write-to-temp-then-rename in the target's directory so a failure mid-write
// never truncates the target and concurrent savers never interleave.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| {
        let kind = io_error_kind(&err);
        Error::new(kind).with_path(path).with_source(err)
    })?;
    tmp.write_all(bytes).map_err(|err| {
        let kind = io_error_kind(&err);
        Error::new(kind).with_path(path).with_source(err)
    })?;
    tmp.flush().map_err(|err| {
        let kind = io_error_kind(&err);
        Error::new(kind).with_path(path).with_source(err)
    })?;
    tmp.persist(path).map_err(|err| {
        let kind = io_error_kind(&err.error);
        Error::new(kind).with_path(path).with_source(err.error)
    })?;
    Ok(())
}
