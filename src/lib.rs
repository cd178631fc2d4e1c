//! Purpose: Typed JSON/JSON5 file handling built on serde.
//! Exports: `load`, `load_document`, `save`, `save_pretty`, `Error`, `ErrorKind`.
//! Role: Thin facade over a JSON5 parser and serde mapping; no state between calls.
//! Invariants: JSON5 is accepted on read; strict JSON is emitted on write.
//! Invariants: Every failure surfaces synchronously as a distinguishable `ErrorKind`.

pub mod core;
pub mod file;
pub(crate) mod json;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::file::{load, load_document, save, save_pretty};
