//! Purpose: Internal JSON parsing and rendering boundary shared by file operations.
//! Exports: `parse` module with decode/encode helpers used by the facade.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: JSON5 is accepted on the decode side; only strict JSON is rendered.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
