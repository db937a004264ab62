//! Config module tests
//!
//! - Line parser tests (delimiters, fields, both shapes)
//! - Document tests (comments, line endings, document invariants)
//! - Config manager tests (encodings, atomic writes, backups)
//! - Store tests (atomic reload, dispatch)

#[cfg(test)]
mod config_manager_tests;
#[cfg(test)]
mod store_tests;
