//! `optionals-core` -- optional-value handling and guard clauses.
//!
//! Pure logic with no I/O: callers decide whether to print, log, or
//! serialize what these functions return.

pub mod error;
pub mod filter;
pub mod form;
pub mod guards;
