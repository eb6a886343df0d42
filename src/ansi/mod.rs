//! Escape-sequence stripping ahead of width measurement.
//!
//! `strip_ansi` implements the lightweight `ESC ... m` scanner used by the
//! table-driven estimator. `strip_ansi_complete` runs a full VT parser and
//! backs the library width strategy.

mod core;

pub use self::core::{
    ESC, SGR_TERMINATOR, contains_ansi, strip_ansi, strip_ansi_complete, strip_ansi_cow,
};
