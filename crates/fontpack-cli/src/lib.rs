//! fontpack CLI library.
//!
//! Argument parsing, the convert command and the C/JSON emitters, kept in
//! a library so tests can drive them without spawning the binary.

pub mod cli_args;
pub mod commands;
pub mod emit;
pub mod logging;
