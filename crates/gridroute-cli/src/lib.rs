//! gridroute CLI library.
//!
//! Command handlers, terminal detection, and output rendering for the
//! `gridroute-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
