//! Command implementations behind the `adjgraph` binary.

pub mod commands;
