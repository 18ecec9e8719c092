//! Shared output formatting helpers for commands

pub mod status;

pub use status::{cancelled, print_json, print_json_status};
