//! Commands - intents to change state
//!
//! A command is validated when it is built, so a handler never sees one that
//! breaks a value-object rule.

pub mod profile_commands;
pub mod student_commands;
