//! Intake CLI — command implementations shared by the `intake` binary and
//! the integration tests.

pub mod commands;
