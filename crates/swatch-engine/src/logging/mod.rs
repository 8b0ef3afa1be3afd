//! Logging utilities.
//!
//! The engine itself only talks to the `log` facade. Binaries call
//! [`init_logging`] once, early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
