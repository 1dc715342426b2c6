//! Configuration management.
//!
//! Application settings and XDG-compliant paths.

mod settings;

pub use settings::{AppSettings, Paths};
