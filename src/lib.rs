//! Calendar-card headers for notebooks
//!
//! From an evcxr notebook:
//!
//! ```no_run
//! hcard::hc("Experiment Log", &["ml", "v2"], Some("http://example.com")).unwrap();
//! ```

pub mod config;
pub mod display;
pub mod header;
pub mod theme;

pub use display::{Capture, Display, DisplayError, OutputFormat};
pub use header::{hc, HeaderCard, Stamp};
pub use theme::Theme;
