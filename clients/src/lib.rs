//! Terminal front end for the basic geometry ontology viewer.
//!
//! The `geo-viewer` binary is a thin wrapper around this library:
//! [`config`] resolves where the ontology lives, [`render`] turns query
//! results into text or JSON, [`calc`] runs the shape calculator, and
//! [`session`] runs the interactive browse loop in which class and
//! individual selections drive the facade queries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod calc;
pub mod config;
pub mod render;
pub mod session;

pub use calc::Failure;
pub use config::{Overrides, ViewerConfig};
pub use render::OutputMode;
pub use session::{Command, Reply, Session};
