#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Configuration for the conventional comments overlay.
//!
//! Layout: `model.rs` (typed overlay configuration and selector sets),
//! `defaults.rs` (built-in GitHub profile), `validate.rs` (validation rules),
//! `error.rs` (structured configuration errors).

pub mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{OverlayConfig, SelectorSet};
