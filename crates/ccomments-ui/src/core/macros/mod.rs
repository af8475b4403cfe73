//! Named presets bundling a label, decorations and a boilerplate body.
//!
//! # Design
//! - `model` holds the persisted record and its validated draft.
//! - `port` orders persistence sinks (primary, then fallback) and reports
//!   write outcomes explicitly.
//! - `store` keeps the in-memory ordered collection and writes it whole.
//! - `form` is the data contract of the macro editing dialog.

pub mod form;
pub mod model;
pub mod port;
pub mod store;

pub use form::MacroForm;
pub use model::{Macro, MacroDraft};
pub use port::{MacroPort, MacroSink, MemorySink, WriteOutcome};
pub use store::MacroStore;
