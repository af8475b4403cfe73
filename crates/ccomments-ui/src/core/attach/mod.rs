//! Discovery and attachment of toolbars to host comment fields.
//!
//! # Design
//! - The host document is reached only through [`DocumentHost`], so the
//!   reconcile logic runs natively against a fake host in tests.
//! - Bound fields are tracked in an explicit map keyed by [`FieldId`] rather
//!   than flags on host elements.
//! - Every trigger converges on one reconcile pass that is safe to repeat.

pub mod host;
pub mod manager;

pub use host::{DocumentHost, FieldId, Placement};
pub use manager::{AttachmentManager, ReconcileReport, Trigger};
