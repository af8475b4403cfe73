//! DOM-free overlay logic, compiled and tested on every target.
pub mod attach;
pub mod catalog;
pub mod codec;
pub mod macros;
pub mod selection;
pub mod store;
