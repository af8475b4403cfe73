//! Persistence port for the macro collection.
//!
//! # Design
//! - Reads prefer the primary sink; any primary failure falls back, and a
//!   fallback failure yields an empty collection.
//! - Writes go to both sinks independently. Failures are logged and returned
//!   in a [`WriteOutcome`]; nothing is propagated.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::core::macros::model::Macro;
use crate::error::StorageError;

/// One key-value backend for the macro collection.
pub trait MacroSink {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Read the collection stored under `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the backend is unavailable or the
    /// payload cannot be decoded.
    fn read(&self, key: &str) -> Result<Option<Vec<Macro>>, StorageError>;

    /// Replace the collection stored under `key`.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the backend is unavailable or rejects the write.
    fn write(&self, key: &str, macros: &[Macro]) -> Result<(), StorageError>;
}

/// Per-sink results of a best-effort write.
#[derive(Debug)]
pub struct WriteOutcome {
    /// Result of writing the primary sink.
    pub primary: Result<(), StorageError>,
    /// Result of writing the fallback sink.
    pub fallback: Result<(), StorageError>,
}

impl WriteOutcome {
    /// Whether at least one sink accepted the write.
    #[must_use]
    pub const fn persisted(&self) -> bool {
        self.primary.is_ok() || self.fallback.is_ok()
    }

    /// Whether every sink accepted the write.
    #[must_use]
    pub const fn complete(&self) -> bool {
        self.primary.is_ok() && self.fallback.is_ok()
    }
}

/// Primary then fallback persistence for the macro collection.
pub struct MacroPort {
    primary: Box<dyn MacroSink>,
    fallback: Box<dyn MacroSink>,
}

impl MacroPort {
    /// Order two sinks as primary and fallback.
    #[must_use]
    pub fn new(primary: Box<dyn MacroSink>, fallback: Box<dyn MacroSink>) -> Self {
        Self { primary, fallback }
    }

    /// Load the collection, never failing.
    #[must_use]
    pub fn load(&self, key: &str) -> Vec<Macro> {
        match self.primary.read(key) {
            Ok(stored) => return stored.unwrap_or_default(),
            Err(err) => log_failure("read", &err),
        }
        match self.fallback.read(key) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                log_failure("read", &err);
                Vec::new()
            }
        }
    }

    /// Write the collection to both sinks.
    pub fn save(&self, key: &str, macros: &[Macro]) -> WriteOutcome {
        let outcome = WriteOutcome {
            primary: self.primary.write(key, macros),
            fallback: self.fallback.write(key, macros),
        };
        for err in [&outcome.primary, &outcome.fallback]
            .into_iter()
            .filter_map(|result| result.as_ref().err())
        {
            log_failure("write", err);
        }
        outcome
    }
}

fn log_failure(operation: &'static str, err: &StorageError) {
    warn!(operation, sink = err.sink(), error = %err, "macro storage operation failed");
}

/// In-process sink holding JSON payloads.
///
/// Clones share the same slots, so several stores can observe one backend.
#[derive(Clone, Debug)]
pub struct MemorySink {
    name: &'static str,
    slots: Rc<RefCell<HashMap<String, String>>>,
    available: bool,
    writable: bool,
}

impl MemorySink {
    /// Empty, working sink.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: Rc::default(),
            available: true,
            writable: true,
        }
    }

    /// Sink whose backend is missing entirely.
    #[must_use]
    pub fn unavailable(name: &'static str) -> Self {
        Self {
            available: false,
            ..Self::new(name)
        }
    }

    /// Sink that reads normally but rejects writes.
    #[must_use]
    pub fn read_only(name: &'static str) -> Self {
        Self {
            writable: false,
            ..Self::new(name)
        }
    }

    /// Raw payload stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Store a raw payload under `key`, bypassing encoding.
    pub fn put_raw(&self, key: &str, payload: impl Into<String>) {
        self.slots.borrow_mut().insert(key.to_string(), payload.into());
    }
}

impl MacroSink for MemorySink {
    fn name(&self) -> &'static str {
        self.name
    }

    fn read(&self, key: &str) -> Result<Option<Vec<Macro>>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable { sink: self.name });
        }
        self.raw(key)
            .map(|payload| serde_json::from_str(&payload))
            .transpose()
            .map_err(|source| StorageError::Decode {
                sink: self.name,
                source,
            })
    }

    fn write(&self, key: &str, macros: &[Macro]) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable { sink: self.name });
        }
        if !self.writable {
            return Err(StorageError::Write {
                sink: self.name,
                detail: "read-only".to_string(),
            });
        }
        let payload = serde_json::to_string(macros).map_err(|source| StorageError::Encode {
            sink: self.name,
            source,
        })?;
        self.put_raw(key, payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{DecorationSet, Label};

    const KEY: &str = "cc-macros";

    fn preset(id: &str) -> Macro {
        Macro {
            id: id.to_string(),
            name: format!("macro-{id}"),
            label: Label::Note,
            decorations: DecorationSet::new(),
            body: String::new(),
        }
    }

    fn port(primary: &MemorySink, fallback: &MemorySink) -> MacroPort {
        MacroPort::new(Box::new(primary.clone()), Box::new(fallback.clone()))
    }

    #[test]
    fn primary_wins_when_available() {
        let primary = MemorySink::new("primary");
        let fallback = MemorySink::new("fallback");
        primary.put_raw(KEY, r#"[{"id":"p","name":"p","label":"note"}]"#);
        fallback.put_raw(KEY, r#"[{"id":"f","name":"f","label":"note"}]"#);
        let loaded = port(&primary, &fallback).load(KEY);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "p");
    }

    #[test]
    fn empty_primary_does_not_consult_fallback() {
        let primary = MemorySink::new("primary");
        let fallback = MemorySink::new("fallback");
        fallback.put_raw(KEY, r#"[{"id":"f","name":"f","label":"note"}]"#);
        assert!(port(&primary, &fallback).load(KEY).is_empty());
    }

    #[test]
    fn unavailable_primary_falls_back() {
        let primary = MemorySink::unavailable("primary");
        let fallback = MemorySink::new("fallback");
        fallback.put_raw(KEY, r#"[{"id":"f","name":"f","label":"note"}]"#);
        let loaded = port(&primary, &fallback).load(KEY);
        assert_eq!(loaded[0].id, "f");
    }

    #[test]
    fn corrupt_payloads_read_as_empty() {
        let primary = MemorySink::new("primary");
        let fallback = MemorySink::new("fallback");
        primary.put_raw(KEY, "{not json");
        fallback.put_raw(KEY, r#"[{"id":"f","name":"f","label":"bikeshed"}]"#);
        assert!(port(&primary, &fallback).load(KEY).is_empty());
    }

    #[test]
    fn writes_reach_both_sinks_independently() {
        let primary = MemorySink::unavailable("primary");
        let fallback = MemorySink::new("fallback");
        let outcome = port(&primary, &fallback).save(KEY, &[preset("1")]);
        assert!(matches!(outcome.primary, Err(StorageError::Unavailable { .. })));
        assert!(outcome.fallback.is_ok());
        assert!(outcome.persisted());
        assert!(!outcome.complete());
        assert!(fallback.raw(KEY).is_some());
    }

    #[test]
    fn failing_fallback_does_not_block_primary() {
        let primary = MemorySink::new("primary");
        let fallback = MemorySink::read_only("fallback");
        let outcome = port(&primary, &fallback).save(KEY, &[preset("1")]);
        assert!(outcome.primary.is_ok());
        assert!(matches!(outcome.fallback, Err(StorageError::Write { .. })));
        assert!(primary.raw(KEY).is_some());
        assert!(fallback.raw(KEY).is_none());
    }
}
