//! Browser persistence sinks for the macro collection.
//!
//! # Design
//! - The userscript-manager store keeps the collection as a structured value,
//!   as userscript managers store it; it is bridged through JSON text.
//! - `localStorage` keeps the collection as JSON text under the same key.

use gloo::storage::errors::StorageError as GlooStorageError;
use gloo::storage::{LocalStorage, Storage};
use js_sys::{Function, JSON, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::core::macros::{Macro, MacroSink};
use crate::error::StorageError;

const USERSCRIPT_SINK: &str = "userscript";
const LOCAL_SINK: &str = "local-storage";

/// Value store exposed by userscript managers as `GM_getValue`/`GM_setValue`.
///
/// Managers hand granted functions to the userscript wrapper as local
/// bindings, not as globals. The loader that boots the overlay must publish
/// both on `globalThis` (for example `globalThis.GM_getValue = GM_getValue;`)
/// before calling into the module; otherwise every call reports
/// [`StorageError::Unavailable`] and the collection lives in `localStorage`
/// alone.
pub(crate) struct UserscriptSink;

impl UserscriptSink {
    fn function(name: &str) -> Result<Function, StorageError> {
        Reflect::get(&js_sys::global(), &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(StorageError::Unavailable {
                sink: USERSCRIPT_SINK,
            })
    }
}

impl MacroSink for UserscriptSink {
    fn name(&self) -> &'static str {
        USERSCRIPT_SINK
    }

    fn read(&self, key: &str) -> Result<Option<Vec<Macro>>, StorageError> {
        let get = Self::function("GM_getValue")?;
        let stored = get
            .call1(&JsValue::NULL, &JsValue::from_str(key))
            .map_err(|err| StorageError::Read {
                sink: USERSCRIPT_SINK,
                detail: describe(&err),
            })?;
        if stored.is_undefined() || stored.is_null() {
            return Ok(None);
        }
        let text = match stored.as_string() {
            Some(text) => text,
            None => JSON::stringify(&stored)
                .map_err(|err| StorageError::Read {
                    sink: USERSCRIPT_SINK,
                    detail: describe(&err),
                })?
                .into(),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                sink: USERSCRIPT_SINK,
                source,
            })
    }

    fn write(&self, key: &str, macros: &[Macro]) -> Result<(), StorageError> {
        let set = Self::function("GM_setValue")?;
        let text = serde_json::to_string(macros).map_err(|source| StorageError::Encode {
            sink: USERSCRIPT_SINK,
            source,
        })?;
        let write_failed = |err: JsValue| StorageError::Write {
            sink: USERSCRIPT_SINK,
            detail: describe(&err),
        };
        let value = JSON::parse(&text).map_err(write_failed)?;
        set.call2(&JsValue::NULL, &JsValue::from_str(key), &value)
            .map(drop)
            .map_err(write_failed)
    }
}

/// Per-origin `localStorage` fallback.
pub(crate) struct LocalStorageSink;

impl MacroSink for LocalStorageSink {
    fn name(&self) -> &'static str {
        LOCAL_SINK
    }

    fn read(&self, key: &str) -> Result<Option<Vec<Macro>>, StorageError> {
        match LocalStorage::get::<Vec<Macro>>(key) {
            Ok(macros) => Ok(Some(macros)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(GlooStorageError::SerdeError(source)) => Err(StorageError::Decode {
                sink: LOCAL_SINK,
                source,
            }),
            Err(GlooStorageError::JsError(err)) => Err(StorageError::Read {
                sink: LOCAL_SINK,
                detail: err.to_string(),
            }),
        }
    }

    fn write(&self, key: &str, macros: &[Macro]) -> Result<(), StorageError> {
        LocalStorage::set(key, macros).map_err(|err| match err {
            GlooStorageError::SerdeError(source) => StorageError::Encode {
                sink: LOCAL_SINK,
                source,
            },
            other => StorageError::Write {
                sink: LOCAL_SINK,
                detail: other.to_string(),
            },
        })
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
