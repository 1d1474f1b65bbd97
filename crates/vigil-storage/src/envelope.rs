//! Versioned envelope: `{"kind": ..., "v": ..., "data": {...}}`.
//!
//! Encoding refuses values that fail their invariants, so nothing written
//! here is later rejected on read. Decoding checks kind, then version, then
//! shape, then invariants.

use serde::{Deserialize, Serialize};

use vigil_core::errors::{StorageError, VigilError, VigilResult};
use vigil_core::traits::Record;

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    kind: &'a str,
    v: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct RawEnvelope {
    kind: String,
    v: u32,
    data: serde_json::Value,
}

/// Encode as a single line (no trailing newline).
pub fn encode<T: Record>(value: &T) -> VigilResult<String> {
    Ok(serde_json::to_string(&wrap(value)?)?)
}

/// Encode as indented JSON, for snapshot files.
pub fn encode_pretty<T: Record>(value: &T) -> VigilResult<String> {
    Ok(serde_json::to_string_pretty(&wrap(value)?)?)
}

fn wrap<T: Record>(value: &T) -> VigilResult<EnvelopeRef<'_, T>> {
    value.validate().map_err(|reason| VigilError::InvalidRecord {
        reason: format!("{}: {reason}", T::KIND),
    })?;
    Ok(EnvelopeRef {
        kind: T::KIND,
        v: T::VERSION,
        data: value,
    })
}

/// Decode one envelope. `path` and `line` locate it for error reporting.
pub fn decode<T: Record>(text: &str, path: &str, line: usize) -> Result<T, StorageError> {
    let decode_err = |reason: String| StorageError::Decode {
        path: path.to_string(),
        line,
        reason,
    };

    let raw: RawEnvelope = serde_json::from_str(text).map_err(|e| decode_err(e.to_string()))?;
    if raw.kind != T::KIND || raw.v != T::VERSION {
        return Err(StorageError::SchemaMismatch {
            path: path.to_string(),
            line,
            expected: format!("{} v{}", T::KIND, T::VERSION),
            found: format!("{} v{}", raw.kind, raw.v),
        });
    }

    let value: T = serde_json::from_value(raw.data).map_err(|e| decode_err(e.to_string()))?;
    value.validate().map_err(decode_err)?;
    Ok(value)
}
