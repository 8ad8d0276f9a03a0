//! Codec abstraction shared by the transfer pipeline.

use sc_core::{Result, ScError};
use serde_json::Value;

/// A stateless transform pair applied to payloads at the service boundary.
///
/// Implementations must be pure: no I/O, no shared mutable state.
pub trait SaveCodec: Send + Sync {
    /// Algorithm identifier, used in logs.
    fn name(&self) -> &str;

    /// Encode arbitrary bytes into the transport-safe wire form.
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Decode wire bytes into structured data. Any malformed input yields
    /// `ScError::Decode`.
    fn decompress(&self, wire: &[u8]) -> Result<Value>;

    /// Decode and re-serialize with indentation, discarding the original
    /// formatting.
    fn inspect(&self, wire: &[u8]) -> Result<String> {
        let value = self.decompress(wire)?;
        pretty(&value)
    }
}

/// Two-space indented JSON. Object keys come out sorted, so equal values
/// always render identically.
pub fn pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ScError::encode(format!("Failed to format JSON: {e}")))
}
