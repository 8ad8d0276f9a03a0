use crate::codec::SaveCodec;
use sc_core::{Result, ScError};
use serde_json::Value;

/// lz-string compression in its base64-alphabet variant, the format SugarCube
/// uses for exported save files.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzBase64Codec;

impl LzBase64Codec {
    pub fn new() -> Self {
        Self
    }
}

impl SaveCodec for LzBase64Codec {
    fn name(&self) -> &str {
        "lz-string/base64"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        // lz-string works on UTF-16 text; invalid UTF-8 becomes U+FFFD.
        let text = String::from_utf8_lossy(raw);
        Ok(lz_str::compress_to_base64(&*text).into_bytes())
    }

    fn decompress(&self, wire: &[u8]) -> Result<Value> {
        let text = std::str::from_utf8(wire)
            .map_err(|e| ScError::decode(format!("payload is not text: {e}")))?;
        // Save files picked from disk often end with a newline.
        let text = text.trim();
        if text.is_empty() {
            return Err(ScError::decode("payload is empty"));
        }

        let units = lz_str::decompress_from_base64(text)
            .ok_or_else(|| ScError::decode("payload is not valid lz-string data"))?;
        let json = String::from_utf16(&units)
            .map_err(|e| ScError::decode(format!("decompressed data is not valid text: {e}")))?;

        serde_json::from_str(&json).map_err(|e| {
            tracing::debug!(codec = self.name(), error = %e, "decompressed payload is not JSON");
            ScError::decode(format!("Failed to parse JSON: {e}"))
        })
    }
}
