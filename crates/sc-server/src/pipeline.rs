//! Transfer pipeline: wires the codec and the save store into the three
//! boundary operations.
//!
//! - inspect: decompress, then pretty-print. Touches no storage.
//! - persist: compress the body again, then store it under a new handle.
//! - retrieve: look up a handle and hand back the stored bytes verbatim.
//!
//! Persist compresses what clients already send compressed. The stored bytes
//! are therefore `compress(body)`, and retrieve returns exactly those bytes.

use bytes::Bytes;
use sc_codec::SaveCodec;
use sc_core::{Handle, Result};
use sc_store::SaveStore;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Suggested download name when the caller supplies none.
pub const DEFAULT_DOWNLOAD_NAME: &str = "edited_save.save";

/// A stored save ready to be sent back, with its suggested file name.
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: String,
    pub payload: Bytes,
}

pub struct TransferPipeline {
    codec: Arc<dyn SaveCodec>,
    store: SaveStore,
}

impl TransferPipeline {
    pub fn new(codec: Arc<dyn SaveCodec>, store: SaveStore) -> Self {
        Self { codec, store }
    }

    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    pub fn codec(&self) -> &dyn SaveCodec {
        self.codec.as_ref()
    }

    /// Decompress an uploaded save and render it as indented JSON.
    pub fn inspect(&self, body: &[u8]) -> Result<String> {
        self.codec.inspect(body).map_err(|e| {
            warn!(codec = self.codec.name(), bytes = body.len(), error = %e, "inspect rejected");
            e
        })
    }

    /// Compress `body` and store it, returning the new handle.
    pub fn persist(&self, body: &[u8]) -> Result<Handle> {
        let compressed = self.codec.compress(body).map_err(|e| {
            error!(codec = self.codec.name(), bytes = body.len(), error = %e, "compression failed");
            e
        })?;
        let handle = self.store.insert(Bytes::from(compressed));
        debug!(%handle, input_bytes = body.len(), "save persisted");
        Ok(handle)
    }

    /// Fetch a stored save. `filename` is only ever used as a suggestion for
    /// the client; it never touches the filesystem.
    pub fn retrieve(&self, handle: &str, filename: Option<&str>) -> Result<Download> {
        let payload = self.store.lookup(handle)?;
        Ok(Download {
            filename: sanitize_filename(filename),
            payload,
        })
    }
}

/// Reduce a caller-supplied name to its final path component.
///
/// Both `/` and `\` count as separators. Quotes and control characters are
/// dropped so the result fits inside a quoted `Content-Disposition`
/// parameter. Anything that leaves no usable name falls back to
/// [`DEFAULT_DOWNLOAD_NAME`].
pub fn sanitize_filename(requested: Option<&str>) -> String {
    let Some(requested) = requested else {
        return DEFAULT_DOWNLOAD_NAME.to_string();
    };

    let is_separator = |c: char| c == '/' || c == '\\';
    let base = requested
        .trim_end_matches(is_separator)
        .rsplit(is_separator)
        .next()
        .unwrap_or("");
    let cleaned: String = base.chars().filter(|c| *c != '"' && !c.is_control()).collect();

    match cleaned.trim() {
        "" | "." | ".." => DEFAULT_DOWNLOAD_NAME.to_string(),
        name => name.to_string(),
    }
}
