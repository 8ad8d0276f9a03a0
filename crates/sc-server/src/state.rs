//! Application state shared across all handlers.

use crate::pipeline::TransferPipeline;
use chrono::{DateTime, Utc};
use sc_codec::LzBase64Codec;
use sc_core::EditorConfig;
use sc_store::SaveStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state. Built once at startup; every clone points at the
/// same store, so a restart loses all saves.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TransferPipeline>,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(SaveStore::new())
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::with_store(SaveStore::with_retention(config.store.retention()))
    }

    pub fn with_store(store: SaveStore) -> Self {
        Self::with_pipeline(TransferPipeline::new(Arc::new(LzBase64Codec::new()), store))
    }

    pub fn with_pipeline(pipeline: TransferPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn store(&self) -> &SaveStore {
        self.pipeline.store()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
