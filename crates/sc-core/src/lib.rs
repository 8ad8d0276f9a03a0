pub mod config;
pub mod error;
pub mod types;

pub use config::EditorConfig;
pub use error::{Result, ScError};
pub use types::Handle;

#[cfg(test)]
mod tests;
