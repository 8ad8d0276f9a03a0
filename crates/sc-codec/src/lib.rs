//! Save codec: the transform between SugarCube's wire format and JSON.
//!
//! SugarCube exports saves as lz-string compressed text in the base64
//! alphabet. Two directions are exposed:
//! - `decompress` / `inspect`: wire bytes to JSON, then to indented text
//! - `compress`: raw text to wire bytes
//!
//! The directions are used on different request paths and are not required
//! to be exact inverses of each other.

pub mod codec;
pub mod lz_base64;

pub use codec::{pretty, SaveCodec};
pub use lz_base64::LzBase64Codec;
