//! codec/mod.rs
//! Bidirectional conversion between raw bytes and lowercase two-digit-per-byte hex.
//!
//! Notes:
//! - Encoding is total: every byte maps to exactly two digits.
//! - Decoding carries a pending nibble across chunk boundaries, so callers
//!   may feed input in any split they like.

pub mod types;
pub mod encode;
pub mod decode;
pub mod registry;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use registry::*;
