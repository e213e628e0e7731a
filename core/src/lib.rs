//! hexpipe-core
//!
//! Byte <-> lowercase hex stream translation.
//! No process-level I/O here: callers hand in a reader and a writer.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

pub mod codec;
pub mod telemetry;

// Stream layer
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{decode_to_vec, encode_to_vec, CodecError, Mode};
    pub use crate::stream::{run_stream, StreamConfig};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::StreamError;
}
