//! stream/mod.rs
//! Stream driver: chunked reads from any `Read`, translated output to any `Write`.

pub mod config;
pub mod io;
pub mod pipeline;

pub use config::*;
pub use pipeline::*;
