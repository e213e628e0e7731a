/// Default read size per chunk when Option<T> is None.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024; // 8 KiB
/// Max chunk size sanity bound (1 MiB).
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Separator skipped by the decoder and appended once by the encoder.
pub const NEWLINE: u8 = b'\n';

/// The only recognized command-line flag; selects decode mode.
pub const DECODE_FLAG: &str = "-r";
