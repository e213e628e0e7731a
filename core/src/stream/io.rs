//! stream/io.rs
//! Thin read/write helpers for the driver.

use std::io::{self, Read, Write};

/// Single read into `buf`, retrying only on `Interrupted`.
/// Returns whatever the reader had available; 0 means EOF.
pub fn read_chunk<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match r.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

/// Write all of `data`; empty slices are skipped.
pub fn write_chunk<W: Write + ?Sized>(w: &mut W, data: &[u8]) -> io::Result<()> {
    if data.is_empty() {
        return Ok(());
    }
    w.write_all(data)
}
