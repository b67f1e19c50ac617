//! Byte pipelines behind `cat`, `cp`, `mv`, `hash`, `compress` and `decompress`.
//!
//! Every pipeline pulls a bounded chunk from its source and hands it to the
//! sink before reading more, so memory stays flat regardless of file size.

use brotli::{CompressorWriter, Decompressor};
use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

const BUFFER_SIZE: usize = 64 * 1024;
const BROTLI_QUALITY: u32 = 11;
const BROTLI_WINDOW_BITS: u32 = 22;

fn open_source(path: &Path) -> io::Result<BufReader<File>> {
    Ok(BufReader::with_capacity(BUFFER_SIZE, File::open(path)?))
}

fn create_sink(path: &Path) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    Ok(BufWriter::with_capacity(BUFFER_SIZE, file))
}

/// Streams the file at `path` into `out` without closing `out`.
pub fn read_file_to(path: &Path, out: &mut dyn Write) -> io::Result<u64> {
    let mut source = open_source(path)?;
    let copied = io::copy(&mut source, out)?;
    out.flush()?;
    Ok(copied)
}

/// Copies `source` to a new file at `destination`. Never overwrites.
pub fn copy_file(source: &Path, destination: &Path) -> io::Result<u64> {
    let mut reader = open_source(source)?;
    let mut writer = create_sink(destination)?;
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(copied)
}

/// Hex-encoded SHA-256 of the file at `path`.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut source = open_source(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let read = source.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Brotli-compresses `source` into a new file at `destination`.
pub fn compress_file(source: &Path, destination: &Path) -> io::Result<u64> {
    let mut reader = open_source(source)?;
    let mut encoder = CompressorWriter::new(
        create_sink(destination)?,
        BUFFER_SIZE,
        BROTLI_QUALITY,
        BROTLI_WINDOW_BITS,
    );
    let copied = io::copy(&mut reader, &mut encoder)?;
    encoder.flush()?;
    // into_inner writes the stream trailer
    encoder.into_inner().flush()?;
    Ok(copied)
}

/// Inflates the Brotli file `source` into a new file at `destination`.
///
/// A partially written destination is left behind on failure; callers decide
/// whether to remove it.
pub fn decompress_file(source: &Path, destination: &Path) -> io::Result<u64> {
    let mut decoder = Decompressor::new(open_source(source)?, BUFFER_SIZE);
    let mut writer = create_sink(destination)?;
    let copied = io::copy(&mut decoder, &mut writer)?;
    writer.flush()?;
    Ok(copied)
}
