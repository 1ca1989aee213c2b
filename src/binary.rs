//! Chunked reads of binary large objects.
//!
//! Two strategies are supported:
//! 1. **Streaming**: read fixed-size chunks into one scratch buffer and append
//!    them to an accumulator until a short read signals the end.
//! 2. **Pre-sized**: ask the cursor for the total length first, allocate it
//!    once, and fill it chunk by chunk.
//!
//! A NULL column reads as an empty vector without touching the raw reader.

use bytes::BytesMut;
use log::trace;

use crate::cursor::RowCursor;
use crate::error::{Error, Result};

/// Default chunk size of the streaming strategy.
pub const STREAM_CHUNK_SIZE: usize = 8192;

/// Default chunk size of the pre-sized strategy.
pub const PRESIZED_CHUNK_SIZE: usize = 1024;

/// How a binary column is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryReadStrategy {
    /// Append chunks until a short read.
    #[default]
    Streaming,
    /// Query the length, allocate once, fill.
    PreSized,
}

impl BinaryReadStrategy {
    /// Default chunk size for this strategy.
    pub fn default_chunk_size(&self) -> usize {
        match self {
            BinaryReadStrategy::Streaming => STREAM_CHUNK_SIZE,
            BinaryReadStrategy::PreSized => PRESIZED_CHUNK_SIZE,
        }
    }
}

/// Options for reading binary columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryReadOptions {
    /// Read strategy.
    pub strategy: BinaryReadStrategy,
    /// Bytes requested per raw read call (at least 1).
    pub chunk_size: usize,
}

impl BinaryReadOptions {
    /// Options for `strategy` with its default chunk size.
    pub fn new(strategy: BinaryReadStrategy) -> Self {
        Self {
            strategy,
            chunk_size: strategy.default_chunk_size(),
        }
    }

    /// Streaming strategy, 8192-byte chunks.
    pub fn streaming() -> Self {
        Self::new(BinaryReadStrategy::Streaming)
    }

    /// Pre-sized strategy, 1024-byte chunks.
    pub fn pre_sized() -> Self {
        Self::new(BinaryReadStrategy::PreSized)
    }

    /// Set the chunk size. Zero is clamped to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use rowcursor_ext::BinaryReadOptions;
    ///
    /// let options = BinaryReadOptions::pre_sized().with_chunk_size(4096);
    /// assert_eq!(options.chunk_size, 4096);
    /// ```
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

impl Default for BinaryReadOptions {
    fn default() -> Self {
        Self::streaming()
    }
}

/// Read the whole binary column at `ordinal` on the current row.
pub fn read_bytes_with<C>(
    cursor: &C,
    ordinal: usize,
    options: &BinaryReadOptions,
) -> Result<Vec<u8>>
where
    C: RowCursor + ?Sized,
{
    if cursor.is_null(ordinal)? {
        return Ok(Vec::new());
    }
    let chunk_size = options.chunk_size.max(1);
    match options.strategy {
        BinaryReadStrategy::Streaming => read_streaming(cursor, ordinal, chunk_size),
        BinaryReadStrategy::PreSized => read_pre_sized(cursor, ordinal, chunk_size),
    }
}

/// Ends on the first read shorter than `chunk_size`. A length that is an
/// exact multiple of `chunk_size` therefore costs one final zero-byte call.
fn read_streaming<C>(cursor: &C, ordinal: usize, chunk_size: usize) -> Result<Vec<u8>>
where
    C: RowCursor + ?Sized,
{
    let mut chunk = vec![0u8; chunk_size];
    let mut out = BytesMut::new();
    let mut offset: u64 = 0;

    loop {
        let n = cursor.read_bytes(ordinal, offset, Some(chunk.as_mut_slice()), 0, chunk_size)?;
        trace!("column {}: read {} bytes at offset {}", ordinal, n, offset);
        out.extend_from_slice(&chunk[..n]);
        offset += n as u64;
        if n < chunk_size {
            break;
        }
    }

    Ok(Vec::from(out))
}

fn read_pre_sized<C>(cursor: &C, ordinal: usize, chunk_size: usize) -> Result<Vec<u8>>
where
    C: RowCursor + ?Sized,
{
    let data_length = cursor.read_bytes(ordinal, 0, None, 0, 0)?;
    trace!("column {}: length {}", ordinal, data_length);

    let mut out = vec![0u8; data_length];
    let mut bytes_read = 0;
    while bytes_read < data_length {
        let want = chunk_size.min(data_length - bytes_read);
        let n = cursor.read_bytes(
            ordinal,
            bytes_read as u64,
            Some(out.as_mut_slice()),
            bytes_read,
            want,
        )?;
        if n == 0 {
            return Err(Error::ShortRead {
                expected: data_length,
                actual: bytes_read,
            });
        }
        bytes_read += n;
    }

    Ok(out)
}
