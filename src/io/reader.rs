//! File loading with an optional read limit.
//!
//! Reads at most a given number of bytes from the start of a file into a
//! [`ByteBuffer`]. Large reads are served by a memory mapping instead of a
//! heap copy.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::core::ByteBuffer;
use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: usize = 1024 * 1024;

/// File reader that loads a prefix of a file.
///
/// Chooses the reading strategy based on how many bytes will be read:
/// - Small reads (< 1MB): Read directly into memory
/// - Large reads (>= 1MB): Use memory mapping
///
/// # Examples
///
/// ```no_run
/// use lev_bounds::io::FileReader;
///
/// let reader = FileReader::open("large_file.bin").unwrap();
/// let buffer = reader.read_capped(4096).unwrap();
/// assert!(buffer.size() <= 4096);
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: usize,
    /// File path.
    path: PathBuf,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or is
    /// larger than the address space.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::open(path_ref).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::FileNotFound {
                path: path_str.clone(),
            },
            _ => IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            },
        })?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        if metadata.is_dir() {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: "is a directory".to_string(),
            }
            .into());
        }

        let size = usize::try_from(metadata.len()).map_err(|_| IoError::ReadFailed {
            path: path_str,
            reason: format!("file too large: {} bytes", metadata.len()),
        })?;

        Ok(Self {
            file,
            size,
            path: path_ref.to_path_buf(),
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the first `min(size, max_size)` bytes of the file.
    ///
    /// A file longer than `max_size` is truncated, not rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the file yields fewer bytes
    /// than expected.
    pub fn read_capped(self, max_size: usize) -> Result<ByteBuffer> {
        let expected = self.size.min(max_size);
        debug!(
            path = %self.path.display(),
            size = self.size,
            expected,
            "loading file"
        );

        if expected >= MMAP_THRESHOLD {
            self.read_mmap(expected)
        } else {
            self.read_direct(expected)
        }
    }

    /// Maps the file and exposes its first `expected` bytes.
    fn read_mmap(self, expected: usize) -> Result<ByteBuffer> {
        // Safety: We're only reading from the file
        let map = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.display_path(),
                reason: e.to_string(),
            })?
        };

        if map.len() < expected {
            return Err(IoError::ShortRead {
                path: self.display_path(),
                expected,
                actual: map.len(),
            }
            .into());
        }

        Ok(ByteBuffer::from_mmap(self.path, map, expected))
    }

    /// Reads `expected` bytes directly into memory.
    fn read_direct(self, expected: usize) -> Result<ByteBuffer> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(expected)
            .map_err(|e| IoError::ReadFailed {
                path: self.display_path(),
                reason: e.to_string(),
            })?;

        (&self.file)
            .take(u64::try_from(expected).unwrap_or(u64::MAX))
            .read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.display_path(),
                reason: e.to_string(),
            })?;

        if buffer.len() != expected {
            return Err(IoError::ShortRead {
                path: self.display_path(),
                expected,
                actual: buffer.len(),
            }
            .into());
        }

        Ok(ByteBuffer::from_file(self.path, buffer, self.size))
    }

    fn display_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// Loads at most `max_size` bytes of the file at `path`.
///
/// # Arguments
///
/// * `path` - Path to the file.
/// * `max_size` - Read limit; pass `usize::MAX` for no limit.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or fully read up to the
/// limit.
///
/// # Examples
///
/// ```no_run
/// use lev_bounds::io::load;
///
/// let buffer = load("example.bin", usize::MAX).unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P, max_size: usize) -> Result<ByteBuffer> {
    FileReader::open(path)?.read_capped(max_size)
}
