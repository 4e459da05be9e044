//! Immutable byte buffers.
//!
//! A [`ByteBuffer`] holds the bytes of one input, usually the (possibly
//! truncated) content of a file. Its content never changes after
//! construction.

use memmap2::Mmap;
use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Backing storage for a buffer.
enum Storage {
    /// Bytes owned on the heap.
    Heap(Vec<u8>),
    /// A read-only mapping of a file; only the first `len` bytes are visible.
    Mapped { map: Mmap, len: usize },
}

/// An owned, immutable, length-known sequence of bytes.
///
/// # Examples
///
/// ```
/// use lev_bounds::core::ByteBuffer;
///
/// let buffer = ByteBuffer::from_bytes(b"kitten".to_vec());
/// assert_eq!(buffer.size(), 6);
/// assert_eq!(&buffer[..3], b"kit");
/// ```
pub struct ByteBuffer {
    storage: Storage,
    /// Source file path (if loaded from file).
    source: Option<PathBuf>,
    /// Size of the source before the read limit was applied.
    original_size: usize,
}

impl ByteBuffer {
    /// Creates a buffer owning `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let original_size = bytes.len();
        Self {
            storage: Storage::Heap(bytes),
            source: None,
            original_size,
        }
    }

    /// Creates a buffer from bytes read out of `path`.
    ///
    /// `original_size` is the size of the file before any read limit was
    /// applied.
    #[must_use]
    pub fn from_file(path: PathBuf, bytes: Vec<u8>, original_size: usize) -> Self {
        Self {
            storage: Storage::Heap(bytes),
            source: Some(path),
            original_size,
        }
    }

    /// Creates a buffer viewing the first `len` bytes of a file mapping.
    ///
    /// `len` is clamped to the mapping's length.
    #[must_use]
    pub fn from_mmap(path: PathBuf, map: Mmap, len: usize) -> Self {
        let original_size = map.len();
        let len = len.min(original_size);
        Self {
            storage: Storage::Mapped { map, len },
            source: Some(path),
            original_size,
        }
    }

    /// Returns the buffer content.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Storage::Heap(bytes) => bytes,
            Storage::Mapped { map, len } => &map[..*len],
        }
    }

    /// Returns the size of the buffer in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the source path, if the buffer was loaded from a file.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns the size of the source before the read limit was applied.
    #[must_use]
    pub const fn original_size(&self) -> usize {
        self.original_size
    }

    /// Returns `true` if the read limit cut the source short.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.size() < self.original_size
    }

    /// Returns `true` if the content is a file mapping rather than a heap copy.
    #[must_use]
    pub const fn is_mapped(&self) -> bool {
        matches!(self.storage, Storage::Mapped { .. })
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("source", &self.source)
            .field("size", &self.size())
            .field("original_size", &self.original_size)
            .field("mapped", &self.is_mapped())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let buffer = ByteBuffer::from_bytes(b"abc".as_slice());
        assert_eq!(buffer.size(), 3);
        assert_eq!(buffer.as_bytes(), b"abc");
        assert!(buffer.source().is_none());
        assert!(!buffer.is_truncated());
        assert!(!buffer.is_mapped());
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = ByteBuffer::from_bytes(Vec::new());
        assert!(buffer.is_empty());
        assert_eq!(buffer.size(), 0);
    }

    #[test]
    fn test_from_file_truncated() {
        let buffer = ByteBuffer::from_file(PathBuf::from("a.bin"), b"ab".to_vec(), 5);
        assert_eq!(buffer.size(), 2);
        assert_eq!(buffer.original_size(), 5);
        assert!(buffer.is_truncated());
        assert_eq!(buffer.source(), Some(Path::new("a.bin")));
    }

    #[test]
    fn test_deref_and_as_ref() {
        let buffer = ByteBuffer::from_bytes(b"hello".to_vec());
        assert_eq!(&buffer[1..3], b"el");
        let bytes: &[u8] = buffer.as_ref();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_debug_omits_content() {
        let buffer = ByteBuffer::from_bytes(b"secret".to_vec());
        let debug = format!("{buffer:?}");
        assert!(debug.contains("size: 6"));
        assert!(!debug.contains("secret"));
    }
}
