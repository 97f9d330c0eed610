//! Shared, immutable byte buffer carried by every node.

use std::fmt;

use text_size::TextSize;
use triomphe::ThinArc;

/// Raw text of a node.
///
/// Cloning aliases the same allocation. [`NodeText::deep_copy`] is the only way
/// to get a buffer that shares nothing with its source.
#[derive(Clone)]
pub struct NodeText {
    ptr: ThinArc<(), u8>,
}

impl NodeText {
    /// Copies `bytes` into a new buffer.
    pub fn new(bytes: &[u8]) -> Self {
        Self { ptr: ThinArc::from_header_and_slice((), bytes) }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.ptr.slice
    }

    /// Returns the text as `str` if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Length in bytes.
    ///
    /// Buffers longer than `u32::MAX` bytes saturate to `u32::MAX`.
    pub fn len(&self) -> TextSize {
        saturating_text_size(self.as_bytes().len())
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Copies the bytes into a fresh allocation.
    pub fn deep_copy(&self) -> Self {
        Self::new(self.as_bytes())
    }

    /// Returns `true` if both buffers point at the same allocation.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.as_bytes().as_ptr(), other.as_bytes().as_ptr())
    }
}

fn saturating_text_size(len: usize) -> TextSize {
    TextSize::try_from(len).unwrap_or(TextSize::new(u32::MAX))
}

impl PartialEq for NodeText {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for NodeText {}

impl fmt::Debug for NodeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

impl fmt::Display for NodeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

/// Copies the slice into a new buffer.
impl From<&[u8]> for NodeText {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

/// Copies the array into a new buffer.
impl<const N: usize> From<&[u8; N]> for NodeText {
    fn from(bytes: &[u8; N]) -> Self {
        Self::new(bytes)
    }
}

/// Copies the UTF-8 bytes of the string.
impl From<&str> for NodeText {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Copies the bytes into a new buffer.
impl From<Vec<u8>> for NodeText {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(&bytes)
    }
}

/// Copies the UTF-8 bytes of the string.
impl From<String> for NodeText {
    fn from(text: String) -> Self {
        Self::new(text.as_bytes())
    }
}
