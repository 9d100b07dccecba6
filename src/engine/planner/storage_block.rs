use serde::{Deserialize, Serialize};

/// A replicated block of the underlying file system, covering
/// `[offset, offset + length)` of the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageBlock {
    pub offset: u64,
    pub length: u64,
    #[serde(default)]
    pub hosts: Vec<String>,
}

impl StorageBlock {
    pub fn new(offset: u64, length: u64, hosts: Vec<String>) -> Self {
        Self {
            offset,
            length,
            hosts,
        }
    }

    /// First byte past the block. Layout validation guarantees this does not overflow.
    #[inline]
    pub fn end(&self) -> u64 {
        self.offset + self.length
    }

    #[inline]
    pub fn contains(&self, offset: u64) -> bool {
        self.offset <= offset && offset < self.end()
    }
}
