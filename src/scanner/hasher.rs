//! SHA-256 file hasher with streaming support.
//!
//! # Overview
//! Files are read through a fixed-size buffer so that arbitrarily large
//! files are checksummed in bounded memory. The file handle lives only for
//! the duration of [`Hasher::full_hash`] and is closed on every exit path.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::GuardError;

/// Raw SHA-256 digest.
pub type Hash = [u8; 32];

/// Default read chunk size (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Streaming content hasher.
#[derive(Debug, Clone)]
pub struct Hasher {
    chunk_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher with the default chunk size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a hasher that reads `chunk_size` bytes at a time.
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Compute the SHA-256 digest of a file's full contents.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Io`] if the file cannot be opened or read.
    pub fn full_hash(&self, path: &Path) -> Result<Hash, GuardError> {
        let io_err = |source: std::io::Error| GuardError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let n = match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(io_err(e)),
            };
            hasher.update(&buffer[..n]);
        }

        Ok(hasher.finalize().into())
    }

    /// Compute the digest of an in-memory buffer.
    #[must_use]
    pub fn hash_bytes(&self, data: &[u8]) -> Hash {
        Sha256::digest(data).into()
    }
}

/// Render a digest as lowercase hexadecimal (64 characters).
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}
