//! Document loading for the command-line front end.
//!
//! Small files are read directly; large files are memory mapped. The
//! chunking core never calls into this module.

// Memory mapping requires unsafe but is sound for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum document size to load (512MB).
const MAX_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// File reader that picks direct reads or memory mapping by size.
///
/// # Examples
///
/// ```no_run
/// use chunkwise::io::FileReader;
///
/// let reader = FileReader::open("document.txt").unwrap();
/// let text = reader.read_to_string().unwrap();
/// ```
pub struct FileReader {
    file: File,
    size: u64,
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or is
    /// larger than the supported maximum.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = file
            .metadata()
            .map_err(|e| IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the file content as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = if self.size >= MMAP_THRESHOLD {
            self.read_mmap_bytes()?
        } else {
            self.read_direct_bytes()?
        };
        decode_utf8(bytes, &self.path)
    }

    fn read_mmap_bytes(&self) -> Result<Vec<u8>> {
        // Safety: the mapping is read-only and dropped before returning
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: format!("memory mapping failed: {e}"),
            })?
        };
        Ok(mmap.to_vec())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_direct_bytes(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}

/// Reads a file to string, automatically choosing the best method.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FileReader::open(path)?.read_to_string()
}

/// Reads a document from a path, or from standard input when the path is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or is not valid UTF-8.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if path.as_os_str() == STDIN_PATH {
        read_from(std::io::stdin().lock(), "<stdin>")
    } else {
        read_file(path)
    }
}

/// Reads all of `reader` as UTF-8 text.
///
/// # Errors
///
/// Returns an error if reading fails or content is not valid UTF-8.
pub fn read_from<R: Read>(mut reader: R, label: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| IoError::ReadFailed {
            path: label.to_string(),
            reason: e.to_string(),
        })?;
    decode_utf8(bytes, label)
}

fn decode_utf8(bytes: Vec<u8>, path: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        IoError::InvalidUtf8 {
            path: path.to_string(),
            offset: e.utf8_error().valid_up_to(),
        }
        .into()
    })
}
