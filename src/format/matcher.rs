//! Signature-based format detection
//!
//! Detection reads a small fixed-size prefix of the candidate file and
//! asks each registered format whether the bytes belong to it. The prefix
//! cap keeps detection O(number of formats) regardless of file size.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::format::errors::FormatResult;

/// Maximum number of bytes a signature check may look at
pub const MAX_SIGNATURE_LEN: usize = 64;

/// Decides whether a byte prefix belongs to a format
///
/// Implementations are pure and deterministic: same prefix, same answer.
/// A truncated or empty prefix must return false, never fail. Comparison
/// has to be byte-exact over the full signature, so unrelated formats
/// sharing a short common prefix never collide.
pub trait SignatureMatcher: Send + Sync {
    /// Tests the prefix against this format's signature
    ///
    /// # Arguments
    /// * `prefix` - Up to `MAX_SIGNATURE_LEN` bytes from the start of the file
    ///
    /// # Returns
    /// true if the file belongs to this format
    fn matches(&self, prefix: &[u8]) -> bool;
}

/// Reads the signature region of a candidate file
///
/// At most `MAX_SIGNATURE_LEN` bytes are read; a shorter file yields a
/// shorter prefix rather than an error.
///
/// # Arguments
/// * `path` - Path to the candidate file
///
/// # Returns
/// The prefix bytes, or an I/O error if the file cannot be opened
pub fn read_signature(path: &Path) -> FormatResult<Vec<u8>> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(MAX_SIGNATURE_LEN);
    file.take(MAX_SIGNATURE_LEN as u64).read_to_end(&mut prefix)?;

    debug!("Read {} signature bytes from {}", prefix.len(), path.display());
    Ok(prefix)
}
