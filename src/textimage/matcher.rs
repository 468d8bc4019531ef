//! Signature matcher for the text image format

use crate::format::matcher::SignatureMatcher;
use crate::textimage::SIGNATURE;

/// Matches the fixed first-line signature of a text image file
pub struct TextImageMatcher;

impl SignatureMatcher for TextImageMatcher {
    fn matches(&self, prefix: &[u8]) -> bool {
        // A prefix shorter than the signature can never match; comparison
        // covers the full signature length, byte for byte.
        prefix.len() >= SIGNATURE.len() && &prefix[..SIGNATURE.len()] == SIGNATURE
    }
}
