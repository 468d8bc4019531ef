//! Process-wide format registry
//!
//! All installed formats are registered once at startup; the registry is
//! never mutated afterwards. Detection tries each format's signature
//! matcher in registration order and stops at the first match, which is
//! also the tie-break rule when several signatures would accept a file.

use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, info};

use crate::format::descriptor::FormatDescriptor;
use crate::format::errors::{FormatError, FormatResult};
use crate::format::matcher::read_signature;

lazy_static! {
    // Built once on first access; registration order is fixed here.
    static ref GLOBAL_REGISTRY: FormatRegistry = {
        let mut registry = FormatRegistry::new();
        registry.register(crate::textimage::descriptor());
        info!("Format registry initialized with {} formats", registry.len());
        registry
    };
}

/// Ordered collection of installed format descriptors
pub struct FormatRegistry {
    formats: Vec<FormatDescriptor>,
}

impl FormatRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        FormatRegistry { formats: Vec::new() }
    }

    /// Registers a format descriptor
    ///
    /// Registration order decides detection precedence.
    pub fn register(&mut self, descriptor: FormatDescriptor) {
        debug!("Registering format: {}", descriptor.name());
        self.formats.push(descriptor);
    }

    /// All registered descriptors, in registration order
    pub fn formats(&self) -> &[FormatDescriptor] {
        &self.formats
    }

    /// Number of registered formats
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether no formats are registered
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Looks up a descriptor by name
    pub fn get(&self, name: &str) -> Option<&FormatDescriptor> {
        self.formats.iter().find(|d| d.name() == name)
    }

    /// Detects the format of a candidate file
    ///
    /// Reads one bounded signature prefix and tries each registered
    /// matcher against it in order.
    ///
    /// # Arguments
    /// * `path` - Path to the candidate file
    ///
    /// # Returns
    /// The first matching descriptor, or UnknownFormat if none accepts
    pub fn detect(&self, path: &Path) -> FormatResult<&FormatDescriptor> {
        let prefix = read_signature(path)?;

        for descriptor in &self.formats {
            if descriptor.matcher().matches(&prefix) {
                debug!("{} matched format '{}'", path.display(), descriptor.name());
                return Ok(descriptor);
            }
        }

        Err(FormatError::UnknownFormat(path.display().to_string()))
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        FormatRegistry::new()
    }
}

/// The process-wide registry of installed formats
pub fn global() -> &'static FormatRegistry {
    &GLOBAL_REGISTRY
}
