//! Format capability descriptor
//!
//! A descriptor binds a format's three components together with its
//! static identity. It is a plain immutable value rather than a class
//! hierarchy: capability flags are computed once at construction and
//! each component remains independently testable.

use crate::format::errors::{FormatError, FormatResult};
use crate::format::extractor::MetadataExtractor;
use crate::format::matcher::SignatureMatcher;
use crate::format::renderer::RegionRenderer;

/// Static registration record for one image file format
pub struct FormatDescriptor {
    name: String,
    remarks: String,
    is_spatial: bool,
    is_pyramidal: bool,
    needs_conversion: bool,
    matcher: Box<dyn SignatureMatcher>,
    extractor: Box<dyn MetadataExtractor>,
    renderer: Box<dyn RegionRenderer>,
}

impl FormatDescriptor {
    /// Human-readable format name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text remarks shown alongside the name
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    /// Whether the format has meaningful width/height
    pub fn is_spatial(&self) -> bool {
        self.is_spatial
    }

    /// Whether files of this format are multi-resolution pyramids
    pub fn is_pyramidal(&self) -> bool {
        self.is_pyramidal
    }

    /// Whether files must be converted to the canonical representation
    /// before the other components can operate
    ///
    /// Constant per format; queried once at registration, never
    /// recomputed mid-session.
    pub fn needs_conversion(&self) -> bool {
        self.needs_conversion
    }

    /// The format's signature matcher
    pub fn matcher(&self) -> &dyn SignatureMatcher {
        self.matcher.as_ref()
    }

    /// The format's metadata extractor
    pub fn extractor(&self) -> &dyn MetadataExtractor {
        self.extractor.as_ref()
    }

    /// The format's region renderer
    pub fn renderer(&self) -> &dyn RegionRenderer {
        self.renderer.as_ref()
    }
}

/// Builder for FormatDescriptor
///
/// Provides a clean way to assemble a descriptor from its components.
/// Capability flags default to a spatial, non-pyramidal format that
/// needs no conversion.
pub struct FormatDescriptorBuilder {
    name: String,
    remarks: String,
    is_spatial: bool,
    is_pyramidal: bool,
    needs_conversion: bool,
    matcher: Option<Box<dyn SignatureMatcher>>,
    extractor: Option<Box<dyn MetadataExtractor>>,
    renderer: Option<Box<dyn RegionRenderer>>,
}

impl FormatDescriptorBuilder {
    /// Starts a builder for a format with the given name
    pub fn new(name: &str) -> Self {
        FormatDescriptorBuilder {
            name: name.to_string(),
            remarks: String::new(),
            is_spatial: true,
            is_pyramidal: false,
            needs_conversion: false,
            matcher: None,
            extractor: None,
            renderer: None,
        }
    }

    /// Sets the free-text remarks
    pub fn remarks(mut self, remarks: &str) -> Self {
        self.remarks = remarks.to_string();
        self
    }

    /// Sets whether the format is spatial
    pub fn spatial(mut self, is_spatial: bool) -> Self {
        self.is_spatial = is_spatial;
        self
    }

    /// Sets whether the format is pyramidal
    pub fn pyramidal(mut self, is_pyramidal: bool) -> Self {
        self.is_pyramidal = is_pyramidal;
        self
    }

    /// Sets whether files need conversion to the canonical representation
    pub fn needs_conversion(mut self, needs_conversion: bool) -> Self {
        self.needs_conversion = needs_conversion;
        self
    }

    /// Binds the signature matcher
    pub fn matcher(mut self, matcher: Box<dyn SignatureMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Binds the metadata extractor
    pub fn extractor(mut self, extractor: Box<dyn MetadataExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Binds the region renderer
    pub fn renderer(mut self, renderer: Box<dyn RegionRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Builds the descriptor
    ///
    /// # Returns
    /// The descriptor, or an error if any component binding is missing
    pub fn build(self) -> FormatResult<FormatDescriptor> {
        let matcher = self.matcher.ok_or_else(|| {
            FormatError::GenericError(format!("Format '{}' has no signature matcher", self.name))
        })?;
        let extractor = self.extractor.ok_or_else(|| {
            FormatError::GenericError(format!("Format '{}' has no metadata extractor", self.name))
        })?;
        let renderer = self.renderer.ok_or_else(|| {
            FormatError::GenericError(format!("Format '{}' has no region renderer", self.name))
        })?;

        Ok(FormatDescriptor {
            name: self.name,
            remarks: self.remarks,
            is_spatial: self.is_spatial,
            is_pyramidal: self.is_pyramidal,
            needs_conversion: self.needs_conversion,
            matcher,
            extractor,
            renderer,
        })
    }
}
