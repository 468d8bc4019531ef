//! Metadata extraction contract
//!
//! Extraction is tiered with different failure semantics per tier: core
//! metadata failures abort the import, calibration and diagnostic
//! failures are recovered locally and never propagate. `extract_all`
//! implements that propagation policy centrally.

use std::path::Path;

use log::{debug, warn};

use crate::format::errors::FormatResult;
use crate::format::metadata::{CalibrationMetadata, CoreMetadata, DiagnosticMetadata};

/// Extracts layered metadata from a matched file
///
/// The three operations are called in fixed order once a file has been
/// matched: core, then calibration, then diagnostics. The extraction
/// results are cached by the host; the file itself is not kept open
/// between calls.
pub trait MetadataExtractor: Send + Sync {
    /// Extracts mandatory metadata
    ///
    /// Fails with MalformedFile when a mandatory field (width, height,
    /// bit depth) is absent or non-numeric. Mandatory fields are never
    /// silently defaulted; fields fixed by the format's known structure
    /// may be hard-coded.
    fn extract_core(&self, path: &Path) -> FormatResult<CoreMetadata>;

    /// Extracts optional physical calibration metadata
    ///
    /// Missing fields are not an error; an entirely empty record is a
    /// valid result.
    fn extract_calibration(
        &self,
        _path: &Path,
        _core: &CoreMetadata,
    ) -> FormatResult<CalibrationMetadata> {
        Ok(CalibrationMetadata::default())
    }

    /// Extracts free-form diagnostic properties, best-effort
    ///
    /// Individual property failures are skipped at the point of
    /// occurrence; this operation never fails.
    fn extract_diagnostics(&self, _path: &Path) -> DiagnosticMetadata {
        DiagnosticMetadata::new()
    }
}

/// Combined metadata record as cached by the host's image model
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    pub core: CoreMetadata,
    pub calibration: CalibrationMetadata,
    pub diagnostics: DiagnosticMetadata,
}

/// Runs the full extraction sequence for a matched file
///
/// Core extraction failures abort the import. Calibration failures are
/// logged and replaced by an empty record, so partial non-critical
/// metadata loss never rejects an otherwise usable file.
///
/// # Arguments
/// * `extractor` - The format's metadata extractor
/// * `path` - Path to the matched file
///
/// # Returns
/// The combined metadata, or the core extraction error
pub fn extract_all(extractor: &dyn MetadataExtractor, path: &Path) -> FormatResult<ImageMetadata> {
    let core = extractor.extract_core(path)?;
    core.validate()?;
    debug!(
        "Core metadata for {}: {}x{}, {} channels, {}",
        path.display(),
        core.width,
        core.height,
        core.n_channels,
        core.pixel_type.name()
    );

    let calibration = match extractor.extract_calibration(path, &core) {
        Ok(calibration) => calibration,
        Err(e) => {
            warn!("Calibration metadata unavailable for {}: {}", path.display(), e);
            CalibrationMetadata::default()
        }
    };

    let diagnostics = extractor.extract_diagnostics(path);

    Ok(ImageMetadata {
        core,
        calibration,
        diagnostics,
    })
}
