//! Physical unit registry for calibration values
//!
//! Calibration metadata may only emit physical sizes tagged with a unit
//! from this registry; a raw untagged number is unrepresentable. The
//! registry itself is loaded once at startup from an embedded TOML table.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::format::errors::{FormatError, FormatResult};

lazy_static! {
    // Parse the TOML table at startup
    static ref UNIT_DEFINITIONS: UnitDefinitions = {
        let content = include_str!("../../units.toml");
        UnitDefinitions::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse unit definitions: {}", e);
            UnitDefinitions::default()
        })
    };
}

/// Container for unit symbol definitions
#[derive(Debug, Default)]
struct UnitDefinitions {
    // Maps unit symbols to full names
    names: HashMap<String, String>,
    // Maps unit symbols to their scale factor in meters
    meters: HashMap<String, f64>,
}

impl UnitDefinitions {
    /// Parse unit definitions from a TOML string
    fn from_str(content: &str) -> FormatResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(FormatError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = UnitDefinitions::default();

        if let Some(table) = toml_value.get("unit_names").and_then(|v| v.as_table()) {
            for (symbol, v) in table {
                if let Some(name) = v.as_str() {
                    defs.names.insert(symbol.clone(), name.to_string());
                }
            }
        }

        if let Some(table) = toml_value.get("unit_meters").and_then(|v| v.as_table()) {
            for (symbol, v) in table {
                if let Some(scale) = v.as_float() {
                    defs.meters.insert(symbol.clone(), scale);
                }
            }
        }

        Ok(defs)
    }
}

/// A physical unit drawn from the shared unit registry
///
/// Instances can only be obtained through `parse` or the named
/// constructors, so an unknown symbol never ends up inside metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalUnit {
    symbol: String,
}

impl PhysicalUnit {
    /// Looks up a unit by symbol (case-insensitive)
    ///
    /// # Arguments
    /// * `symbol` - Unit symbol, e.g. "um" or "mm"
    ///
    /// # Returns
    /// The unit, or an error if the symbol is not in the registry
    pub fn parse(symbol: &str) -> FormatResult<Self> {
        let key = symbol.trim().to_lowercase();
        if UNIT_DEFINITIONS.names.contains_key(&key) {
            Ok(PhysicalUnit { symbol: key })
        } else {
            Err(FormatError::GenericError(format!(
                "Unknown physical unit: {}", symbol
            )))
        }
    }

    /// The micrometer unit, the conventional default for pixel sizes
    pub fn micrometer() -> Self {
        PhysicalUnit { symbol: "um".to_string() }
    }

    /// Unit symbol, e.g. "um"
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Full unit name from the registry, e.g. "micrometer"
    pub fn name(&self) -> &str {
        UNIT_DEFINITIONS
            .names
            .get(&self.symbol)
            .map(|s| s.as_str())
            .unwrap_or(&self.symbol)
    }

    /// Scale factor of this unit expressed in meters
    pub fn meters(&self) -> f64 {
        UNIT_DEFINITIONS.meters.get(&self.symbol).copied().unwrap_or(1.0)
    }
}

impl fmt::Display for PhysicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A physical length tagged with its unit
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalSize {
    pub value: f64,
    pub unit: PhysicalUnit,
}

impl PhysicalSize {
    /// Create a new tagged physical size
    pub fn new(value: f64, unit: PhysicalUnit) -> Self {
        PhysicalSize { value, unit }
    }

    /// This size expressed in meters
    pub fn in_meters(&self) -> f64 {
        self.value * self.unit.meters()
    }
}

impl fmt::Display for PhysicalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
