//! Pixel numeric type enumeration
//!
//! Every decoded buffer declares one of these sample representations.
//! The set is fixed; formats may not invent their own numeric types.

/// Supported pixel sample representations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelType {
    U8,
    U16,
    U32,
    I8,
    I16,
    I32,
    F32,
    F64,
}

impl PixelType {
    /// Size in bytes of a single sample of this type
    pub fn size_in_bytes(&self) -> usize {
        match self {
            PixelType::U8 | PixelType::I8 => 1,
            PixelType::U16 | PixelType::I16 => 2,
            PixelType::U32 | PixelType::I32 | PixelType::F32 => 4,
            PixelType::F64 => 8,
        }
    }

    /// Human-readable name, as shown in metadata listings
    pub fn name(&self) -> &'static str {
        match self {
            PixelType::U8 => "uint8",
            PixelType::U16 => "uint16",
            PixelType::U32 => "uint32",
            PixelType::I8 => "int8",
            PixelType::I16 => "int16",
            PixelType::I32 => "int32",
            PixelType::F32 => "float32",
            PixelType::F64 => "float64",
        }
    }
}
