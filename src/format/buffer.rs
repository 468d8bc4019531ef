//! Dense pixel buffer returned by render calls
//!
//! A `PixelBuffer` is the uncompressed result of a render request:
//! row-major samples of shape (width, height, n_channels), stored as raw
//! little-endian bytes with a declared `PixelType`. Encoding to a raster
//! format like PNG is a host concern and lives outside this structure.

use byteorder::{ByteOrder, LittleEndian};
use image::DynamicImage;

use crate::format::errors::{FormatError, FormatResult};
use crate::format::pixel::PixelType;

/// Dense sample buffer for a decoded region
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    n_channels: u32,
    pixel_type: PixelType,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a zero-filled buffer
    ///
    /// # Arguments
    /// * `width` - Buffer width in pixels
    /// * `height` - Buffer height in pixels
    /// * `n_channels` - Samples per pixel
    /// * `pixel_type` - Sample numeric representation
    pub fn new(width: u32, height: u32, n_channels: u32, pixel_type: PixelType) -> Self {
        let len = width as usize * height as usize * n_channels as usize * pixel_type.size_in_bytes();
        PixelBuffer {
            width,
            height,
            n_channels,
            pixel_type,
            data: vec![0u8; len],
        }
    }

    /// Creates a buffer over existing little-endian sample bytes
    ///
    /// # Arguments
    /// * `width` - Buffer width in pixels
    /// * `height` - Buffer height in pixels
    /// * `n_channels` - Samples per pixel
    /// * `pixel_type` - Sample numeric representation
    /// * `data` - Raw sample bytes, row-major, channels interleaved
    ///
    /// # Returns
    /// The buffer, or an error if the byte length does not match the shape
    pub fn from_raw(
        width: u32,
        height: u32,
        n_channels: u32,
        pixel_type: PixelType,
        data: Vec<u8>,
    ) -> FormatResult<Self> {
        let expected =
            width as usize * height as usize * n_channels as usize * pixel_type.size_in_bytes();
        if data.len() != expected {
            return Err(FormatError::GenericError(format!(
                "Buffer of {} bytes does not match shape {}x{}x{} ({} expected)",
                data.len(),
                width,
                height,
                n_channels,
                expected
            )));
        }

        Ok(PixelBuffer {
            width,
            height,
            n_channels,
            pixel_type,
            data,
        })
    }

    /// Creates a uint8 buffer with every sample set to the same value
    pub fn filled_u8(width: u32, height: u32, n_channels: u32, value: u8) -> Self {
        let len = width as usize * height as usize * n_channels as usize;
        PixelBuffer {
            width,
            height,
            n_channels,
            pixel_type: PixelType::U8,
            data: vec![value; len],
        }
    }

    /// Buffer width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel
    pub fn n_channels(&self) -> u32 {
        self.n_channels
    }

    /// Sample numeric representation
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    /// Raw little-endian sample bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Total number of samples (width * height * n_channels)
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * self.n_channels as usize
    }

    /// Byte offset of a sample, after bounds checking
    fn sample_offset(&self, x: u32, y: u32, c: u32) -> FormatResult<usize> {
        if x >= self.width || y >= self.height || c >= self.n_channels {
            return Err(FormatError::GenericError(format!(
                "Sample ({},{},{}) outside buffer {}x{}x{}",
                x, y, c, self.width, self.height, self.n_channels
            )));
        }
        let index = (y as usize * self.width as usize + x as usize) * self.n_channels as usize
            + c as usize;
        Ok(index * self.pixel_type.size_in_bytes())
    }

    /// Reads a single sample, decoded to f64
    ///
    /// # Arguments
    /// * `x` - Pixel column
    /// * `y` - Pixel row
    /// * `c` - Channel index
    ///
    /// # Returns
    /// The sample value, or an error if the coordinates are outside the buffer
    pub fn sample(&self, x: u32, y: u32, c: u32) -> FormatResult<f64> {
        let offset = self.sample_offset(x, y, c)?;
        let bytes = &self.data[offset..offset + self.pixel_type.size_in_bytes()];

        let value = match self.pixel_type {
            PixelType::U8 => bytes[0] as f64,
            PixelType::I8 => bytes[0] as i8 as f64,
            PixelType::U16 => LittleEndian::read_u16(bytes) as f64,
            PixelType::I16 => LittleEndian::read_i16(bytes) as f64,
            PixelType::U32 => LittleEndian::read_u32(bytes) as f64,
            PixelType::I32 => LittleEndian::read_i32(bytes) as f64,
            PixelType::F32 => LittleEndian::read_f32(bytes) as f64,
            PixelType::F64 => LittleEndian::read_f64(bytes),
        };

        Ok(value)
    }

    /// Resamples the buffer to a new spatial extent with nearest-neighbor
    ///
    /// Resampling changes the spatial extent only: channel count and pixel
    /// type are preserved. When the output extent equals the source extent
    /// the buffer is returned unchanged, so no implicit resampling happens
    /// at native size.
    ///
    /// # Arguments
    /// * `out_width` - Output width in pixels
    /// * `out_height` - Output height in pixels
    ///
    /// # Returns
    /// A new buffer of the requested extent
    pub fn resample_nearest(&self, out_width: u32, out_height: u32) -> PixelBuffer {
        if out_width == self.width && out_height == self.height {
            return self.clone();
        }
        if self.width == 0 || self.height == 0 {
            return PixelBuffer::new(out_width, out_height, self.n_channels, self.pixel_type);
        }

        let pixel_bytes = self.n_channels as usize * self.pixel_type.size_in_bytes();
        let mut data =
            Vec::with_capacity(out_width as usize * out_height as usize * pixel_bytes);

        for oy in 0..out_height as u64 {
            let sy = (oy * self.height as u64 / out_height.max(1) as u64).min(self.height as u64 - 1);
            for ox in 0..out_width as u64 {
                let sx = (ox * self.width as u64 / out_width.max(1) as u64).min(self.width as u64 - 1);
                let start = (sy as usize * self.width as usize + sx as usize) * pixel_bytes;
                data.extend_from_slice(&self.data[start..start + pixel_bytes]);
            }
        }

        PixelBuffer {
            width: out_width,
            height: out_height,
            n_channels: self.n_channels,
            pixel_type: self.pixel_type,
            data,
        }
    }

    /// Converts the buffer to a `DynamicImage` for encoding
    ///
    /// Supported layouts: uint8 with 1/3/4 channels and uint16 with 1 or 3
    /// channels. Other pixel types have no standard raster encoding and
    /// yield an UnsupportedPixelType error.
    pub fn to_dynamic_image(&self) -> FormatResult<DynamicImage> {
        match (self.pixel_type, self.n_channels) {
            (PixelType::U8, 1) => {
                image::GrayImage::from_raw(self.width, self.height, self.data.clone())
                    .map(DynamicImage::ImageLuma8)
                    .ok_or_else(|| FormatError::GenericError("Buffer size mismatch".to_string()))
            }
            (PixelType::U8, 3) => {
                image::RgbImage::from_raw(self.width, self.height, self.data.clone())
                    .map(DynamicImage::ImageRgb8)
                    .ok_or_else(|| FormatError::GenericError("Buffer size mismatch".to_string()))
            }
            (PixelType::U8, 4) => {
                image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
                    .map(DynamicImage::ImageRgba8)
                    .ok_or_else(|| FormatError::GenericError("Buffer size mismatch".to_string()))
            }
            (PixelType::U16, 1) => {
                let mut samples = vec![0u16; self.sample_count()];
                LittleEndian::read_u16_into(&self.data, &mut samples);
                image::ImageBuffer::from_raw(self.width, self.height, samples)
                    .map(DynamicImage::ImageLuma16)
                    .ok_or_else(|| FormatError::GenericError("Buffer size mismatch".to_string()))
            }
            (PixelType::U16, 3) => {
                let mut samples = vec![0u16; self.sample_count()];
                LittleEndian::read_u16_into(&self.data, &mut samples);
                image::ImageBuffer::from_raw(self.width, self.height, samples)
                    .map(DynamicImage::ImageRgb16)
                    .ok_or_else(|| FormatError::GenericError("Buffer size mismatch".to_string()))
            }
            (pixel_type, n_channels) => Err(FormatError::UnsupportedPixelType(format!(
                "{} with {} channels has no raster encoding",
                pixel_type.name(),
                n_channels
            ))),
        }
    }
}
